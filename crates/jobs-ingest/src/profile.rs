//! Per-column data-quality profiling over the raw table.

use std::collections::{BTreeMap, BTreeSet};

use jobs_model::ColumnProfile;

use crate::csv_table::CsvTable;

/// Profile every column of the raw table.
///
/// Empty-after-trim cells count as null; a column is numeric-like when all
/// of its non-null cells parse as `f64`.
pub fn build_column_profiles(table: &CsvTable) -> BTreeMap<String, ColumnProfile> {
    let mut profiles = BTreeMap::new();
    let row_count = table.rows.len();
    for (col_idx, header) in table.headers.iter().enumerate() {
        let mut non_null = 0usize;
        let mut numeric = 0usize;
        let mut uniques = BTreeSet::new();
        for row in &table.rows {
            let value = row.get(col_idx).map(String::as_str).unwrap_or("");
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            non_null += 1;
            uniques.insert(trimmed.to_string());
            if trimmed.parse::<f64>().is_ok() {
                numeric += 1;
            }
        }
        let null_count = row_count.saturating_sub(non_null);
        let null_ratio = if row_count == 0 {
            1.0
        } else {
            null_count as f64 / row_count as f64
        };
        let unique_ratio = if non_null == 0 {
            0.0
        } else {
            uniques.len() as f64 / non_null as f64
        };
        let is_numeric = non_null > 0 && numeric == non_null;
        profiles.insert(
            header.clone(),
            ColumnProfile {
                null_count,
                null_ratio,
                distinct_count: uniques.len(),
                unique_ratio,
                is_numeric,
            },
        );
    }
    profiles
}
