//! Duplicate-posting collapse.
//!
//! Partitions rows by the dedup key columns, ranks each partition by the
//! order key columns, and keeps exactly the first row per partition. This is
//! how the Internal/External variants of one job posting collapse to a
//! single row carrying the most recent update.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use anyhow::{Context, Result, ensure};
use polars::prelude::{AnyValue, BooleanChunked, Column, DataFrame, NewChunkedArray};
use tracing::info;

use crate::data_utils::{any_to_f64, any_to_string};

/// Ranking value extracted from one order-key cell.
///
/// Numeric cells compare numerically; everything else compares by its string
/// form, which is chronological for timestamp columns (their display form is
/// fixed-width ISO). Null ranks lowest.
#[derive(Debug, Clone)]
struct OrderValue {
    numeric: Option<f64>,
    text: String,
}

impl OrderValue {
    fn from_any(value: AnyValue) -> Self {
        Self {
            numeric: any_to_f64(value.clone()),
            text: any_to_string(value),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self.numeric, other.numeric) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => self.text.cmp(&other.text),
        }
    }
}

fn compare_rank(a: &[OrderValue], b: &[OrderValue]) -> Ordering {
    for (left, right) in a.iter().zip(b.iter()) {
        let ordering = left.compare(right);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Collapse rows sharing the same dedup-key values to one survivor each.
///
/// The survivor is the row ranking first on the order keys (greatest first
/// when `descending`); ties keep the earliest original row, so the result is
/// deterministic. Rows whose dedup key is entirely empty are kept as-is.
/// Output row count equals the number of distinct key values (plus any
/// empty-key rows).
pub fn deduplicate(
    df: &DataFrame,
    dedup_keys: &[String],
    order_keys: &[String],
    descending: bool,
) -> Result<DataFrame> {
    ensure!(!dedup_keys.is_empty(), "deduplicate requires at least one dedup key");
    if df.height() == 0 {
        return Ok(df.clone());
    }
    let key_columns: Vec<&Column> = dedup_keys
        .iter()
        .map(|name| {
            df.column(name)
                .with_context(|| format!("dedup key column {name}"))
        })
        .collect::<Result<_>>()?;
    let order_columns: Vec<&Column> = order_keys
        .iter()
        .map(|name| {
            df.column(name)
                .with_context(|| format!("order key column {name}"))
        })
        .collect::<Result<_>>()?;

    let row_count = df.height();
    let mut composites = Vec::with_capacity(row_count);
    let mut winners: BTreeMap<String, (usize, Vec<OrderValue>)> = BTreeMap::new();
    for idx in 0..row_count {
        let mut composite = String::new();
        for (pos, column) in key_columns.iter().enumerate() {
            if pos > 0 {
                composite.push('|');
            }
            composite.push_str(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)).trim());
        }
        if composite.trim().is_empty() {
            composites.push(String::new());
            continue;
        }
        let rank: Vec<OrderValue> = order_columns
            .iter()
            .map(|column| OrderValue::from_any(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        match winners.entry(composite.clone()) {
            Entry::Vacant(slot) => {
                slot.insert((idx, rank));
            }
            Entry::Occupied(mut slot) => {
                let (best_idx, best_rank) = slot.get_mut();
                let ordering = compare_rank(&rank, best_rank);
                let better = if descending {
                    ordering == Ordering::Greater
                } else {
                    ordering == Ordering::Less
                };
                if better {
                    *best_idx = idx;
                    *best_rank = rank;
                }
            }
        }
        composites.push(composite);
    }

    let mut keep = Vec::with_capacity(row_count);
    for (idx, composite) in composites.iter().enumerate() {
        if composite.is_empty() {
            keep.push(true);
            continue;
        }
        keep.push(winners.get(composite).map(|(best, _)| *best == idx).unwrap_or(false));
    }

    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    let deduped = df.filter(&mask)?;
    info!(
        rows_in = row_count,
        rows_out = deduped.height(),
        "duplicates collapsed"
    );
    Ok(deduped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn keeps_latest_row_per_key() {
        let df = DataFrame::new(vec![
            Series::new("job_id".into(), vec![1i64, 1, 2, 2]).into(),
            Series::new(
                "posting_updated".into(),
                vec![
                    "2019-12-01T00:00:00",
                    "2019-12-08T00:00:00",
                    "2020-02-02T00:00:00",
                    "2020-01-01T00:00:00",
                ],
            )
            .into(),
        ])
        .unwrap();

        let out =
            deduplicate(&df, &keys(&["job_id"]), &keys(&["posting_updated"]), true).unwrap();
        assert_eq!(out.height(), 2);
        let dates = out.column("posting_updated").unwrap().str().unwrap();
        assert_eq!(dates.get(0), Some("2019-12-08T00:00:00"));
        assert_eq!(dates.get(1), Some("2020-02-02T00:00:00"));
    }

    #[test]
    fn numeric_order_keys_compare_numerically() {
        let df = DataFrame::new(vec![
            Series::new("id".into(), vec!["a", "a", "b"]).into(),
            Series::new("version".into(), vec![2i64, 10, 1]).into(),
        ])
        .unwrap();

        let out = deduplicate(&df, &keys(&["id"]), &keys(&["version"]), true).unwrap();
        assert_eq!(out.height(), 2);
        let versions = out.column("version").unwrap().i64().unwrap();
        // 10 > 2 numerically (a string comparison would pick "2").
        assert_eq!(versions.get(0), Some(10));
        assert_eq!(versions.get(1), Some(1));
    }

    #[test]
    fn ties_keep_the_earliest_row() {
        let df = DataFrame::new(vec![
            Series::new("id".into(), vec!["a", "a"]).into(),
            Series::new("updated".into(), vec!["2020-01-01", "2020-01-01"]).into(),
            Series::new("source".into(), vec!["first", "second"]).into(),
        ])
        .unwrap();

        let out = deduplicate(&df, &keys(&["id"]), &keys(&["updated"]), true).unwrap();
        assert_eq!(out.height(), 1);
        let source = out.column("source").unwrap().str().unwrap();
        assert_eq!(source.get(0), Some("first"));
    }

    #[test]
    fn empty_key_rows_are_kept() {
        let df = DataFrame::new(vec![
            Series::new("id".into(), vec![Some("a"), None, None]).into(),
            Series::new("updated".into(), vec!["1", "2", "3"]).into(),
        ])
        .unwrap();

        let out = deduplicate(&df, &keys(&["id"]), &keys(&["updated"]), true).unwrap();
        assert_eq!(out.height(), 3);
    }

    #[test]
    fn ascending_order_keeps_the_smallest() {
        let df = DataFrame::new(vec![
            Series::new("id".into(), vec!["a", "a"]).into(),
            Series::new("rank".into(), vec![5i64, 3]).into(),
        ])
        .unwrap();

        let out = deduplicate(&df, &keys(&["id"]), &keys(&["rank"]), false).unwrap();
        let rank = out.column("rank").unwrap().i64().unwrap();
        assert_eq!(rank.get(0), Some(3));
    }
}
