use serde::{Deserialize, Serialize};

/// Data-quality profile of one source column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Cells that are empty after trimming.
    pub null_count: usize,
    /// `null_count / row_count`; 1.0 for an empty table.
    pub null_ratio: f64,
    /// Distinct non-null values.
    pub distinct_count: usize,
    /// `distinct_count / non_null_count`; 0.0 when every cell is null.
    pub unique_ratio: f64,
    /// True when every non-null cell parses as a number.
    pub is_numeric: bool,
}

impl ColumnProfile {
    /// A column where every non-null value is distinct, e.g. an identifier.
    pub fn looks_unique(&self) -> bool {
        self.distinct_count > 0 && (self.unique_ratio - 1.0).abs() < f64::EPSILON
    }
}
