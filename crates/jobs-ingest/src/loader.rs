//! Polars-based loading of the postings CSV.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

/// Read the postings CSV into an all-string `DataFrame`.
///
/// Schema inference is disabled on purpose: the raw file embeds currency
/// symbols and mixed formats, and typing is the job of the transform stages
/// (with per-row failure isolation), not the reader.
pub fn load_postings_csv(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("open csv reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("read csv: {}", path.display()))?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "postings csv loaded"
    );
    Ok(df)
}
