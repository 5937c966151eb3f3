//! Cleaned-table CSV export.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

/// Write the table as a delimited file: header row of column names, then one
/// line per row. I/O failures propagate to the caller; no partial-file
/// cleanup is attempted or claimed.
pub fn export_csv(df: &DataFrame, path: &Path) -> Result<PathBuf> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut data = df.clone();
    CsvWriter::new(file)
        .include_header(true)
        .finish(&mut data)
        .with_context(|| format!("write csv: {}", path.display()))?;
    info!(path = %path.display(), rows = df.height(), "cleaned table exported");
    Ok(path.to_path_buf())
}
