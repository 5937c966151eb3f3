//! Loading of the external configuration files.
//!
//! Both files are read exactly once, before any transform runs; a missing or
//! malformed file is a configuration error that aborts the run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use jobs_model::{ColumnMapping, PipelineConfig};

/// Load the old→new column rename table from a JSON object.
pub fn load_column_mapping(path: &Path) -> Result<ColumnMapping> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read column mapping: {}", path.display()))?;
    let mapping: ColumnMapping = serde_json::from_str(&content)
        .with_context(|| format!("parse column mapping: {}", path.display()))?;
    if mapping.is_empty() {
        bail!("column mapping is empty: {}", path.display());
    }
    info!(path = %path.display(), entries = mapping.len(), "column mapping loaded");
    Ok(mapping)
}

/// Load the pipeline configuration, falling back to defaults when no path is
/// given. Fields absent from the file keep their default values.
pub fn load_pipeline_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("read pipeline config: {}", path.display()))?;
    let config: PipelineConfig = serde_json::from_str(&content)
        .with_context(|| format!("parse pipeline config: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid pipeline config: {}", path.display()))?;
    info!(path = %path.display(), "pipeline config loaded");
    Ok(config)
}
