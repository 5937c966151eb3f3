//! Degree-requirement flagging.

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, NamedFrom, Series};

use jobs_model::schema;

/// Add the binary `is_degree_req` column: 1 when the text column contains
/// any of the keywords case-insensitively, else 0. Null text flags 0.
///
/// The keyword set is injected (see `PipelineConfig::degree_keywords`) so
/// callers and tests can substitute their own.
pub fn flag_degree_requirement(
    df: &DataFrame,
    text_column: &str,
    keywords: &[String],
) -> Result<DataFrame> {
    let ca = df
        .column(text_column)
        .with_context(|| format!("qualification column {text_column}"))?
        .str()
        .with_context(|| format!("qualification column {text_column} is not a string column"))?;
    let lowered: Vec<String> = keywords
        .iter()
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect();
    let flags: Vec<i32> = ca
        .into_iter()
        .map(|opt| match opt {
            Some(text) => {
                let lower = text.to_lowercase();
                if lowered.iter().any(|keyword| lower.contains(keyword)) {
                    1
                } else {
                    0
                }
            }
            None => 0,
        })
        .collect();
    let mut out = df.clone();
    out.with_column(Series::new(schema::IS_DEGREE_REQ.into(), flags))?;
    Ok(out)
}
