//! Free-text cleaning transforms.

use std::borrow::Cow;

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::debug;

/// Retain alphanumeric characters, spaces, hyphens, and commas; drop
/// everything else. Relative order is preserved.
pub fn strip_special_characters(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, ' ' | ',' | '-'))
        .collect()
}

/// Trim, then capitalize the first letter of each whitespace-delimited word
/// and lowercase the remainder. Runs of internal whitespace collapse to a
/// single space so no empty words are produced.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for word in value.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            for ch in chars {
                result.extend(ch.to_lowercase());
            }
        }
    }
    result
}

/// Remove special characters from one string column, row by row.
///
/// Null cells pass through unchanged; every other column is untouched.
pub fn remove_special_characters(df: &DataFrame, column: &str) -> Result<DataFrame> {
    rewrite_string_column(df, column, strip_special_characters)
}

/// Convert one string column to title case, row by row.
pub fn to_title_case(df: &DataFrame, column: &str) -> Result<DataFrame> {
    rewrite_string_column(df, column, title_case)
}

fn rewrite_string_column(
    df: &DataFrame,
    column: &str,
    rewrite: impl Fn(&str) -> String,
) -> Result<DataFrame> {
    let ca = df
        .column(column)
        .with_context(|| format!("text column {column}"))?
        .str()
        .with_context(|| format!("text column {column} is not a string column"))?;
    let rewritten: StringChunked = ca.apply_values(|value| Cow::Owned(rewrite(value)));
    debug!(column, rows = df.height(), "text column rewritten");
    let mut out = df.clone();
    out.with_column(rewritten.into_series())?;
    Ok(out)
}
