//! Extraction of numbers embedded in formatted strings.

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

/// Strip everything outside `[0-9]` and parse the remaining digit run.
///
/// Returns `None` when the input carries no digits; extraction never fails
/// the surrounding column conversion. `"$3,000abc"` → 3000.
pub fn extract_integer(value: &str) -> Option<i64> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok()
}

/// Strip everything outside `[0-9.]`, parse as a decimal, round to 2 places.
///
/// `"$300.99abc"` → 300.99. A remainder that still fails to parse (for
/// example two embedded dots) yields `None`, the same isolation as an input
/// with no digits at all.
pub fn extract_decimal(value: &str) -> Option<f64> {
    let kept: String = value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    if kept.is_empty() {
        return None;
    }
    kept.parse::<f64>().ok().map(round2)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Coerce one string column to integers with per-row failure isolation:
/// a cell that yields no number becomes null, the rest of the column
/// converts normally.
pub fn convert_to_integer(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let ca = df
        .column(column)
        .with_context(|| format!("numeric column {column}"))?
        .str()
        .with_context(|| format!("numeric column {column} is not a string column"))?;
    let values: Vec<Option<i64>> = ca
        .into_iter()
        .map(|opt| opt.and_then(extract_integer))
        .collect();
    log_null_increase(column, ca.null_count(), values.iter().filter(|v| v.is_none()).count());
    let mut out = df.clone();
    out.with_column(Series::new(column.into(), values))?;
    Ok(out)
}

/// Coerce one string column to decimals (2 places) with per-row failure
/// isolation.
pub fn convert_to_decimal(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let ca = df
        .column(column)
        .with_context(|| format!("numeric column {column}"))?
        .str()
        .with_context(|| format!("numeric column {column} is not a string column"))?;
    let values: Vec<Option<f64>> = ca
        .into_iter()
        .map(|opt| opt.and_then(extract_decimal))
        .collect();
    log_null_increase(column, ca.null_count(), values.iter().filter(|v| v.is_none()).count());
    let mut out = df.clone();
    out.with_column(Series::new(column.into(), values))?;
    Ok(out)
}

fn log_null_increase(column: &str, nulls_before: usize, nulls_after: usize) {
    if nulls_after > nulls_before {
        debug!(
            column,
            unparseable = nulls_after - nulls_before,
            "cells without an extractable number became null"
        );
    }
}
