//! ISO 8601 timestamp parsing with row-level failure isolation.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse an ISO 8601 timestamp, with or without fractional seconds.
///
/// Date-only input resolves to midnight. Malformed input yields `None` so a
/// bad cell never aborts the column conversion.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Coerce one string column to a timestamp column.
///
/// Cells that fail to parse become null; the row is kept.
pub fn convert_to_datetime(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let ca = df
        .column(column)
        .with_context(|| format!("datetime column {column}"))?
        .str()
        .with_context(|| format!("datetime column {column} is not a string column"))?;
    let values: Vec<Option<NaiveDateTime>> = ca
        .into_iter()
        .map(|opt| opt.and_then(parse_datetime))
        .collect();
    let unparseable = values.iter().filter(|v| v.is_none()).count() - ca.null_count();
    if unparseable > 0 {
        debug!(column, unparseable, "cells without a parseable timestamp became null");
    }
    let mut out = df.clone();
    out.with_column(Series::new(column.into(), values))?;
    Ok(out)
}
