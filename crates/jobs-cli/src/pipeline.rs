//! Staged postings pipeline.
//!
//! The stages run strictly in order, each consuming the previous stage's
//! frame and returning a new one:
//!
//! 1. **Ingest**: read the raw CSV, profile data quality
//! 2. **Map**: load the column mapping, rename columns
//! 3. **Clean**: text normalization and type coercion, per column
//! 4. **Dedupe**: collapse Internal/External duplicate postings
//! 5. **Derive**: annualized salaries, degree-requirement flag
//! 6. **Prune**: drop configured columns
//! 7. **Export**: write the cleaned CSV (skipped on dry runs)
//! 8. **Analyze**: run the fixed query set

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span, warn};

use jobs_ingest::{build_column_profiles, load_column_mapping, load_postings_csv, read_csv_table};
use jobs_model::{ColumnProfile, PipelineConfig, PostingType, schema};
use jobs_report::{
    degree_requirement_share, highest_paid_postings, postings_per_category, postings_per_type,
    top_agencies_by_salary,
};
use jobs_transform::{
    annualize_salary, convert_to_datetime, convert_to_decimal, convert_to_integer, deduplicate,
    drop_columns, flag_degree_requirement, remove_special_characters, rename_columns,
    to_title_case,
};

use crate::types::AnalysisReport;

/// Result of the ingest stage.
pub struct IngestResult {
    /// Raw table, every column loaded as string.
    pub data: DataFrame,
    /// Per-column data-quality profiles.
    pub profiles: BTreeMap<String, ColumnProfile>,
}

/// Read the raw CSV and profile its quality.
pub fn ingest(input: &Path) -> Result<IngestResult> {
    let span = info_span!("ingest", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_csv_table(input).with_context(|| format!("read {}", input.display()))?;
    let profiles = build_column_profiles(&table);
    if table.headers.len() != schema::RAW_COLUMN_COUNT {
        warn!(
            expected = schema::RAW_COLUMN_COUNT,
            found = table.headers.len(),
            "raw column count differs from the documented schema"
        );
    }
    let sparse_columns = profiles
        .values()
        .filter(|profile| profile.null_ratio > 0.5)
        .count();

    let data = load_postings_csv(input)?;
    info!(
        rows = data.height(),
        columns = data.width(),
        sparse_columns,
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(IngestResult { data, profiles })
}

/// Load the mapping file and rename columns.
pub fn map_columns(df: &DataFrame, mapping_path: &Path) -> Result<DataFrame> {
    let span = info_span!("map", mapping = %mapping_path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mapping = load_column_mapping(mapping_path)?;
    let mapped = rename_columns(df, &mapping)?;
    info!(
        entries = mapping.len(),
        duration_ms = start.elapsed().as_millis(),
        "map complete"
    );
    Ok(mapped)
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|col| col.as_str() == name)
}

/// Per-column cleaning: text normalization and type coercion.
///
/// Configured columns missing from the frame are skipped with a debug log so
/// a reduced input (or reduced config) never aborts the run.
pub fn clean(df: &DataFrame, config: &PipelineConfig) -> Result<DataFrame> {
    let span = info_span!("clean");
    let _guard = span.enter();
    let start = Instant::now();

    let mut out = df.clone();
    for column in &config.text_columns {
        if !has_column(&out, column) {
            debug!(column = %column, "clean skipped, column not present");
            continue;
        }
        out = remove_special_characters(&out, column)?;
    }
    for column in &config.title_case_columns {
        if !has_column(&out, column) {
            debug!(column = %column, "clean skipped, column not present");
            continue;
        }
        out = to_title_case(&out, column)?;
    }
    for column in &config.integer_columns {
        if !has_column(&out, column) {
            debug!(column = %column, "clean skipped, column not present");
            continue;
        }
        out = convert_to_integer(&out, column)?;
    }
    for column in &config.decimal_columns {
        if !has_column(&out, column) {
            debug!(column = %column, "clean skipped, column not present");
            continue;
        }
        out = convert_to_decimal(&out, column)?;
    }
    for column in &config.datetime_columns {
        if !has_column(&out, column) {
            debug!(column = %column, "clean skipped, column not present");
            continue;
        }
        out = convert_to_datetime(&out, column)?;
    }
    if has_column(&out, schema::POSTING_TYPE) {
        let unknown_posting_types = out
            .column(schema::POSTING_TYPE)?
            .str()?
            .into_iter()
            .flatten()
            .filter(|value| PostingType::parse(value).is_none())
            .count();
        if unknown_posting_types > 0 {
            warn!(
                unknown_posting_types,
                "posting type outside Internal/External"
            );
        }
    }
    info!(duration_ms = start.elapsed().as_millis(), "clean complete");
    Ok(out)
}

/// Collapse duplicate postings per the configured grain.
pub fn dedupe(df: &DataFrame, config: &PipelineConfig) -> Result<DataFrame> {
    let span = info_span!("dedupe");
    let _guard = span.enter();
    let start = Instant::now();

    let out = deduplicate(
        df,
        &config.dedup_keys,
        &config.order_keys,
        config.dedup_descending,
    )?;
    info!(
        rows_in = df.height(),
        rows_out = out.height(),
        duration_ms = start.elapsed().as_millis(),
        "dedupe complete"
    );
    Ok(out)
}

/// Result of the derive stage.
pub struct DeriveResult {
    pub data: DataFrame,
    pub unknown_frequencies: usize,
}

/// Feature engineering: salary annualization and degree flagging.
pub fn derive(df: &DataFrame, config: &PipelineConfig) -> Result<DeriveResult> {
    let span = info_span!("derive");
    let _guard = span.enter();
    let start = Instant::now();

    let annualized = annualize_salary(df)?;
    let flagged = flag_degree_requirement(
        &annualized.data,
        &config.qualification_column,
        &config.degree_keywords,
    )?;
    info!(
        unknown_frequencies = annualized.unknown_frequencies,
        duration_ms = start.elapsed().as_millis(),
        "derive complete"
    );
    Ok(DeriveResult {
        data: flagged,
        unknown_frequencies: annualized.unknown_frequencies,
    })
}

/// Drop the configured columns before export.
pub fn prune(df: &DataFrame, config: &PipelineConfig) -> Result<DataFrame> {
    let span = info_span!("prune");
    let _guard = span.enter();
    let start = Instant::now();

    let out = drop_columns(df, &config.drop_columns)?;
    info!(
        columns_in = df.width(),
        columns_out = out.width(),
        duration_ms = start.elapsed().as_millis(),
        "prune complete"
    );
    Ok(out)
}

/// Run the fixed analytical query set over the cleaned table.
pub fn analyze(df: &DataFrame, top: usize) -> Result<AnalysisReport> {
    let span = info_span!("analyze");
    let _guard = span.enter();
    let start = Instant::now();

    let report = AnalysisReport {
        top_agencies: top_agencies_by_salary(df, top)?,
        categories: postings_per_category(df, top)?,
        highest_paid: highest_paid_postings(df, top)?,
        per_type: postings_per_type(df)?,
        degree: degree_requirement_share(df)?,
    };
    info!(duration_ms = start.elapsed().as_millis(), "analyze complete");
    Ok(report)
}
