use std::path::PathBuf;

use polars::prelude::DataFrame;

use jobs_report::DegreeShare;

/// Outcome of one pipeline stage, for the run summary.
#[derive(Debug)]
pub struct StageSummary {
    pub name: &'static str,
    /// Row count after the stage.
    pub rows: usize,
    pub duration_ms: u128,
}

/// Results of the fixed analytical query set.
#[derive(Debug)]
pub struct AnalysisReport {
    pub top_agencies: DataFrame,
    pub categories: DataFrame,
    pub highest_paid: DataFrame,
    pub per_type: DataFrame,
    pub degree: DegreeShare,
}

/// Full result of a pipeline run.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// Cleaned CSV path; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub raw_rows: usize,
    pub final_rows: usize,
    pub unknown_frequencies: usize,
    pub stages: Vec<StageSummary>,
    pub analysis: AnalysisReport,
}
