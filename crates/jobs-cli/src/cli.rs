//! CLI argument definitions for the postings ETL.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "jobs-etl",
    version,
    about = "Batch ETL over the NYC job-postings dataset",
    long_about = "Clean, deduplicate, and analyze the NYC job-postings CSV.\n\n\
                  Renames columns per an external mapping, normalizes text and\n\
                  types, collapses Internal/External duplicate postings, derives\n\
                  annualized salaries and a degree-requirement flag, then writes\n\
                  a cleaned CSV and prints the analytical summaries."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline and write the cleaned CSV.
    Run(RunArgs),

    /// Profile the raw CSV's data quality without transforming it.
    Profile(ProfileArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the raw postings CSV.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Column-mapping JSON file (old name -> new name).
    #[arg(
        long = "mapping",
        value_name = "PATH",
        default_value = "config/column_mapping.json"
    )]
    pub mapping: PathBuf,

    /// Pipeline configuration JSON overriding the built-in defaults.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output directory for the cleaned CSV (default: <input dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Run every stage but skip writing the cleaned CSV.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Rows to show per analytical query.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Path to the raw postings CSV.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
