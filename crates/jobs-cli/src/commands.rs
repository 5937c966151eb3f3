use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use jobs_ingest::{build_column_profiles, load_pipeline_config, read_csv_table};
use jobs_report::export_csv;

use crate::cli::{ProfileArgs, RunArgs};
use crate::pipeline::{IngestResult, analyze, clean, dedupe, derive, ingest, map_columns, prune};
use crate::summary::{apply_table_style, format_ratio, header_cell};
use crate::types::{RunResult, StageSummary};

/// Run the full pipeline over one raw CSV.
pub fn run_pipeline(args: &RunArgs) -> Result<RunResult> {
    let run_span = info_span!("run", input = %args.input.display());
    let _run_guard = run_span.enter();

    let config = load_pipeline_config(args.config.as_deref())?;
    let mut stages = Vec::new();

    let start = Instant::now();
    let IngestResult { data, profiles: _ } = ingest(&args.input)?;
    let raw_rows = data.height();
    stages.push(StageSummary {
        name: "ingest",
        rows: raw_rows,
        duration_ms: start.elapsed().as_millis(),
    });

    let start = Instant::now();
    let mapped = map_columns(&data, &args.mapping)?;
    stages.push(StageSummary {
        name: "map",
        rows: mapped.height(),
        duration_ms: start.elapsed().as_millis(),
    });

    let start = Instant::now();
    let cleaned = clean(&mapped, &config)?;
    stages.push(StageSummary {
        name: "clean",
        rows: cleaned.height(),
        duration_ms: start.elapsed().as_millis(),
    });

    let start = Instant::now();
    let deduped = dedupe(&cleaned, &config)?;
    stages.push(StageSummary {
        name: "dedupe",
        rows: deduped.height(),
        duration_ms: start.elapsed().as_millis(),
    });

    let start = Instant::now();
    let derived = derive(&deduped, &config)?;
    stages.push(StageSummary {
        name: "derive",
        rows: derived.data.height(),
        duration_ms: start.elapsed().as_millis(),
    });

    let start = Instant::now();
    let pruned = prune(&derived.data, &config)?;
    stages.push(StageSummary {
        name: "prune",
        rows: pruned.height(),
        duration_ms: start.elapsed().as_millis(),
    });

    let output = if args.dry_run {
        None
    } else {
        let start = Instant::now();
        let output_dir = args.output_dir.clone().unwrap_or_else(|| {
            args.input
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("output")
        });
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output dir: {}", output_dir.display()))?;
        let path = export_csv(&pruned, &output_dir.join(&config.export_file_name))?;
        stages.push(StageSummary {
            name: "export",
            rows: pruned.height(),
            duration_ms: start.elapsed().as_millis(),
        });
        Some(path)
    };

    let start = Instant::now();
    let analysis = analyze(&pruned, args.top)?;
    stages.push(StageSummary {
        name: "analyze",
        rows: pruned.height(),
        duration_ms: start.elapsed().as_millis(),
    });

    Ok(RunResult {
        input: args.input.clone(),
        output,
        raw_rows,
        final_rows: pruned.height(),
        unknown_frequencies: derived.unknown_frequencies,
        stages,
        analysis,
    })
}

/// Profile the raw CSV and print the per-column quality table.
pub fn run_profile(args: &ProfileArgs) -> Result<()> {
    let table = read_csv_table(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let profiles = build_column_profiles(&table);

    println!("Input: {}", args.input.display());
    println!("Rows: {}", table.rows.len());
    let mut display = Table::new();
    display.set_header(vec![
        header_cell("Column"),
        header_cell("Nulls"),
        header_cell("Null %"),
        header_cell("Distinct"),
        header_cell("Unique %"),
        header_cell("Numeric"),
    ]);
    apply_table_style(&mut display);
    for (name, profile) in &profiles {
        display.add_row(vec![
            name.clone(),
            profile.null_count.to_string(),
            format_ratio(profile.null_ratio),
            profile.distinct_count.to_string(),
            format_ratio(profile.unique_ratio),
            if profile.is_numeric { "yes" } else { "-" }.to_string(),
        ]);
    }
    println!("{display}");
    Ok(())
}
