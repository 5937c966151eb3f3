use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use jobs_transform::any_to_string_for_output;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Cleaned CSV: {}", path.display()),
        None => println!("Cleaned CSV: skipped (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows"),
        header_cell("Duration (ms)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for stage in &result.stages {
        table.add_row(vec![
            stage.name.to_string(),
            stage.rows.to_string(),
            stage.duration_ms.to_string(),
        ]);
    }
    println!("{table}");

    println!(
        "Rows: {} raw -> {} cleaned (one per job id)",
        result.raw_rows, result.final_rows
    );
    if result.unknown_frequencies > 0 {
        println!(
            "Unannualized rows (frequency outside Annual/Hourly/Daily): {}",
            result.unknown_frequencies
        );
    }
    let degree = result.analysis.degree;
    println!(
        "Degree required: {} of {} postings ({})",
        degree.flagged,
        degree.total,
        format_ratio(degree.ratio)
    );

    print_frame("Top agencies by mean annualized salary", &result.analysis.top_agencies);
    print_frame("Postings per category", &result.analysis.categories);
    print_frame("Highest-paid postings", &result.analysis.highest_paid);
    print_frame("Postings per type", &result.analysis.per_type);
}

fn print_frame(title: &str, df: &DataFrame) {
    println!();
    println!("{title}:");
    println!("{}", frame_table(df));
}

/// Render a small result frame as a display table.
pub fn frame_table(df: &DataFrame) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for idx in 0..df.height() {
        let row: Vec<String> = df
            .get_columns()
            .iter()
            .map(|column| any_to_string_for_output(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        table.add_row(row);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn format_ratio(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
