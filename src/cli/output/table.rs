//! Table output formatting for CLI commands
//!
//! Renders execution history as a comfy-table with color-coded results.

use std::env;

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

use crate::cli::output::truncate;
use crate::domain::models::{BuildResult, ExecutionRecord};

/// Format a list of execution records as a table.
pub fn format_history_table(records: &[ExecutionRecord]) -> String {
    render_history_table(records, supports_color())
}

fn render_history_table(records: &[ExecutionRecord], use_colors: bool) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Job").add_attribute(Attribute::Bold),
        Cell::new("Run").add_attribute(Attribute::Bold),
        Cell::new("Started").add_attribute(Attribute::Bold),
        Cell::new("Result").add_attribute(Attribute::Bold),
        Cell::new("Pool Values").add_attribute(Attribute::Bold),
    ]);

    for record in records {
        let result_text = record.result.map_or("running", |result| result.as_str());
        let result_cell = if use_colors {
            Cell::new(result_text).fg(result_color(record.result))
        } else {
            Cell::new(result_text)
        };

        let mut values: Vec<String> = record
            .values
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        values.sort();
        let values_text = if values.is_empty() {
            "-".to_string()
        } else {
            values.join(", ")
        };

        table.add_row(vec![
            Cell::new(truncate(&record.job, 30)),
            Cell::new(record.number.to_string()),
            Cell::new(record.started_at.format("%Y-%m-%d %H:%M:%S").to_string()),
            result_cell,
            Cell::new(truncate(&values_text, 50)),
        ]);
    }

    table.to_string()
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

/// Map an execution result to a display color.
fn result_color(result: Option<BuildResult>) -> Color {
    match result {
        None => Color::Cyan,
        Some(BuildResult::Success) => Color::Green,
        Some(BuildResult::Unstable) => Color::Yellow,
        Some(BuildResult::Failure) => Color::Red,
        Some(BuildResult::Aborted | BuildResult::NotBuilt) => Color::DarkGrey,
    }
}
