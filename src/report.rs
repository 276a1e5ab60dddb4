use chrono::{DateTime, Utc};

use crate::export::ExportPaths;
use crate::utils::format::pad_display;
use crate::{Config, RankedResult};

pub const HEADER_LABELS: [&str; 7] = [
    "Address",
    "Sent",
    "Recv",
    "Loss",
    "Avg Delay",
    "Speed (MB/s)",
    "Colo",
];

/// Column widths when every printed address fits in 15 characters
const NARROW_WIDTHS: [usize; 7] = [18, 8, 8, 8, 10, 15, 6];
/// Column widths once a long (usually IPv6) address shows up
const WIDE_WIDTHS: [usize; 7] = [42, 8, 8, 8, 10, 15, 6];

const NARROW_ADDRESS_LEN: usize = 15;

fn format_line<S: AsRef<str>>(cells: &[S], widths: &[usize; 7]) -> String {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&pad_display(cell.as_ref(), *width));
    }
    line.truncate(line.trim_end().len());
    line.push('\n');
    line
}

/// Render the first `print_num` results as a fixed-width table.
///
/// Returns None when there is nothing to show.
pub fn render(results: &[RankedResult], print_num: usize) -> Option<String> {
    if print_num == 0 || results.is_empty() {
        return None;
    }

    let count = print_num.min(results.len());
    let rows: Vec<[String; 7]> = results[..count].iter().map(RankedResult::to_row).collect();

    let widths = if rows.iter().any(|row| row[0].len() > NARROW_ADDRESS_LEN) {
        &WIDE_WIDTHS
    } else {
        &NARROW_WIDTHS
    };

    let mut table = format_line(&HEADER_LABELS, widths);
    for row in &rows {
        table.push_str(&format_line(row, widths));
    }
    Some(table)
}

/// Full console output: the timestamped table plus the note naming the
/// written CSV, or the informational line when there is nothing to show.
///
/// Returns None when console output is disabled.
pub fn render_report(
    results: &[RankedResult],
    config: &Config,
    exported: Option<&ExportPaths>,
    now: DateTime<Utc>,
) -> Option<String> {
    if config.no_print() {
        return None;
    }
    if results.is_empty() {
        return Some("\n[info] No complete results, skipping output.\n".to_string());
    }

    let table = render(results, config.print_num)?;
    let mut report = format!("Start: {}\n\n{table}", now.format("%Y-%m-%d %H:%M:%S UTC"));
    if let Some(paths) = exported {
        report.push_str(&format!(
            "\nFull results written to {} (open with any text editor or spreadsheet).\n",
            paths.table.display()
        ));
    }
    Some(report)
}

/// Print the result table to stdout.
pub fn print_results(results: &[RankedResult], config: &Config, exported: Option<&ExportPaths>) {
    if let Some(report) = render_report(results, config, exported, Utc::now()) {
        print!("{report}");
    }
}
