//! Plain-text and JSON rendering of ranked records.
//!
//! This is the presentation collaborator: it reads records, never reorders
//! or modifies them.

use std::fmt::Write as _;

use crate::record::ResolutionRecord;

/// Row shown when no record survived filtering.
pub const EMPTY_STATE: &str = "No valid resolutions found.";

const HEADERS: [&str; 5] = ["Resolution", "Width", "Height", "Area (pixels)", "Link"];

/// Format an integer with `,` thousands grouping (`2073600` -> `2,073,600`).
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

fn row(record: &ResolutionRecord) -> [String; 5] {
    [
        record.original().to_string(),
        record.width().to_string(),
        record.height().to_string(),
        group_thousands(record.area()),
        record.link().to_string(),
    ]
}

/// Render records as an aligned text table.
///
/// An empty slice renders the header followed by [`EMPTY_STATE`].
#[must_use]
pub fn render_table(records: &[ResolutionRecord]) -> String {
    let rows: Vec<[String; 5]> = records.iter().map(row).collect();

    let mut widths = HEADERS.map(str::len);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');

    if rows.is_empty() {
        out.push_str(EMPTY_STATE);
        out.push('\n');
    }
    for cells in &rows {
        push_line(&mut out, cells, &widths);
    }

    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, &width))| match column {
            // numeric columns
            1..=3 => format!("{cell:>width$}"),
            _ => format!("{cell:<width$}"),
        })
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

/// Render records as a JSON array. Missing links become `null`.
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn render_json(records: &[ResolutionRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
