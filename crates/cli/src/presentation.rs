// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use linetally_engine::EmptyLineReport;
use linetally_engine::stats::{ExtensionStats, Summary};
use serde::Serialize;
use std::fmt::{Display, Write as _};
use std::io::Write;

const LABEL_WIDTH: usize = 20;
const NUM_WIDTH: usize = 16;
const TABLE_WIDTH: usize = LABEL_WIDTH + 3 * (NUM_WIDTH + 1);

/// Entries ordered by non-empty line count, largest first; ties by extension.
#[must_use]
pub fn sorted_rows(summary: &Summary) -> Vec<&ExtensionStats> {
    let mut rows: Vec<_> = summary.iter().collect();
    rows.sort_by(|a, b| {
        b.non_empty_lines
            .cmp(&a.non_empty_lines)
            .then_with(|| a.extension.cmp(&b.extension))
    });
    rows
}

fn push_row(
    out: &mut String,
    label: &str,
    files: impl Display,
    empty: impl Display,
    lines: impl Display,
) {
    let _ = writeln!(
        out,
        "{label:<LABEL_WIDTH$} {files:>NUM_WIDTH$} {empty:>NUM_WIDTH$} {lines:>NUM_WIDTH$}"
    );
}

fn push_divider(out: &mut String) {
    out.push_str(&"-".repeat(TABLE_WIDTH));
    out.push('\n');
}

#[must_use]
pub fn render_table(summary: &Summary) -> String {
    let mut out = String::new();

    push_divider(&mut out);
    push_row(&mut out, "Extension", "# of files", "# of empty lines", "line count");
    push_divider(&mut out);
    for s in sorted_rows(summary) {
        push_row(&mut out, &s.extension, s.files, s.empty_lines, s.non_empty_lines);
    }
    push_divider(&mut out);
    push_row(
        &mut out,
        "Sum:",
        summary.total_files(),
        summary.total_empty_lines(),
        summary.total_non_empty_lines(),
    );
    push_divider(&mut out);

    out
}

#[derive(Serialize)]
struct Totals {
    files: usize,
    empty_lines: usize,
    lines: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    extensions: Vec<&'a ExtensionStats>,
    total: Totals,
}

/// # Errors
/// Fails only if serialization fails.
pub fn render_json(summary: &Summary) -> Result<String> {
    let report = JsonReport {
        version: crate::VERSION,
        extensions: sorted_rows(summary),
        total: Totals {
            files: summary.total_files(),
            empty_lines: summary.total_empty_lines(),
            lines: summary.total_non_empty_lines(),
        },
    };
    Ok(serde_json::to_string_pretty(&report)? + "\n")
}

#[must_use]
pub fn render_empty_lines(reports: &[EmptyLineReport]) -> String {
    let mut out = String::new();
    for r in reports {
        let _ = writeln!(out, "File: {}", r.path.display());
        let _ = writeln!(out, "On lines: {:?}", r.indices);
    }
    out
}

/// # Errors
/// Returns an error if stdout cannot be written.
pub fn print_report(summary: &Summary, format: OutputFormat) -> Result<()> {
    let text = match format {
        OutputFormat::Table => render_table(summary),
        OutputFormat::Json => render_json(summary)?,
    };
    write_stdout(&text)
}

/// # Errors
/// Returns an error if stdout cannot be written.
pub fn print_empty_lines(reports: &[EmptyLineReport]) -> Result<()> {
    write_stdout(&render_empty_lines(reports))
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
