//! Rendering a [`ComparisonResult`] for display.

use crate::diff::model::{ComparisonResult, DiffWarning, StageSummary};
use crate::errors::ExError;
use serde::Serialize;

pub const REMOVED_MARKER: char = '-';
pub const ADDED_MARKER: char = '+';

/// One line per reported diagnostic, `-` for removed and `+` for added.
///
/// Lines are sorted by their content without the marker, so the removed and
/// added versions of a diagnostic end up next to each other. The sort is
/// stable: for equal content the removed line comes first.
pub fn render_text(result: &ComparisonResult) -> Vec<String> {
    let mut lines: Vec<String> = result
        .removed
        .iter()
        .map(|r| format!("{}{}", REMOVED_MARKER, r))
        .chain(result.added.iter().map(|r| format!("{}{}", ADDED_MARKER, r)))
        .collect();
    lines.sort_by(|a, b| a[1..].cmp(&b[1..]));
    lines
}

#[derive(Serialize)]
struct JsonReport<'a> {
    removed: Vec<String>,
    added: Vec<String>,
    warnings: &'a [DiffWarning],
    stages: &'a [StageSummary],
}

/// Pretty-printed JSON with sorted `removed`/`added` lines, the warnings and
/// the per-stage summaries.
///
/// # Errors
///
/// Returns an `ERR_SERIALIZATION` error if serde_json fails to encode the
/// report.
pub fn render_json(result: &ComparisonResult) -> Result<String, ExError> {
    let mut removed = result.removed_lines();
    let mut added = result.added_lines();
    removed.sort();
    added.sort();

    let report = JsonReport {
        removed,
        added,
        warnings: &result.warnings,
        stages: &result.stages,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
