//! Per-file comparison pipeline.
//!
//! Every file present in either log gets a [`FileState`]. Each [`Stage`] is
//! applied to the files still [`FileStatus::Unresolved`], which either settle
//! into a terminal bucket or carry a smaller residual into the next stage.

use super::line_insensitive::match_ignoring_line_numbers;
use super::model::{
    ComparisonResult, DiffWarning, FileState, FileStatus, Residual, Stage, StageSummary,
};
use super::multiset::surplus_both;
use crate::log::{parse_log, FileGroups};
use crate::options::DiffOptions;
use crate::{log_op_end, log_op_start};
use sparsediff_core_types::schema::{
    EVENT_ANOMALOUS_FILE, EVENT_FILE_RESOLVED, EVENT_STAGE_SUMMARY, FIELD_CHANGED, FIELD_EVENT,
    FIELD_ONLY_NEW, FIELD_ONLY_OLD, FIELD_PATH, FIELD_STAGE,
};
use std::collections::BTreeSet;
use std::time::Instant;

const OP_COMPARE: &str = "compare_logs";

/// Parse two raw logs and compare them.
pub fn compare_logs(old_log: &str, new_log: &str, options: &DiffOptions) -> ComparisonResult {
    compare_file_groups(parse_log(old_log), parse_log(new_log), options)
}

/// Compare two already-parsed logs.
///
/// Files are visited in ascending path order. See [`ComparisonResult`] for
/// the layout of the output.
pub fn compare_file_groups(
    mut old: FileGroups,
    mut new: FileGroups,
    options: &DiffOptions,
) -> ComparisonResult {
    let started = Instant::now();
    log_op_start!(OP_COMPARE, old_files = old.len(), new_files = new.len());

    let paths: BTreeSet<String> = old.keys().chain(new.keys()).cloned().collect();
    let mut files: Vec<FileState> = paths
        .into_iter()
        .map(|path| {
            let olds = old.remove(&path).unwrap_or_default();
            let news = new.remove(&path).unwrap_or_default();
            FileState::new(path, olds, news)
        })
        .collect();

    let mut warnings = Vec::new();
    let mut stages = Vec::with_capacity(Stage::ALL.len());

    for stage in Stage::ALL {
        for file in files
            .iter_mut()
            .filter(|f| f.status == FileStatus::Unresolved)
        {
            advance(file, stage, options, &mut warnings);
            if options.verbose && file.status == FileStatus::Resolved {
                tracing::info!(
                    { FIELD_EVENT } = EVENT_FILE_RESOLVED,
                    { FIELD_STAGE } = stage.as_str(),
                    { FIELD_PATH } = file.path.as_str(),
                    "{} completely matched: {}",
                    stage.as_str(),
                    file.path
                );
            }
        }

        let summary = StageSummary::tally(stage, &files);
        if options.verbose {
            tracing::info!(
                { FIELD_EVENT } = EVENT_STAGE_SUMMARY,
                { FIELD_STAGE } = stage.as_str(),
                { FIELD_ONLY_NEW } = summary.only_new,
                { FIELD_ONLY_OLD } = summary.only_old,
                { FIELD_CHANGED } = summary.changed,
                "after {}",
                stage.as_str()
            );
        }
        stages.push(summary);
    }

    let result = collect(files, warnings, stages);

    log_op_end!(
        OP_COMPARE,
        duration_ms = started.elapsed().as_millis() as u64,
        removed = result.removed.len(),
        added = result.added.len(),
        warnings = result.warnings.len()
    );
    result
}

/// Apply one stage to an unresolved file.
fn advance(
    file: &mut FileState,
    stage: Stage,
    options: &DiffOptions,
    warnings: &mut Vec<DiffWarning>,
) {
    match stage {
        Stage::Presence => {
            file.status = match (file.old.is_empty(), file.new.is_empty()) {
                (true, true) => {
                    let warning = DiffWarning::AnomalousFile {
                        path: file.path.clone(),
                    };
                    tracing::warn!(
                        { FIELD_EVENT } = EVENT_ANOMALOUS_FILE,
                        { FIELD_PATH } = file.path.as_str(),
                        "{}",
                        warning
                    );
                    warnings.push(warning);
                    FileStatus::Skipped
                }
                (true, false) => FileStatus::OnlyNew,
                (false, true) => FileStatus::OnlyOld,
                (false, false) => FileStatus::Unresolved,
            };
        }
        Stage::ExactFile => {
            if file.old == file.new {
                file.status = FileStatus::Resolved;
            }
        }
        Stage::ExactLine => {
            let (old, new) = surplus_both(&file.old, &file.new);
            file.settle(Residual { old, new });
        }
        Stage::LineInsensitive => {
            let residual =
                match_ignoring_line_numbers(&file.old, &file.new, &options.placeholder, warnings);
            file.settle(residual);
        }
    }
}

/// Flatten terminal buckets: only-old/only-new files first, then changed files.
fn collect(
    files: Vec<FileState>,
    warnings: Vec<DiffWarning>,
    stages: Vec<StageSummary>,
) -> ComparisonResult {
    let mut removed = Vec::new();
    let mut added = Vec::new();
    let mut changed = Vec::new();

    for file in files {
        match file.status {
            FileStatus::OnlyOld => removed.extend(file.old),
            FileStatus::OnlyNew => added.extend(file.new),
            FileStatus::Unresolved => changed.push(file),
            FileStatus::Resolved | FileStatus::Skipped => {}
        }
    }
    for file in changed {
        removed.extend(file.old);
        added.extend(file.new);
    }

    ComparisonResult {
        removed,
        added,
        warnings,
        stages,
    }
}
