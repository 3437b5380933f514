//! Diff pipeline types.
//!
//! Result types derive `Serialize` so the JSON report can embed warnings and
//! stage summaries unchanged.

use crate::log::Record;
use serde::Serialize;
use sparsediff_core_types::Side;

/// A relaxation stage of the comparison pipeline, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// File present in only one log
    Presence,
    /// Identical ordered record lists
    ExactFile,
    /// Multiset match on whole records
    ExactLine,
    /// Multiset match with the line number erased
    LineInsensitive,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Presence,
        Stage::ExactFile,
        Stage::ExactLine,
        Stage::LineInsensitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Presence => "presence",
            Stage::ExactFile => "exact_file",
            Stage::ExactLine => "exact_line",
            Stage::LineInsensitive => "line_insensitive",
        }
    }
}

/// Where a file currently stands in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Differences on both sides still to explain; "changed" once all stages ran
    Unresolved,
    /// Only the old side has unexplained records
    OnlyOld,
    /// Only the new side has unexplained records
    OnlyNew,
    /// Nothing to report
    Resolved,
    /// No records on either side; reported as a warning and ignored
    Skipped,
}

/// Per-file pipeline state: the residual records of each side and a status.
#[derive(Debug, Clone, PartialEq)]
pub struct FileState {
    pub path: String,
    pub old: Vec<Record>,
    pub new: Vec<Record>,
    pub status: FileStatus,
}

impl FileState {
    pub fn new(path: impl Into<String>, old: Vec<Record>, new: Vec<Record>) -> Self {
        Self {
            path: path.into(),
            old,
            new,
            status: FileStatus::Unresolved,
        }
    }

    /// Replace both sides with a stage's residual and reclassify.
    pub fn settle(&mut self, residual: Residual) {
        self.status = residual.status();
        self.old = residual.old;
        self.new = residual.new;
    }
}

/// What a matching stage could not explain, per side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Residual {
    pub old: Vec<Record>,
    pub new: Vec<Record>,
}

impl Residual {
    /// Classification implied by which sides are still non-empty
    pub fn status(&self) -> FileStatus {
        match (self.old.is_empty(), self.new.is_empty()) {
            (true, true) => FileStatus::Resolved,
            (false, true) => FileStatus::OnlyOld,
            (true, false) => FileStatus::OnlyNew,
            (false, false) => FileStatus::Unresolved,
        }
    }
}

/// Non-fatal findings raised while comparing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffWarning {
    /// A record with fewer than four fields was left out of
    /// line-insensitive matching
    MalformedRecord {
        side: Side,
        path: String,
        record: String,
    },
    /// A file had no records in either log
    AnomalousFile { path: String },
}

impl std::fmt::Display for DiffWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffWarning::MalformedRecord { side, record, .. } => {
                write!(f, "Found odd line \"{}\" in {} file, ignoring.", record, side)
            }
            DiffWarning::AnomalousFile { path } => {
                write!(f, "Something weird going on with: {}", path)
            }
        }
    }
}

/// Bucket sizes after a stage has run over every file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub stage: Stage,
    pub only_new: usize,
    pub only_old: usize,
    pub changed: usize,
}

impl StageSummary {
    pub fn tally(stage: Stage, files: &[FileState]) -> Self {
        let count = |status: FileStatus| files.iter().filter(|f| f.status == status).count();
        Self {
            stage,
            only_new: count(FileStatus::OnlyNew),
            only_old: count(FileStatus::OnlyOld),
            changed: count(FileStatus::Unresolved),
        }
    }
}

/// Outcome of comparing two logs.
///
/// `removed` holds records of only-old files followed by the old residuals of
/// changed files; `added` mirrors it for the new side. Files appear in
/// ascending path order within each part.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub removed: Vec<Record>,
    pub added: Vec<Record>,
    pub warnings: Vec<DiffWarning>,
    pub stages: Vec<StageSummary>,
}

impl ComparisonResult {
    /// True when neither side has anything to report
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }

    pub fn removed_lines(&self) -> Vec<String> {
        self.removed.iter().map(Record::to_line).collect()
    }

    pub fn added_lines(&self) -> Vec<String> {
        self.added.iter().map(Record::to_line).collect()
    }
}
