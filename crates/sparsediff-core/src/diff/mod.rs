//! Diagnostic log diff engine.
//!
//! Compares two build logs file by file and reports which diagnostics
//! disappeared (removed) and which appeared (added).
//!
//! ## Entry point
//!
//! ```
//! use sparsediff_core::diff::{compare_logs, render_text};
//! use sparsediff_core::DiffOptions;
//!
//! let old = "a.c:1:1: warning: foo";
//! let new = "a.c:1:1: warning: foo\na.c:2:2: warning: bar";
//! let result = compare_logs(old, new, &DiffOptions::default());
//! assert_eq!(render_text(&result), vec!["+a.c:2:2: warning: bar"]);
//! ```
//!
//! ## Relaxation stages
//!
//! Each file moves through progressively looser matching until both sides
//! have nothing left to explain:
//!
//! 1. **Presence**: a file seen in only one log is wholly added or removed.
//! 2. **Exact file**: identical record lists are dropped outright.
//! 3. **Exact line**: records are matched as multisets.
//! 4. **Line-insensitive**: records are matched ignoring the line number,
//!    suppressing diagnostics that only moved.

pub mod line_insensitive;
pub mod model;
pub mod multiset;
pub mod pipeline;
pub mod report;

pub use model::{ComparisonResult, DiffWarning, FileState, FileStatus, Residual, Stage, StageSummary};
pub use pipeline::{compare_file_groups, compare_logs};
pub use report::{render_json, render_text};
