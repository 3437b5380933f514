//! sparsediff core - noise-tolerant diff of compiler diagnostic logs
//!
//! This crate provides:
//! - Log parsing: de-interleaving by file and rebuilding multi-line diagnostics
//! - The multiset comparator behind every matching stage
//! - The per-file comparison pipeline with line-number-insensitive matching
//! - Text and JSON report rendering
//! - The error and logging facilities shared with the CLI

pub mod diff;
pub mod errors;
pub mod log;
pub mod logging_facility;
pub mod options;

pub use sparsediff_core_types::{schema, Side};

// Used by the logging macros so callers need no direct tracing dependency
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use diff::{compare_logs, render_json, render_text, ComparisonResult, DiffWarning};
pub use errors::{ExError, ExErrorKind, SparseDiffError};
pub use log::{parse_log, read_log, Record};
pub use options::DiffOptions;
