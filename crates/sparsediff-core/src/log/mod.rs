//! Diagnostic log parsing.
//!
//! Turns a raw build log into per-file lists of [`Record`]s:
//!
//! 1. [`tokenizer::group_by_file`] splits lines into colon-delimited fields and
//!    de-interleaves them by file path.
//! 2. [`continuation::merge_continuations`] folds multi-line diagnostics back
//!    into one logical record per file.
//!
//! [`parse_log`] runs both passes.

pub mod continuation;
pub mod record;
pub mod source;
pub mod tokenizer;

pub use continuation::merge_continuations;
pub use record::Record;
pub use source::read_log;
pub use tokenizer::{group_by_file, FileGroups};

/// Parse a raw log into merged per-file record lists.
pub fn parse_log(log: &str) -> FileGroups {
    group_by_file(log)
        .into_iter()
        .map(|(path, records)| (path, merge_continuations(records)))
        .collect()
}
