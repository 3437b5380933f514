//! Reading a log file from disk.

use crate::errors::{ExError, SparseDiffError};
use sparsediff_core_types::Side;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read the whole of `path` as UTF-8 text.
///
/// The file handle is dropped before returning on every path.
///
/// # Errors
///
/// Returns an `ERR_IO` error naming `side` and `path` when the file cannot be
/// opened or is not valid UTF-8.
pub fn read_log(path: &Path, side: Side) -> Result<String, ExError> {
    let read_error = |err: std::io::Error| -> ExError {
        SparseDiffError::ReadLog {
            side,
            path: path.display().to_string(),
            reason: err.to_string(),
        }
        .into()
    };

    let mut file = File::open(path).map_err(read_error)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(read_error)?;
    Ok(contents)
}
