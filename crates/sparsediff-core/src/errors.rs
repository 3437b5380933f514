use sparsediff_core_types::Side;
use thiserror::Error;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// testing and log correlation. Only fatal conditions are represented here;
/// non-fatal findings are carried as [`crate::diff::model::DiffWarning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Wrong command-line arguments
    Usage,
    /// A log file could not be opened or read
    Io,
    /// A result could not be serialized for output
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Usage => "ERR_USAGE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }

    /// Process exit status for this kind. Every fatal kind exits with 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for the
/// human-facing message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    side: Option<Side>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            side: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add log side context
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the log side context, if any
    pub fn side(&self) -> Option<Side> {
        self.side
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for sparsediff operations
///
/// Public functions return [`ExError`]; these variants supply its kind,
/// context and user-facing message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SparseDiffError {
    /// Command line rejected: missing or extra paths, unknown option, bad value
    #[error("{reason}\nUsage: {program} [OPTIONS] <oldfile> <newfile>")]
    Usage { program: String, reason: String },

    /// A log file could not be opened or read
    #[error("Error reading {side} log file {path}: {reason}")]
    ReadLog {
        side: Side,
        path: String,
        reason: String,
    },

    /// The comparison result could not be rendered
    #[error("Failed to serialize report: {message}")]
    Serialization { message: String },
}

impl From<SparseDiffError> for ExError {
    fn from(err: SparseDiffError) -> Self {
        let message = err.to_string();
        match err {
            SparseDiffError::Usage { .. } => ExError::new(ExErrorKind::Usage)
                .with_op("parse_args")
                .with_message(message),

            SparseDiffError::ReadLog { side, path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("read_log")
                .with_side(side)
                .with_path(path)
                .with_message(message),

            SparseDiffError::Serialization { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("render_report")
                .with_message(message),
        }
    }
}

impl From<serde_json::Error> for SparseDiffError {
    fn from(err: serde_json::Error) -> Self {
        SparseDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        SparseDiffError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::Usage, "ERR_USAGE"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
            assert_eq!(kind.exit_code(), 1);
        }
    }

    #[test]
    fn test_read_log_converts_to_io_kind() {
        let err = SparseDiffError::ReadLog {
            side: Side::New,
            path: "build/new.log".to_string(),
            reason: "No such file or directory".to_string(),
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::Io);
        assert_eq!(ex.path(), Some("build/new.log"));
        assert_eq!(ex.side(), Some(Side::New));
        assert_eq!(ex.op(), Some("read_log"));
        assert!(ex.message().starts_with("Error reading new log file build/new.log"));
    }

    #[test]
    fn test_usage_converts_to_usage_kind() {
        let err = SparseDiffError::Usage {
            program: "sparsediff".to_string(),
            reason: "unexpected argument 'c.log' found".to_string(),
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::Usage);
        assert_eq!(ex.op(), Some("parse_args"));
        assert_eq!(
            ex.message(),
            "unexpected argument 'c.log' found\nUsage: sparsediff [OPTIONS] <oldfile> <newfile>"
        );
    }

    #[test]
    fn test_display_includes_code_and_path() {
        let ex = ExError::new(ExErrorKind::Io)
            .with_op("read_log")
            .with_path("a.log")
            .with_message("boom");
        assert_eq!(
            ex.to_string(),
            "[ERR_IO] in operation 'read_log': boom (path: a.log)"
        );
    }
}
