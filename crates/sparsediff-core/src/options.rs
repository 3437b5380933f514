//! Comparison options.

/// Line marker written into records reported by the line-insensitive stage
pub const DEFAULT_PLACEHOLDER: &str = "XX";

/// Options threaded through the comparison pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    /// Log per-file resolutions and per-stage bucket counts
    pub verbose: bool,
    /// Replaces the line number of records that survive line-insensitive matching
    pub placeholder: String,
}

impl DiffOptions {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}
