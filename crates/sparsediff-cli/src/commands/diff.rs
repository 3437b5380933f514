//! Diff command
//!
//! Usage: sparsediff <OLD> <NEW> [--format text|json] [--verbose]

use clap::{Args, ValueEnum};
use sparsediff_core::errors::{ExError, ExErrorKind};
use sparsediff_core::logging_facility::Profile;
use sparsediff_core::options::DEFAULT_PLACEHOLDER;
use sparsediff_core::{compare_logs, log_op_error, read_log, render_json, render_text};
use sparsediff_core::{DiffOptions, Side};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Baseline diagnostic log
    pub old: PathBuf,

    /// Candidate diagnostic log
    pub new: PathBuf,

    /// Report format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log per-file resolutions and bucket counts after each stage
    #[arg(short, long)]
    pub verbose: bool,

    /// Line marker for diagnostics compared without their line number
    #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,

    /// Rendering of log events on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `-`/`+` lines sorted by content
    Text,
    /// A single JSON document
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn profile(&self) -> Profile {
        match self {
            LogFormat::Text => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

impl DiffArgs {
    fn options(&self) -> DiffOptions {
        DiffOptions::default()
            .with_verbose(self.verbose)
            .with_placeholder(self.placeholder.clone())
    }
}

/// Execute the diff command
///
/// # Errors
///
/// Returns `ERR_IO` if a log cannot be read or the report cannot be written,
/// and `ERR_SERIALIZATION` if the JSON report cannot be encoded.
pub fn execute(args: DiffArgs) -> Result<(), ExError> {
    let started = Instant::now();

    let old_log = load(&args.old, Side::Old, started)?;
    let new_log = load(&args.new, Side::New, started)?;

    let result = compare_logs(&old_log, &new_log, &args.options());

    let rendered = match args.format {
        OutputFormat::Text => render_text(&result),
        OutputFormat::Json => vec![render_json(&result)?],
    };

    let mut out = std::io::stdout().lock();
    for line in rendered {
        writeln!(out, "{}", line).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("write_report")
                .with_message(format!("Error writing report: {}", e))
        })?;
    }

    Ok(())
}

fn load(path: &std::path::Path, side: Side, started: Instant) -> Result<String, ExError> {
    read_log(path, side).inspect_err(|e| {
        log_op_error!(
            "read_log",
            e.clone(),
            duration_ms = started.elapsed().as_millis() as u64,
            side = side.as_str()
        );
    })
}
