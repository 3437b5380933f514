//! sparsediff CLI
//!
//! Usage: sparsediff <OLD> <NEW>

use clap::Parser;
use sparsediff_core::errors::ExError;
use sparsediff_core::logging_facility;
use sparsediff_core::SparseDiffError;

mod commands;

const PROGRAM: &str = "sparsediff";

#[derive(Debug, Parser)]
#[command(name = PROGRAM, version)]
#[command(
    about = "Attempt a smart diff between sparse logs in OLD and NEW",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    diff: commands::diff::DiffArgs,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not failures
        Err(e) if !e.use_stderr() => {
            e.print().ok();
            std::process::exit(0);
        }
        Err(e) => exit_with(&usage_error(&e)),
    };

    let level = if cli.diff.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    logging_facility::init_with_level(cli.diff.log_format.profile(), level);

    if let Err(e) = commands::diff::execute(cli.diff) {
        exit_with(&e);
    }
}

fn exit_with(err: &ExError) -> ! {
    eprintln!("{}", err.message());
    std::process::exit(err.kind().exit_code());
}

/// Keep clap's explanation (the paragraph before its own usage block) as
/// the reason of a usage error.
fn usage_error(err: &clap::Error) -> ExError {
    let rendered = err.render().to_string();
    let reason = rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    let reason = reason.strip_prefix("error: ").unwrap_or(&reason).to_string();

    SparseDiffError::Usage {
        program: PROGRAM.to_string(),
        reason,
    }
    .into()
}
