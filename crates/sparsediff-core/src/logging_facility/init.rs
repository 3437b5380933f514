//! Logging initialization module

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Crates whose events are shown when `RUST_LOG` is unset
const DEFAULT_TARGETS: &[&str] = &["sparsediff_core", "sparsediff_cli"];

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output on stderr
    Development,
    /// JSON lines on stderr
    Production,
    /// No subscriber output; see `init_test_capture`
    Test,
}

static INIT_ONCE: Once = Once::new();

fn default_directives(level: Level) -> String {
    DEFAULT_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Initialize the logging facility at warn level
///
/// Call once at startup; later calls are ignored.
pub fn init(profile: Profile) {
    init_with_level(profile, Level::WARN);
}

/// Initialize the logging facility, showing events at `level` and above
/// unless `RUST_LOG` overrides it
///
/// # Profiles
///
/// - **Development**: compact human-readable events, no timestamps
/// - **Production**: JSON structured events
/// - **Test**: bare registry
pub fn init_with_level(profile: Profile, level: Level) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(level))
                .without_time()
                .with_target(false)
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(level))
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        let directives = default_directives(Level::INFO);
        assert_eq!(directives, "sparsediff_core=INFO,sparsediff_cli=INFO");
        assert!(EnvFilter::try_new(directives).is_ok());
    }

    #[test]
    fn test_profile_equality() {
        assert_eq!(Profile::Development, Profile::Development);
        assert_ne!(Profile::Development, Profile::Production);
    }
}
