//! Logging setup for cliniclog.
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout to the menu.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crate target that the default filter directive applies to.
const TARGET: &str = "cliniclog";

/// How much diagnostic output to emit, chosen from `-q` / `-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings, such as rejected entries or a full table.
    #[default]
    Normal,
    /// Per-command debug events from the store and menu.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// The most detailed level this verbosity lets through.
    #[must_use]
    pub fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }

    /// Filter directive used when `RUST_LOG` is not set, e.g. `cliniclog=warn`.
    #[must_use]
    pub fn directive(self) -> String {
        format!("{TARGET}={}", self.level().to_string().to_lowercase())
    }
}

/// Build the event filter: `RUST_LOG` when set and valid, else `verbosity`.
fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()))
}

/// Install the global stderr subscriber.
///
/// Call once at startup. A second call is a no-op.
///
/// ```no_run
/// use cliniclog::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init();
}

/// Route events to the test harness at warn level.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Verbosity::Quiet.level(), LevelFilter::ERROR);
        assert_eq!(Verbosity::Normal.level(), LevelFilter::WARN);
        assert_eq!(Verbosity::Verbose.level(), LevelFilter::DEBUG);
        assert_eq!(Verbosity::Trace.level(), LevelFilter::TRACE);
    }

    #[test]
    fn test_default_is_warn() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
        assert_eq!(Verbosity::default().directive(), "cliniclog=warn");
    }

    #[test]
    fn test_directives_parse() {
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Trace,
        ] {
            let directive = verbosity.directive();
            assert!(directive.starts_with("cliniclog="));
            assert!(
                EnvFilter::try_new(&directive).is_ok(),
                "bad directive: {directive}"
            );
        }
        assert_eq!(Verbosity::Verbose.directive(), "cliniclog=debug");
    }
}
