//! Tracing setup for the CLI.
//!
//! Two layers share one filter: compact output on stderr (stdout carries
//! command output) and a daily rolling `siddhicli.log` without ANSI colors.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// File name prefix of the rolling log.
pub const LOG_FILE_NAME: &str = "siddhicli.log";

/// Logging options for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log at debug level regardless of `RUST_LOG`.
    pub verbose: bool,
    /// Folder for the rolling log file; no file logging when `None`.
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    /// Options with the default log folder.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            log_dir: default_log_dir(),
        }
    }

    /// Filter directive used when `RUST_LOG` does not apply.
    pub const fn default_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    fn env_filter(&self) -> EnvFilter {
        if self.verbose {
            return EnvFilter::new(self.default_directive());
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

/// `<data dir>/siddhi/logs`, when the platform has a data dir.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("siddhi").join("logs"))
}

/// Install the global subscriber.
///
/// Returns the file writer's guard, which must live until the process
/// exits so buffered lines are flushed. A log folder that cannot be created
/// only disables the file layer. Calling this twice keeps the first
/// subscriber.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let mut guard = None;
    let file_layer = config.log_dir.as_ref().and_then(|dir| {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Failed to create log directory {}: {e}", dir.display());
            return None;
        }
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
        let (writer, file_guard) = tracing_appender::non_blocking(appender);
        guard = Some(file_guard);
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .compact(),
        )
    });

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(file_layer)
        .try_init()
        .ok();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_directive() {
        assert_eq!(LogConfig::new(false).default_directive(), "warn");
        assert_eq!(LogConfig::new(true).default_directive(), "debug");
    }

    #[test]
    fn test_default_log_dir_is_app_specific() {
        if let Some(dir) = default_log_dir() {
            assert!(dir.ends_with("siddhi/logs"));
        }
    }

    #[test]
    fn test_init_creates_log_dir_and_returns_guard() {
        let temp = tempdir().unwrap();
        let config = LogConfig {
            verbose: true,
            log_dir: Some(temp.path().join("logs")),
        };

        let guard = init(&config);
        assert!(guard.is_some());
        assert!(temp.path().join("logs").is_dir());
    }

    #[test]
    fn test_init_without_log_dir() {
        let config = LogConfig {
            verbose: false,
            log_dir: None,
        };
        assert!(init(&config).is_none());
    }
}
