//! CLI-specific error types and mappings.
//!
//! Maps core and client errors to exit codes and user-facing messages.

use siddhi_api::ApiError;
use siddhi_core::{CoreError, RegistryError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required positional argument was not given.
    #[error("ERROR: Argument {0} need to have a value.")]
    MissingArgument(String),

    /// An argument value was rejected.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Remote or other core failure.
    #[error("{0}")]
    Core(String),

    /// IO error (unreadable folder, file or stdout).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: General error
    /// - 2: Invalid argument value
    /// - 74: IO error
    /// - 78: Configuration error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument(_) | Self::Core(_) => 1,
            Self::Arguments(_) => 2,
            Self::Io(_) => 74,     // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }

    /// Whether the message belongs on stdout like normal command output.
    pub const fn is_usage_message(&self) -> bool {
        matches!(self, Self::MissingArgument(_))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Files(files_err) => Self::Io(files_err.to_string()),
            CoreError::Registry(RegistryError::Configuration { message }) => Self::Config(message),
            CoreError::Registry(registry_err) => Self::Core(registry_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
