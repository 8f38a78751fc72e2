//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `clap` types in any signature
//! - Expected absence (no files, no apps) is data, not an error
//! - Errors here are hard failures that abort the current invocation

pub mod app_files;
pub mod app_registry;

use thiserror::Error;

pub use app_files::{AppFilesPort, FilesError, FilesResult};
pub use app_registry::{AppRegistryPort, RegistryError, RegistryResult};

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map it to their own error types (CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Remote registry operation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Local app file operation failed.
    #[error(transparent)]
    Files(#[from] FilesError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
