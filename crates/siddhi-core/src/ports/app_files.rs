//! Local app file port.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from app file operations.
#[derive(Debug, Error)]
pub enum FilesError {
    /// The scan directory could not be listed.
    #[error("Failed to list app files in {}: {reason}", .dir.display())]
    List {
        /// Directory being scanned
        dir: PathBuf,
        /// Underlying I/O error
        reason: String,
    },

    /// An app file could not be read.
    #[error("Failed to read app file {}: {reason}", .path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        reason: String,
    },
}

/// Result type alias for app file operations.
pub type FilesResult<T> = Result<T, FilesError>;

/// Port trait for enumerating and reading local app definition files.
///
/// The directory-backed implementation is [`crate::local::DirectoryAppFiles`].
#[async_trait]
pub trait AppFilesPort: Send + Sync {
    /// List app definition files in enumeration order.
    ///
    /// An empty directory is `Ok(vec![])`, never an error.
    async fn list_app_files(&self) -> FilesResult<Vec<PathBuf>>;

    /// Read an app definition file as text.
    async fn read_app_file(&self, path: &Path) -> FilesResult<String>;
}
