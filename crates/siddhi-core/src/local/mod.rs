//! Directory-backed app file scanner.
//!
//! Lists the `.siddhi` files directly inside one directory (no recursion)
//! and reads them as text. Bytes that are not valid UTF-8 are replaced with
//! U+FFFD rather than failing the read.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::APP_FILE_EXTENSION;
use crate::ports::{AppFilesPort, FilesError, FilesResult};

/// [`AppFilesPort`] over a single directory.
#[derive(Debug, Clone)]
pub struct DirectoryAppFiles {
    dir: PathBuf,
}

impl DirectoryAppFiles {
    /// Scan `dir` for app files.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Scan the process working directory.
    pub fn current_dir() -> FilesResult<Self> {
        std::env::current_dir()
            .map(Self::new)
            .map_err(|e| FilesError::List {
                dir: PathBuf::from("."),
                reason: e.to_string(),
            })
    }

    /// Directory being scanned.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Whether a file name carries the app file extension.
fn is_app_file_name(name: &str) -> bool {
    name.strip_suffix(APP_FILE_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}

#[async_trait]
impl AppFilesPort for DirectoryAppFiles {
    async fn list_app_files(&self) -> FilesResult<Vec<PathBuf>> {
        let list_error = |e: std::io::Error| FilesError::List {
            dir: self.dir.clone(),
            reason: e.to_string(),
        };

        let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(list_error)?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(list_error)? {
            let name = entry.file_name();
            if !name.to_str().is_some_and(is_app_file_name) {
                continue;
            }
            // Follows symlinks; dangling links are skipped.
            let path = entry.path();
            let is_file = tokio::fs::metadata(&path)
                .await
                .is_ok_and(|metadata| metadata.is_file());
            if is_file {
                files.push(path);
            }
        }

        debug!(dir = %self.dir.display(), count = files.len(), "scanned app files");
        Ok(files)
    }

    async fn read_app_file(&self, path: &Path) -> FilesResult<String> {
        let bytes = tokio::fs::read(path).await.map_err(|e| FilesError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
