//! App definitions (local files) and deployed apps (remote registry).

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::parsing::{parse_app_name, parse_table_names};

/// File extension of Siddhi app definition files, without the leading dot.
pub const APP_FILE_EXTENSION: &str = "siddhi";

/// A Siddhi app definition read from a local `.siddhi` file.
///
/// Derived from the file contents on every invocation; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDefinition {
    /// Path of the definition file.
    pub path: PathBuf,
    /// Name declared on the first line, empty when the file has none.
    pub name: String,
    /// Tables declared anywhere in the body, in document order.
    pub tables: Vec<String>,
}

impl AppDefinition {
    /// Build a definition from a file path and its contents.
    pub fn from_source(path: impl Into<PathBuf>, source: &str) -> Self {
        Self {
            path: path.into(),
            name: parse_app_name(source),
            tables: parse_table_names(source),
        }
    }

    /// Whether the file declares an app name.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Whether this definition declares exactly `name`.
    pub fn is_named(&self, name: &str) -> bool {
        self.has_name() && self.name == name
    }

    /// The definition file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// An app known to the remote worker's active-app registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeployedApp {
    pub name: String,
}

impl DeployedApp {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for DeployedApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
