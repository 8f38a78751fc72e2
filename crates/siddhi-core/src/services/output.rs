//! Text outputs of the app operations.
//!
//! Every operation resolves to one [`AppsOutput`]. The `Display` impl is the
//! exact text the CLI prints, including the messages for expected absence
//! (no local files, app not found, nothing deployed).

use std::fmt;

use crate::domain::{DeployedApp, OperationResult, QueryResult, Report};

/// Result of an app operation, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppsOutput {
    /// The scan directory holds no app files.
    NoLocalApps,
    /// No local app file declares the requested name.
    AppNotFound(String),
    /// Tables declared by a local app.
    Tables(Vec<String>),
    /// Outcome of a single deploy or delete.
    Single(OperationResult),
    /// Per-app outcomes of a batch deploy or delete.
    Report(Report),
    /// The registry lists no active apps (batch delete).
    NoDeployedApps,
    /// The registry refused to list its active apps.
    RegistryUnavailable,
    /// Apps active on the registry.
    Deployed(Vec<DeployedApp>),
    /// Declared names of the local app files; `None` when the scan found
    /// no files at all.
    LocalApps(Option<Vec<String>>),
    /// Records of one table.
    State(QueryResult),
    /// Records of each table declared by an app, in declaration order.
    TableStates(Vec<(String, QueryResult)>),
}

fn write_bullets<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for item in items {
        writeln!(f, " - {item}")?;
    }
    Ok(())
}

impl fmt::Display for AppsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLocalApps => f.write_str("ERROR: There are no Siddhi apps in current folder"),
            Self::AppNotFound(name) => write!(f, "ERROR: Cannot find Siddhi app : {name}"),
            Self::Tables(tables) if tables.is_empty() => f.write_str("None"),
            Self::Tables(tables) => {
                writeln!(f, "Tables:")?;
                write_bullets(f, tables)
            }
            Self::Single(result) => write!(f, "{result}"),
            Self::Report(report) => write!(f, "{report}"),
            Self::NoDeployedApps => f.write_str("There are no Siddhi apps deployed"),
            Self::RegistryUnavailable => f.write_str("ERROR: There was an error."),
            Self::Deployed(apps) if apps.is_empty() => {
                f.write_str("No deployed applications found.")
            }
            Self::Deployed(apps) => {
                writeln!(f, "Deployed applications:")?;
                write_bullets(f, apps)
            }
            Self::LocalApps(names) => {
                writeln!(f, "Local Siddhi applications:")?;
                match names {
                    Some(names) => write_bullets(f, names),
                    None => writeln!(f, " None"),
                }
            }
            Self::State(result) => write!(f, "{result}"),
            Self::TableStates(states) => {
                for (table, result) in states {
                    writeln!(f, "{table}:")?;
                    write!(f, "{result}")?;
                }
                Ok(())
            }
        }
    }
}
