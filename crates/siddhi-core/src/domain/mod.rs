//! Domain types for Siddhi apps.
//!
//! These are pure data types with no infrastructure dependencies. The
//! adapters (`siddhi-api`, `siddhi-cli`) convert to and from them at their
//! boundaries.

mod app;
mod query;
mod report;

pub use app::{APP_FILE_EXTENSION, AppDefinition, DeployedApp};
pub use query::{QueryRecord, QueryResult, StateQuery};
pub use report::{OperationResult, Report, ReportEntry};
