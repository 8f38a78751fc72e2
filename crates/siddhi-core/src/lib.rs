#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod local;
pub mod parsing;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    APP_FILE_EXTENSION, AppDefinition, DeployedApp, OperationResult, QueryRecord, QueryResult,
    Report, ReportEntry, StateQuery,
};
pub use local::DirectoryAppFiles;
pub use parsing::{parse_app_name, parse_table_names};
pub use ports::{
    AppFilesPort, AppRegistryPort, CoreError, CoreResult, FilesError, FilesResult, RegistryError,
    RegistryResult,
};
pub use services::{AppsOutput, AppsService};

