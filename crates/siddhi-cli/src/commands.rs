//! Subcommand definitions.

use clap::Subcommand;

/// Available subcommands.
///
/// App and table names are optional at parse time; handlers that need one
/// report a missing value themselves.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Get a list of deployed Siddhi applications
    Deployed,

    /// Get a list of Siddhi applications in current folder
    #[command(visible_alias = "l")]
    List,

    /// Deploy Siddhi application to the worker node
    #[command(visible_alias = "i")]
    Install {
        /// Siddhi application name (all local applications when omitted)
        app: Option<String>,
    },

    /// Delete Siddhi application from the worker node
    #[command(visible_alias = "u")]
    Uninstall {
        /// Siddhi application name (all deployed applications when omitted)
        app: Option<String>,
    },

    /// Get Siddhi application meta data
    #[command(visible_alias = "m")]
    Meta {
        /// Siddhi application name
        app: Option<String>,
    },

    /// Get Siddhi application state
    #[command(visible_alias = "s")]
    State {
        /// Siddhi application name
        app: Option<String>,
        /// Application state table name (every declared table when omitted)
        table: Option<String>,
    },
}
