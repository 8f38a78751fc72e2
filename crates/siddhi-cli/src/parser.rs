//! Main CLI parser and top-level argument handling.
//!
//! Global options are the top layer of the configuration; each can also be
//! set through its `SIDDHI_*` environment variable.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;
use crate::config::ConfigOverrides;

/// Command-line interface for managing Siddhi apps on a worker node.
#[derive(Parser, Debug)]
#[command(name = "siddhi")]
#[command(about = "Manage Siddhi applications on a worker node")]
#[command(version)]
pub struct Cli {
    /// Read settings from this JSON file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Look for .siddhi files in this folder instead of the current one
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Base URL of the app management API
    #[arg(long, global = true, env = "SIDDHI_APPS_HOST", value_name = "URL")]
    pub apps_host: Option<String>,

    /// Base URL of the store query API
    #[arg(long, global = true, env = "SIDDHI_QUERY_HOST", value_name = "URL")]
    pub query_host: Option<String>,

    /// Pre-encoded basic auth token
    #[arg(long, global = true, env = "SIDDHI_AUTHORIZATION", hide_env_values = true)]
    pub authorization: Option<String>,

    /// Basic auth user name
    #[arg(long, global = true, env = "SIDDHI_USERNAME")]
    pub username: Option<String>,

    /// Basic auth password
    #[arg(long, global = true, env = "SIDDHI_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Accept invalid TLS certificates (development workers only)
    #[arg(long, global = true, env = "SIDDHI_INSECURE")]
    pub insecure: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Configuration values given on the command line or in the environment.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            scan_dir: self.dir.clone(),
            apps_host: self.apps_host.clone(),
            query_host: self.query_host.clone(),
            authorization: self.authorization.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            accept_invalid_certs: self.insecure,
        }
    }
}
