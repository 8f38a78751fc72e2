#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used by main.rs
use anyhow as _;
use dotenvy as _;
use tokio as _;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

pub mod bootstrap;
pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap, bootstrap_with};
pub use commands::Commands;
pub use config::{CliConfig, ConfigOverrides};
pub use error::{CliError, CliResult};
pub use logging::LogConfig;
pub use parser::Cli;
