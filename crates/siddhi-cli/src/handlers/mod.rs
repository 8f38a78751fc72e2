//! Command handlers that delegate to the app operations service.
//!
//! Handlers follow one pattern:
//! `pub async fn execute(ctx: &CliContext, out: &mut dyn Write, ...) -> CliResult<()>`.
//! They check arguments, print progress lines, call the service and print
//! its output. They hold no business logic.

use std::io::Write;

use siddhi_core::AppsOutput;

use crate::bootstrap::CliContext;
use crate::commands::Commands;
use crate::error::{CliError, CliResult};

pub mod deployed;
pub mod install;
pub mod list;
pub mod meta;
pub mod state;
pub mod uninstall;

/// Route a parsed command to its handler.
pub async fn dispatch(ctx: &CliContext, command: &Commands, out: &mut dyn Write) -> CliResult<()> {
    match command {
        Commands::Deployed => deployed::execute(ctx, out).await,
        Commands::List => list::execute(ctx, out).await,
        Commands::Install { app } => install::execute(ctx, out, app.as_deref()).await,
        Commands::Uninstall { app } => uninstall::execute(ctx, out, app.as_deref()).await,
        Commands::Meta { app } => meta::execute(ctx, out, app.as_deref()).await,
        Commands::State { app, table } => {
            state::execute(ctx, out, app.as_deref(), table.as_deref()).await
        }
    }
}

/// A positional value that must be present and non-empty.
pub(crate) fn require_argument<'a>(value: Option<&'a str>, name: &str) -> CliResult<&'a str> {
    non_empty(value).ok_or_else(|| CliError::MissingArgument(name.to_string()))
}

/// Treat an empty positional like an absent one.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Print a service output, ending with exactly one newline.
pub(crate) fn write_output(out: &mut dyn Write, output: &AppsOutput) -> CliResult<()> {
    let text = output.to_string();
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}
