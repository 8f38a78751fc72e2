//! Uninstall command handler.

use std::io::Write;

use crate::bootstrap::CliContext;
use crate::error::CliResult;
use crate::handlers::{non_empty, write_output};

/// Delete one deployed app by name, or every app the worker lists as active.
pub async fn execute(ctx: &CliContext, out: &mut dyn Write, app: Option<&str>) -> CliResult<()> {
    let output = match non_empty(app) {
        Some(name) => {
            writeln!(out, "Deleting application: {name}")?;
            ctx.apps().uninstall(name).await?
        }
        None => {
            writeln!(out, "Deleting all applications...")?;
            ctx.apps().uninstall_all().await?
        }
    };
    write_output(out, &output)
}
