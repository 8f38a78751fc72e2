//! Install command handler.

use std::io::Write;

use crate::bootstrap::CliContext;
use crate::error::CliResult;
use crate::handlers::{non_empty, write_output};

/// Deploy one local app by name, or every local app file when no name is
/// given.
///
/// # Arguments
///
/// * `ctx` - The CLI context
/// * `out` - Where progress and results are printed
/// * `app` - Declared name of the app to deploy
pub async fn execute(ctx: &CliContext, out: &mut dyn Write, app: Option<&str>) -> CliResult<()> {
    let output = match non_empty(app) {
        Some(name) => {
            writeln!(out, "Deploying application: {name}")?;
            ctx.apps().install(name).await?
        }
        None => {
            writeln!(out, "Deploying all applications...")?;
            ctx.apps().install_all().await?
        }
    };
    write_output(out, &output)
}
