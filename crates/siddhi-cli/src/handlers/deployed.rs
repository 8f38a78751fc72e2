//! Deployed command handler.

use std::io::Write;

use crate::bootstrap::CliContext;
use crate::error::CliResult;
use crate::handlers::write_output;

/// Print the apps active on the worker.
pub async fn execute(ctx: &CliContext, out: &mut dyn Write) -> CliResult<()> {
    let output = ctx.apps().get_deployed().await?;
    write_output(out, &output)
}
