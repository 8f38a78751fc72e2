//! List command handler.
//!
//! Shows the declared names of the `.siddhi` files in the scan folder.
//! Files without an `@App:name` annotation are left out.

use std::io::Write;

use crate::bootstrap::CliContext;
use crate::error::CliResult;
use crate::handlers::write_output;

pub async fn execute(ctx: &CliContext, out: &mut dyn Write) -> CliResult<()> {
    let output = ctx.apps().list().await?;
    write_output(out, &output)
}
