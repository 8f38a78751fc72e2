//! State command handler.
//!
//! Prints the records of one table, or of every table the local definition
//! of the app declares when no table is named.

use std::io::Write;

use crate::bootstrap::CliContext;
use crate::error::CliResult;
use crate::handlers::{non_empty, require_argument, write_output};

pub async fn execute(
    ctx: &CliContext,
    out: &mut dyn Write,
    app: Option<&str>,
    table: Option<&str>,
) -> CliResult<()> {
    let app = require_argument(app, "app")?;
    let output = ctx.apps().get_state(app, non_empty(table)).await?;
    write_output(out, &output)
}
