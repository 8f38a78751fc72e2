//! Meta command handler.

use std::io::Write;

use crate::bootstrap::CliContext;
use crate::error::CliResult;
use crate::handlers::{require_argument, write_output};

/// Print the tables a local app declares.
pub async fn execute(ctx: &CliContext, out: &mut dyn Write, app: Option<&str>) -> CliResult<()> {
    let app = require_argument(app, "app")?;
    let output = ctx.apps().get_meta(app).await?;
    write_output(out, &output)
}
