//! CLI entry point.
//!
//! Loads `.env`, parses arguments, sets up logging, resolves configuration,
//! wires the adapters through bootstrap and dispatches one command.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use siddhi_cli::{Cli, CliConfig, CliError, LogConfig, bootstrap, handlers, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Before parsing, so `SIDDHI_*` values from .env reach clap
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _log_guard = logging::init(&LogConfig::new(cli.verbose));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::resolve(&cli.overrides()).context("failed to load configuration")?;
    let ctx = bootstrap(&config).context("failed to set up the Siddhi client")?;

    let mut stdout = std::io::stdout().lock();
    handlers::dispatch(&ctx, command, &mut stdout).await?;
    stdout.flush()?;
    Ok(())
}

fn report(err: &anyhow::Error) -> ExitCode {
    let cli_error = err.downcast_ref::<CliError>();
    if let Some(usage) = cli_error.filter(|e| e.is_usage_message()) {
        println!("{usage}");
    } else {
        tracing::error!("command failed: {err:#}");
        eprintln!("Error: {err:#}");
    }

    let code = cli_error.map_or(1, CliError::exit_code);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
