use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod exit_codes;

use cli::{Cli, Commands};
use exit_codes::EXIT_ERROR;

fn main() {
    let cli = Cli::parse();
    configure_logging(cli.verbose, cli.debug, cli.quiet);

    let mut stdout = std::io::stdout();
    let outcome = match &cli.command {
        Commands::Run {
            script,
            config,
            payload_key,
        } => commands::run::handle(
            script,
            config.as_deref(),
            payload_key.map(Into::into),
            &mut stdout,
        ),
        Commands::Schema { script, config } => {
            commands::schema::handle(script, config.as_deref(), &mut stdout)
        }
    };

    let outcome = outcome.and_then(|code| {
        stdout.flush().context("failed to write output")?;
        Ok(code)
    });
    process::exit(exit_code(outcome));
}

/// Map a command outcome to the process exit code, reporting errors on stderr.
fn exit_code(outcome: anyhow::Result<i32>) -> i32 {
    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_ERROR
        }
    }
}

fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let log_level = if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::WARN
    };

    let filter = EnvFilter::try_from_env("FORMSMITH_LOG")
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
