//! Rubricgen - architecture score rubric generator
//!
//! Reads the `Dependency Rules` and `Code Constraint` sections of an AGENTS.md
//! policy document and writes a markdown rubric with per-rule penalties.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{parse, Cli, OutputFormat};
use rubricgen_core::error::RubricError;
use rubricgen_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if parse::requests_json(env::args().skip(1)) {
                if let Some(failure) = parse::parse_failure(&err) {
                    return report(&failure, OutputFormat::Json, false);
                }
            }
            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Print `err` on stderr in the requested format and return its exit code
fn report(err: &RubricError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
    ExitCode::from(err.exit_code() as u8)
}
