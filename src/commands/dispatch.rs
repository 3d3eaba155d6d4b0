//! Command dispatch logic for rubricgen
use std::time::Instant;

use rubricgen_core::config::{GeneratorConfig, Inputs};
use rubricgen_core::document::resolve_path;
use rubricgen_core::error::Result;
use rubricgen_core::trace_time;

use crate::cli::Cli;
use crate::commands::{check, generate};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = cli
        .config
        .as_deref()
        .map(GeneratorConfig::load)
        .transpose()?;

    let inputs = Inputs::resolve(cli.agents.clone(), cli.out.clone(), config)?;
    let agents = resolve_path(&inputs.agents)?;
    let out = resolve_path(&inputs.out)?;

    trace_time!(start, "resolve_inputs");
    tracing::debug!(agents = %agents.display(), out = %out.display(), check = cli.check, "inputs");

    if cli.check {
        check::execute(cli, &agents, &out)
    } else {
        generate::execute(cli, &agents, &out)
    }
}
