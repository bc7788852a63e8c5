use anyhow::Result;
use mintcheck_client::{parse_program_id, parse_seed, validate_config, CheckConfig};

use crate::args::{Cli, Command};

mod check;
mod derive;
mod doctor;

pub fn dispatch(cli: Cli) -> Result<()> {
    let cfg = build_config(&cli)?;
    match cli.command.unwrap_or(Command::Check) {
        Command::Check => check::run(&cfg),
        Command::Derive => derive::run(&cfg),
        Command::Doctor => doctor::run(&cfg),
    }
}

/// Apply command-line overrides on top of the built-in defaults.
fn build_config(cli: &Cli) -> Result<CheckConfig> {
    let mut cfg = CheckConfig::default();

    if let Some(id) = &cli.program_id {
        cfg.program_id = parse_program_id(id)?;
    }
    if !cli.seeds.is_empty() {
        cfg.seeds = cli.seeds.iter().map(|s| parse_seed(s)).collect::<Result<Vec<_>, _>>()?;
    }
    if let Some(bin) = &cli.solana_bin {
        cfg.tool.program = bin.clone();
    }
    if let Some(url) = &cli.url {
        cfg.tool.url = Some(url.clone());
    }

    validate_config(&cfg)?;
    Ok(cfg)
}
