use std::fmt;

use anyhow::Result;
use mintcheck_client::{find_program_address, CheckConfig};
use serde::Serialize;

use crate::output;

#[derive(Debug, Serialize)]
pub struct DeriveOut {
    pub program_id: String,
    pub seeds_hex: Vec<String>,
    pub address: String,
    pub bump: u8,
}

impl fmt::Display for DeriveOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program: {}", self.program_id)?;
        writeln!(f, "Seeds: [{}]", self.seeds_hex.join(", "))?;
        writeln!(f, "Mint Address: {}", self.address)?;
        write!(f, "Bump: {}", self.bump)
    }
}

pub fn run(cfg: &CheckConfig) -> Result<()> {
    output::print(&derive(cfg)?)
}

fn derive(cfg: &CheckConfig) -> Result<DeriveOut> {
    let (address, bump) = find_program_address(&cfg.seed_slices(), &cfg.program_id)?;
    Ok(DeriveOut {
        program_id: cfg.program_id.to_string(),
        seeds_hex: cfg.seeds.iter().map(hex::encode).collect(),
        address: address.to_string(),
        bump,
    })
}
