use std::io::Write;

use anyhow::Result;
use mintcheck_client::{find_program_address, AccountLookup, CheckConfig, CommandRunner, LookupOutcome};
use serde::Serialize;
use serde_json::Value;
use termcolor::WriteColor;

use crate::output;

#[derive(Debug, Serialize)]
pub struct CheckOut {
    pub address: String,
    pub bump: u8,
    pub program_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_error: Option<ToolErrorOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToolErrorOut {
    pub code: Option<i32>,
    pub stderr: String,
}

pub fn run(cfg: &CheckConfig) -> Result<()> {
    let lookup = AccountLookup::new(cfg.tool.clone());
    let stdout = output::stdout();
    let mut out = stdout.lock();
    execute(cfg, &lookup, &mut out, output::is_json())
}

/// Derive, look up, report. Lookup failures are reported, never returned.
fn execute<R: CommandRunner, W: WriteColor>(
    cfg: &CheckConfig,
    lookup: &AccountLookup<R>,
    out: &mut W,
    json: bool,
) -> Result<()> {
    let (address, bump) = find_program_address(&cfg.seed_slices(), &cfg.program_id)?;

    if !json {
        writeln!(out, "Mint Address: {address}")?;
        out.flush()?;
    }

    let outcome = lookup.fetch(&address);
    if let Err(e) = &outcome {
        tracing::warn!(error = %e, "account lookup failed");
    }

    if !json {
        output::write_outcome(out, &outcome)?;
        return Ok(());
    }

    let mut report = CheckOut {
        address: address.to_string(),
        bump,
        program_id: cfg.program_id.to_string(),
        account: None,
        tool_error: None,
        exception: None,
    };
    match outcome {
        Ok(LookupOutcome::Found(snapshot)) => report.account = Some(snapshot.raw().clone()),
        Ok(LookupOutcome::ToolFailed { code, stderr }) => report.tool_error = Some(ToolErrorOut { code, stderr }),
        Err(e) => report.exception = Some(e.to_string()),
    }
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
