//! Account lookup through the `solana` command-line tool.
//!
//! Network access is entirely the tool's business. This module only builds the
//! argument list, runs the process to completion and interprets what it
//! printed. Process execution sits behind [`CommandRunner`] so callers can
//! substitute the tool.

use std::io;
use std::process::Command;
use std::string::FromUtf8Error;

use base64::Engine;
use serde_json::Value;
use solana_program::pubkey::Pubkey;
use thiserror::Error;

use crate::config::ToolConfig;

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// Raw bytes; decoded only once the tool reports success.
    pub stdout: Vec<u8>,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Runs commands with `std::process`, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        let out = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            code: out.status.code(),
            stdout: out.stdout,
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("unreadable account json: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    #[error("account output is not valid utf-8: {0}")]
    NonUtf8Output(#[from] FromUtf8Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(AccountSnapshot),
    ToolFailed { code: Option<i32>, stderr: String },
}

/// Account state as reported by the tool at query time.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    raw: Value,
}

impl AccountSnapshot {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        Ok(Self { raw: serde_json::from_str(text)? })
    }

    /// Full parsed document.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn owner(&self) -> Option<&str> {
        self.field("owner").and_then(Value::as_str)
    }

    pub fn pubkey(&self) -> Option<&str> {
        self.raw.get("pubkey").and_then(Value::as_str)
    }

    pub fn lamports(&self) -> Option<u64> {
        self.field("lamports").and_then(Value::as_u64)
    }

    pub fn executable(&self) -> Option<bool> {
        self.field("executable").and_then(Value::as_bool)
    }

    /// Decode the `[payload, encoding]` data pair.
    ///
    /// Returns `None` when no data is present, and an error string for
    /// encodings other than base64.
    pub fn data_bytes(&self) -> Option<Result<Vec<u8>, String>> {
        let pair = self.field("data")?.as_array()?;
        let payload = pair.first()?.as_str()?;
        let encoding = pair.get(1).and_then(Value::as_str).unwrap_or("base64");
        if encoding != "base64" {
            return Some(Err(format!("unsupported data encoding `{encoding}`")));
        }
        Some(base64::engine::general_purpose::STANDARD.decode(payload).map_err(|e| e.to_string()))
    }

    // Top-level key first, then the CLI's nested `account` object.
    fn field(&self, key: &str) -> Option<&Value> {
        self.raw.get(key).or_else(|| self.raw.get("account")?.get(key))
    }
}

/// Fetches account snapshots by shelling out to the configured tool.
#[derive(Debug, Clone)]
pub struct AccountLookup<R = SystemRunner> {
    tool: ToolConfig,
    runner: R,
}

impl AccountLookup<SystemRunner> {
    pub fn new(tool: ToolConfig) -> Self {
        Self { tool, runner: SystemRunner }
    }
}

impl<R: CommandRunner> AccountLookup<R> {
    pub fn with_runner(tool: ToolConfig, runner: R) -> Self {
        Self { tool, runner }
    }

    pub fn args_for(&self, address: &Pubkey) -> Vec<String> {
        let mut args = vec![
            "account".to_string(),
            address.to_string(),
            "--output".to_string(),
            "json".to_string(),
        ];
        if let Some(url) = &self.tool.url {
            args.push("--url".to_string());
            args.push(url.clone());
        }
        args
    }

    pub fn fetch(&self, address: &Pubkey) -> Result<LookupOutcome, LookupError> {
        let args = self.args_for(address);
        tracing::debug!(program = %self.tool.program, ?args, "invoking account lookup");

        let out = self.runner.run(&self.tool.program, &args).map_err(|source| LookupError::Spawn {
            program: self.tool.program.clone(),
            source,
        })?;
        tracing::debug!(code = ?out.code, "lookup tool exited");

        if !out.success() {
            tracing::warn!(code = ?out.code, "lookup tool reported failure");
            return Ok(LookupOutcome::ToolFailed { code: out.code, stderr: out.stderr });
        }

        let text = String::from_utf8(out.stdout)?;
        Ok(LookupOutcome::Found(AccountSnapshot::from_json(&text)?))
    }
}
