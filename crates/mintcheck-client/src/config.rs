//! Configuration for a mint check.
//!
//! The library does not read environment variables or files. Callers build a
//! [`CheckConfig`] explicitly (the CLI does this from its flags) and run it
//! through [`validate_config`] before use.

use solana_program::pubkey::Pubkey;
use thiserror::Error;

use crate::constants::{energy_token_program_id, DEFAULT_TOOL, MAX_SEEDS, MAX_SEED_LEN, SEED_MINT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid program id `{0}`")]
    InvalidProgramId(String),

    #[error("invalid seed `{spec}`: {reason}")]
    InvalidSeed { spec: String, reason: String },

    #[error("{0}")]
    Invalid(&'static str),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything needed to derive the address and query it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub program_id: Pubkey,
    pub seeds: Vec<Vec<u8>>,
    pub tool: ToolConfig,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            program_id: energy_token_program_id(),
            seeds: vec![SEED_MINT.to_vec()],
            tool: ToolConfig::default(),
        }
    }
}

impl CheckConfig {
    pub fn seed_slices(&self) -> Vec<&[u8]> {
        self.seeds.iter().map(Vec::as_slice).collect()
    }
}

/// External tool invocation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Binary name or path.
    pub program: String,
    /// Cluster URL forwarded as `--url`; the tool's own default applies when unset.
    pub url: Option<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self { program: DEFAULT_TOOL.to_string(), url: None }
    }
}

pub fn parse_program_id(input: &str) -> ConfigResult<Pubkey> {
    input.trim().parse().map_err(|_| ConfigError::InvalidProgramId(input.to_string()))
}

/// Parse a seed spec into raw bytes.
///
/// Accepted forms: `utf8:<text>`, `hex:<hex>`, `b58:<base58>`. Anything else is
/// taken as UTF-8 text.
pub fn parse_seed(spec: &str) -> ConfigResult<Vec<u8>> {
    let invalid = |reason: String| ConfigError::InvalidSeed { spec: spec.to_string(), reason };

    if let Some(text) = spec.strip_prefix("utf8:") {
        return Ok(text.as_bytes().to_vec());
    }
    if let Some(h) = spec.strip_prefix("hex:") {
        return hex::decode(h.trim()).map_err(|e| invalid(e.to_string()));
    }
    if let Some(b) = spec.strip_prefix("b58:") {
        return bs58::decode(b.trim()).into_vec().map_err(|e| invalid(e.to_string()));
    }
    Ok(spec.as_bytes().to_vec())
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &CheckConfig) -> ConfigResult<()> {
    if cfg.tool.program.trim().is_empty() {
        return Err(ConfigError::Invalid("tool program must not be empty"));
    }

    if let Some(url) = &cfg.tool.url {
        if url.trim().is_empty() {
            return Err(ConfigError::Invalid("cluster url must not be blank"));
        }
    }

    if cfg.seeds.is_empty() {
        return Err(ConfigError::Invalid("at least one seed is required"));
    }

    if cfg.seeds.len() > MAX_SEEDS - 1 {
        return Err(ConfigError::Invalid("at most 15 seeds are allowed"));
    }

    if cfg.seeds.iter().any(|s| s.len() > MAX_SEED_LEN) {
        return Err(ConfigError::Invalid("seeds must be at most 32 bytes"));
    }

    Ok(())
}
