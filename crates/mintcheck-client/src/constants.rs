//! Constants shared with the on-chain energy-token program.
//!
//! Keep these stable because they affect PDA derivation.

use solana_program::pubkey::Pubkey;

pub use solana_program::pubkey::{MAX_SEEDS, MAX_SEED_LEN};

/// PDA seed for the token mint account.
pub const SEED_MINT: &[u8] = b"mint";

/// Deployed energy-token program id.
pub const ENERGY_TOKEN_PROGRAM_ID: &str = "HaT3koMseafcCB9aUQUCrSLMDfN1km7Xik9UhZSG9UV6";

/// Same id, checked at compile time.
pub const ENERGY_TOKEN_PROGRAM: Pubkey = solana_program::pubkey!("HaT3koMseafcCB9aUQUCrSLMDfN1km7Xik9UhZSG9UV6");

/// External tool queried for account state.
pub const DEFAULT_TOOL: &str = "solana";

pub fn energy_token_program_id() -> Pubkey {
    ENERGY_TOKEN_PROGRAM
}
