//! PDA derivation for the energy-token program.
//!
//! Thin wrappers over `Pubkey::create_program_address` and
//! `Pubkey::try_find_program_address` that check seed limits up front and
//! report failures as [`PdaError`]. The canonical bump is the first one,
//! scanning down from 255, whose address is off the ed25519 curve.

use solana_program::pubkey::{Pubkey, PubkeyError};
use thiserror::Error;

use crate::constants::{MAX_SEEDS, MAX_SEED_LEN, SEED_MINT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PdaError {
    #[error("too many seeds: {count} (max {max})")]
    TooManySeeds { count: usize, max: usize },

    #[error("seed #{index} is {len} bytes (max {max})")]
    SeedTooLong { index: usize, len: usize, max: usize },

    #[error("candidate address lies on the ed25519 curve")]
    OnCurve,

    #[error("no off-curve bump exists for these seeds under program {program_id}")]
    NoViableBump { program_id: Pubkey },

    #[error("address rejected: {0}")]
    Rejected(String),
}

impl From<PubkeyError> for PdaError {
    fn from(e: PubkeyError) -> Self {
        match e {
            PubkeyError::InvalidSeeds => PdaError::OnCurve,
            other => PdaError::Rejected(other.to_string()),
        }
    }
}

/// Compute the address for a fully specified seed list (bump included).
///
/// Fails with [`PdaError::OnCurve`] when the resulting hash is a curve point.
pub fn create_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<Pubkey, PdaError> {
    check_seeds(seeds, MAX_SEEDS)?;
    Ok(Pubkey::create_program_address(seeds, program_id)?)
}

/// Search for the canonical bump and return it with the derived address.
pub fn find_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8), PdaError> {
    // One slot is reserved for the bump.
    check_seeds(seeds, MAX_SEEDS - 1)?;

    let (address, bump) = Pubkey::try_find_program_address(seeds, program_id)
        .ok_or(PdaError::NoViableBump { program_id: *program_id })?;
    tracing::debug!(%address, bump, "derived program address");
    Ok((address, bump))
}

/// Derive the token mint PDA.
pub fn derive_mint(program_id: &Pubkey) -> Result<(Pubkey, u8), PdaError> {
    find_program_address(&[SEED_MINT], program_id)
}

fn check_seeds(seeds: &[&[u8]], max: usize) -> Result<(), PdaError> {
    if seeds.len() > max {
        return Err(PdaError::TooManySeeds { count: seeds.len(), max });
    }
    for (index, seed) in seeds.iter().enumerate() {
        if seed.len() > MAX_SEED_LEN {
            return Err(PdaError::SeedTooLong { index, len: seed.len(), max: MAX_SEED_LEN });
        }
    }
    Ok(())
}
