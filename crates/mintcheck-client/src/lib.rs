//! mintcheck-client
//!
//! Client-side pieces of the mint checker:
//! - constant seeds and the energy-token program id
//! - PDA derivation (bump search with the off-curve check)
//! - explicit, validated configuration
//! - account lookup through the `solana` CLI
//!
//! Nothing here talks to the network directly; account state comes from the
//! external tool.

pub mod config;
pub mod constants;
pub mod lookup;
pub mod pda;

pub use config::*;
pub use constants::*;
pub use lookup::*;
pub use pda::*;
