use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "mintcheck", version, about = "Derive the energy-token mint PDA and inspect it with the solana CLI")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Owning program id (default: energy-token program).
    #[arg(long, global = true, value_name = "BASE58")]
    pub program_id: Option<String>,

    /// Derivation seed, repeatable: `text`, `utf8:text`, `hex:..` or `b58:..` (default: mint)
    #[arg(long = "seed", global = true, value_name = "SPEC")]
    pub seeds: Vec<String>,

    /// solana CLI binary to query.
    #[arg(long, global = true, value_name = "PATH")]
    pub solana_bin: Option<String>,

    /// Cluster URL passed to the solana CLI.
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Defaults to `check`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Derive the mint address and fetch its account state.
    Check,

    /// Derive the mint address only.
    Derive,

    /// Check that the solana CLI can be found.
    Doctor,
}
