use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Moira synthetic Markov chain generator.
#[derive(Parser)]
#[command(
    name = "moira",
    version,
    about = "Synthetic Markov transition-matrix generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build a labelled chain from a TOML configuration.
    Generate(GenerateArgs),
    /// Arrange state multiplicities on a repeat-free ring.
    Partition(PartitionArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "moira.toml")]
    pub config: PathBuf,

    /// Override output JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `partition` subcommand.
#[derive(clap::Args)]
pub struct PartitionArgs {
    /// Comma-separated state multiplicities, e.g. "3,4,5".
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub multiplicities: Vec<usize>,

    /// Allow identical states in adjacent ring slots.
    #[arg(long)]
    pub allow_repeats: bool,

    /// Maximum number of partition attempts before giving up.
    #[arg(long, default_value_t = 100)]
    pub max_attempts: usize,

    /// Anchor state whose successors are biased toward even-indexed states.
    #[arg(long)]
    pub anchor: Option<usize>,

    /// Weight multiplier applied by the anchor bias.
    #[arg(long, default_value_t = 10.0)]
    pub anchor_attraction: f64,

    /// RNG seed (drawn from the OS when omitted).
    #[arg(short, long)]
    pub seed: Option<u64>,
}
