//! CLI argument definitions using clap

use clap::{ArgAction, Parser};
use clap_complete::Shell;

/// Deterministic seeded generator of bracket-encoded tree pairs for tree-diff benchmarks
#[derive(Parser, Debug)]
#[command(name = "treegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Height of the generated trees (root is depth 0)
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present_any = ["generator", "info"]
    )]
    pub height: Option<i64>,

    /// Probability that a non-root node (and its subtree) is kept in the sparse tree
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.8)]
    pub density: f64,

    /// Seed for the shared random stream
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Enable debug logging. Multiple -d options increase the verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,
}
