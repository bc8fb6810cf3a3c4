//! Command-line interface for Spline Merkle

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Spline Merkle - commit spline segments to a merkle root and prove lookups
#[derive(Parser)]
#[command(
    name = "spline-merkle",
    version,
    about = "Commit ordered spline segments to a merkle root and prove segment lookups",
    long_about = "Spline Merkle builds a merkle tree over ordered spline segments, answers point queries with the covering segment plus an inclusion proof, and verifies such proofs against a root."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a configuration file
    #[arg(long, global = true, env = "SPLINE_MERKLE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a tree file from a CSV of spline segments
    Build {
        /// CSV file with rows `c0,...,ck,x_lo,x_hi`
        input: PathBuf,

        /// Output tree file (default from configuration)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the root hash of a tree file
    Root {
        /// Tree file
        tree: PathBuf,
    },

    /// Show tree statistics
    Info {
        /// Tree file
        tree: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the segment containing a value and prove its membership
    Query {
        /// Tree file
        tree: PathBuf,

        /// Query value (integer or decimal)
        #[arg(allow_hyphen_values = true)]
        x: String,

        /// Write the proof bundle here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify a proof bundle
    Verify {
        /// Proof bundle file, or `-` for stdin
        bundle: PathBuf,

        /// Trusted root hash (overrides the root inside the bundle)
        #[arg(long)]
        root: Option<String>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
