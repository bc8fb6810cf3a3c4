//! Spline Merkle CLI
//!
//! Command-line interface for building, querying and verifying segment trees.

use anyhow::Result;
use clap::Parser;
use spline_merkle::cli::{commands, commands::CommandContext, Cli, Commands};
use spline_merkle::config::SplineMerkleConfig;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let config = SplineMerkleConfig::load(cli.config.as_deref())?;

    // Initialize logging
    let default_filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.log.level.clone()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let ctx = CommandContext {
        config,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    match cli.command {
        Commands::Build { input, output } => commands::build::execute(&ctx, input, output),
        Commands::Root { tree } => commands::root::execute(&ctx, tree),
        Commands::Info { tree, json } => commands::info::execute(&ctx, tree, json),
        Commands::Query { tree, x, output } => commands::query::execute(&ctx, tree, x, output),
        Commands::Verify { bundle, root } => commands::verify::execute(&ctx, bundle, root),
        Commands::Completion { shell } => commands::completion::execute(shell),
    }
}
