use crate::cli::commands::CommandContext;
use crate::proofs::SegmentTree;
use crate::storage::import_csv;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Import a CSV of segments, commit to it, and write the tree file
pub fn execute(ctx: &CommandContext, input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| ctx.config.output.default_tree_path.clone());

    ctx.status("Building segment tree...".green());
    ctx.status(format!("  • Input: {}", input.display()));

    let records = import_csv(&input)
        .with_context(|| format!("Failed to import segments from {}", input.display()))?;
    ctx.status(format!("  • Segments: {}", records.len()));

    let tree = SegmentTree::build_with_threshold(records, ctx.config.tree.parallel_threshold)?;
    tree.save(&output)
        .with_context(|| format!("Failed to write tree file {}", output.display()))?;

    if ctx.verbose {
        ctx.status(format!("  • Nodes: {}", tree.tree().nodes().len()));
        ctx.status(format!("  • Depth: {}", tree.tree().depth()));
    }
    ctx.status(format!("  • Output: {}", output.display()));
    ctx.status(format!(
        "{} {}",
        "✓ Root:".green(),
        tree.root().to_hex().cyan()
    ));

    Ok(())
}
