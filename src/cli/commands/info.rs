use crate::cli::commands::CommandContext;
use crate::proofs::SegmentTree;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Show statistics about a tree file
pub fn execute(ctx: &CommandContext, tree_path: PathBuf, json: bool) -> Result<()> {
    let tree = SegmentTree::open_with_threshold(&tree_path, ctx.config.tree.parallel_threshold)?;
    let domain = tree.domain();

    if json {
        let info = serde_json::json!({
            "root": tree.root(),
            "segments": tree.len(),
            "nodes": tree.tree().nodes().len(),
            "depth": tree.tree().depth(),
            "domain": domain.map(|(lo, hi)| [lo, hi]),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Segment Tree".bold());
    println!("  File:     {}", tree_path.display());
    println!("  Root:     {}", tree.root().to_hex().cyan());
    println!("  Segments: {}", tree.len());
    println!("  Nodes:    {}", tree.tree().nodes().len());
    println!("  Depth:    {}", tree.tree().depth());
    if let Some((lo, hi)) = domain {
        println!("  Domain:   [{}, {}]", lo, hi);
    }

    Ok(())
}
