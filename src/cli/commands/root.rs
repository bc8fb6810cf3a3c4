use crate::cli::commands::CommandContext;
use crate::proofs::SegmentTree;
use anyhow::Result;
use std::path::PathBuf;

/// Print the root hash of a tree file, and nothing else
pub fn execute(ctx: &CommandContext, tree: PathBuf) -> Result<()> {
    let tree = SegmentTree::open_with_threshold(&tree, ctx.config.tree.parallel_threshold)?;
    println!("{}", tree.root().to_hex());
    Ok(())
}
