use crate::cli::commands::CommandContext;
use crate::core::types::Scalar;
use crate::proofs::SegmentTree;
use anyhow::{anyhow, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Locate the segment containing `x` and emit its proof bundle.
///
/// Without `--output` the bundle JSON is the only thing written to stdout, so
/// it can be piped straight into `verify -`.
pub fn execute(
    ctx: &CommandContext,
    tree_path: PathBuf,
    x: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let x: Scalar = x.parse()?;
    let tree = SegmentTree::open_with_threshold(&tree_path, ctx.config.tree.parallel_threshold)?;

    let bundle = tree
        .query(&x)?
        .ok_or_else(|| anyhow!("No segment contains x = {}", x))?;
    let json = bundle.to_json()?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            ctx.status(format!(
                "{} segment {} covers x = {}",
                "✓".green(),
                bundle.position,
                x
            ));
            ctx.status(format!(
                "  • Interval: [{}, {}]",
                bundle.record.lower_bound, bundle.record.upper_bound
            ));
            ctx.status(format!("  • Proof elements: {}", bundle.proof.len()));
            ctx.status(format!("  • Bundle: {}", path.display()));
        }
        None => println!("{}", json),
    }

    Ok(())
}
