use crate::cli::commands::CommandContext;
use crate::core::types::Hash;
use crate::proofs::ProofBundle;
use anyhow::{bail, Result};
use colored::Colorize;
use std::io::{self, Read};
use std::path::PathBuf;

/// Verify a proof bundle, optionally against an externally trusted root
pub fn execute(ctx: &CommandContext, bundle: PathBuf, root: Option<String>) -> Result<()> {
    let data = if bundle.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&bundle)?
    };

    let bundle = ProofBundle::from_json(&data)?;

    let root = match root {
        Some(hex) => Hash::from_hex(&hex)?,
        None => bundle.root,
    };

    if ctx.verbose {
        ctx.status(format!("  • Position: {}", bundle.position));
        ctx.status(format!(
            "  • Interval: [{}, {}]",
            bundle.record.lower_bound, bundle.record.upper_bound
        ));
        ctx.status(format!("  • Proof elements: {}", bundle.proof.len()));
        ctx.status(format!("  • Root: {}", root.to_hex().cyan()));
    }

    if bundle.verify_against(&root) {
        ctx.status("✓ Proof verification successful!".green());
        Ok(())
    } else {
        ctx.status("✗ Proof verification failed!".red());
        bail!("Proof does not reconstruct root {}", root.to_hex())
    }
}
