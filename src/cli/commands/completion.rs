use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completion scripts on stdout
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = "spline-merkle";

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
