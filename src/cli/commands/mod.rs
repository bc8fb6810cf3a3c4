//! CLI command implementations

pub mod build;
pub mod completion;
pub mod info;
pub mod query;
pub mod root;
pub mod verify;

use crate::config::SplineMerkleConfig;

/// Settings shared by every command
pub struct CommandContext {
    pub config: SplineMerkleConfig,
    pub verbose: bool,
    pub quiet: bool,
}

impl CommandContext {
    /// Print a status line unless `--quiet` was given
    pub fn status(&self, message: impl std::fmt::Display) {
        if !self.quiet {
            println!("{}", message);
        }
    }
}
