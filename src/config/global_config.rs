//! Global configuration management
//!
//! Configuration is read from `--config <path>` when given, otherwise from
//! ~/.spline-merkle/config.toml if it exists, otherwise defaults apply.

use crate::core::error::{Result, SplineMerkleError};
use crate::proofs::merkle::DEFAULT_PARALLEL_THRESHOLD;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global configuration for Spline Merkle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineMerkleConfig {
    /// Tree construction settings
    pub tree: TreeConfig,
    /// Logging settings
    pub log: LogConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// Tree construction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Segment count from which leaves are encoded on the rayon pool
    pub parallel_threshold: usize,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is not set
    pub level: String,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where `build` writes the tree file when no output is given
    pub default_tree_path: PathBuf,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_tree_path: PathBuf::from("spline_merkle_tree.json"),
        }
    }
}

impl SplineMerkleConfig {
    /// Load configuration from an explicit path, or the global file, or defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::get_config_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            SplineMerkleError::configuration(format!("Failed to parse config: {}", e))
        })
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            SplineMerkleError::configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the global configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let user_dirs = UserDirs::new().ok_or(SplineMerkleError::HomeDirectoryNotFound)?;
        Ok(user_dirs
            .home_dir()
            .join(".spline-merkle")
            .join("config.toml"))
    }
}
