//! Configuration management for Spline Merkle
//!
//! Settings are stored as TOML, by default in ~/.spline-merkle/config.toml

pub mod global_config;

// Re-export commonly used items
pub use global_config::{LogConfig, OutputConfig, SplineMerkleConfig, TreeConfig};
