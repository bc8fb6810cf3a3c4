//! Core types and utilities for Spline Merkle
//!
//! This module contains the fundamental data types, error handling,
//! and hashing primitives used throughout the system.

pub mod error;
pub mod hash;
pub mod types;

// Re-export commonly used items
pub use error::{Result, SplineMerkleError};
pub use hash::{hash_leaf, hash_pair, sha256};
pub use types::{Hash, LeafDigest, RootHash, Scalar, WAD};
