//! Merkle commitment and proof system for Spline Merkle
//!
//! This module builds the tree over encoded segments, generates
//! authentication paths, and verifies them against a root.

pub mod merkle;
pub mod proof;
pub mod segment_tree;

// Re-export commonly used items
pub use merkle::{MerkleTree, DEFAULT_PARALLEL_THRESHOLD};
pub use proof::{verify, Proof, ProofBundle};
pub use segment_tree::SegmentTree;
