//! Spline Merkle - merkle commitments over ordered spline segments
//!
//! Spline Merkle commits an ordered sequence of interval records ("segments",
//! such as the pieces of a cubic spline) to a single SHA-256 root. Anyone
//! holding the root can check that a segment belongs to the committed set,
//! and a query point can be mapped to the segment covering it together with
//! an inclusion proof.
//!
//! # Core Features
//!
//! - **Deterministic Leaves**: type-tagged, length-prefixed record encoding,
//!   double hashed under a leaf domain tag
//! - **Sorted-Pair Tree**: internal nodes hash their children in byte order,
//!   so proofs need no direction flags
//! - **Interval Lookup**: closed intervals, first match wins on a shared
//!   boundary
//! - **Checked Tree Files**: versioned JSON dumps that are re-verified on load
//!
//! # Example Usage
//!
//! ```rust
//! use spline_merkle::{verify, Scalar, SegmentRecord, SegmentTree};
//!
//! let tree = SegmentTree::build(vec![
//!     SegmentRecord::new(0, 0, 10, vec![]),
//!     SegmentRecord::new(1, 10, 20, vec![]),
//!     SegmentRecord::new(2, 20, 30, vec![]),
//! ])?;
//!
//! let bundle = tree.query(&Scalar::Int(15))?.expect("15 is covered");
//! assert_eq!(bundle.position, 1);
//! assert!(verify(&bundle.record, bundle.position, &bundle.proof, &tree.root()));
//! # Ok::<(), spline_merkle::SplineMerkleError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod proofs;
pub mod segment;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{
    error::{Result, SplineMerkleError},
    types::{Hash, LeafDigest, RootHash, Scalar, WAD},
};

pub use segment::{encode, locate, locate_sorted, SegmentRecord};

pub use proofs::{verify, MerkleTree, Proof, ProofBundle, SegmentTree};

pub use storage::{TreeFile, TREE_FORMAT};

/// Current version of Spline Merkle
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
