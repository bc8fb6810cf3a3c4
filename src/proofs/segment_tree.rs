//! Committed segment set: records plus their merkle tree

use crate::core::{error::*, types::*};
use crate::proofs::merkle::{MerkleTree, DEFAULT_PARALLEL_THRESHOLD};
use crate::proofs::proof::{Proof, ProofBundle};
use crate::segment::{index::locate, record::SegmentRecord};
use tracing::info;

/// An ordered segment sequence together with the tree committing to it.
///
/// Built once and never mutated; share it freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentTree {
    records: Vec<SegmentRecord>,
    tree: MerkleTree,
}

impl SegmentTree {
    /// Commit to `records` in the given order
    pub fn build(records: Vec<SegmentRecord>) -> Result<Self> {
        Self::build_with_threshold(records, DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Commit to `records`, encoding in parallel from `parallel_threshold` records up
    pub fn build_with_threshold(
        records: Vec<SegmentRecord>,
        parallel_threshold: usize,
    ) -> Result<Self> {
        let tree = MerkleTree::build_with_threshold(&records, parallel_threshold)?;
        info!(segments = records.len(), root = %tree.root(), "Committed segment set");
        Ok(Self { records, tree })
    }

    /// Pair records with an already verified tree
    pub(crate) fn from_parts(records: Vec<SegmentRecord>, tree: MerkleTree) -> Self {
        Self { records, tree }
    }

    pub fn root(&self) -> RootHash {
        self.tree.root()
    }

    /// Number of committed segments
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: construction rejects an empty sequence
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SegmentRecord] {
        &self.records
    }

    pub fn record(&self, position: usize) -> Option<&SegmentRecord> {
        self.records.get(position)
    }

    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    /// Lowest lower bound and highest upper bound across all segments
    pub fn domain(&self) -> Option<(Scalar, Scalar)> {
        let mut bounds = self.records.iter();
        let first = bounds.next()?;
        Some(bounds.fold(
            (first.lower_bound, first.upper_bound),
            |(lo, hi), record| {
                let lo = if record.lower_bound.le(&lo) {
                    record.lower_bound
                } else {
                    lo
                };
                let hi = if hi.le(&record.upper_bound) {
                    record.upper_bound
                } else {
                    hi
                };
                (lo, hi)
            },
        ))
    }

    /// Position of the segment containing `x`
    pub fn locate(&self, x: &Scalar) -> Option<usize> {
        locate(&self.records, x)
    }

    pub fn prove(&self, position: usize) -> Result<Proof> {
        self.tree.prove(position)
    }

    /// Find the segment containing `x` and prove its membership.
    ///
    /// `Ok(None)` means no segment contains `x`.
    pub fn query(&self, x: &Scalar) -> Result<Option<ProofBundle>> {
        let Some(position) = self.locate(x) else {
            return Ok(None);
        };

        Ok(Some(ProofBundle {
            root: self.root(),
            position,
            record: self.records[position].clone(),
            proof: self.prove(position)?,
        }))
    }
}
