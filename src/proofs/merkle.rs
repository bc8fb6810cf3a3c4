//! Merkle tree implementation
//!
//! Nodes live in one level-order array: the root at slot 0, the children of
//! slot `i` at `2i + 1` and `2i + 2`. A tree over `n` leaves has `2n - 1`
//! nodes; leaf `i` sits at slot `2n - 2 - i`, so the leaves fill the tail of
//! the array in reverse. When `n` is not a power of two the last positions
//! end up one level shallower and pair with internal nodes. No padding leaves
//! are ever added.

use crate::core::{error::*, hash::hash_pair, types::*};
use crate::proofs::proof::Proof;
use crate::segment::{encoding::encode, record::SegmentRecord};
use rayon::prelude::*;
use tracing::debug;

/// Sequences at least this long are encoded on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Immutable merkle tree over an ordered sequence of leaf digests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    /// All nodes in level order, root first
    nodes: Vec<Hash>,
    /// Slot of each leaf, indexed by sequence position
    leaf_slots: Vec<usize>,
}

impl MerkleTree {
    /// Encode every record and build the tree over their leaf digests
    pub fn build(records: &[SegmentRecord]) -> Result<Self> {
        Self::build_with_threshold(records, DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Like [`MerkleTree::build`], encoding in parallel once `records.len()`
    /// reaches `parallel_threshold`
    pub fn build_with_threshold(
        records: &[SegmentRecord],
        parallel_threshold: usize,
    ) -> Result<Self> {
        if records.is_empty() {
            return Err(SplineMerkleError::EmptyInput);
        }

        if let Some((position, record)) = records
            .iter()
            .enumerate()
            .find(|(position, record)| record.index != *position as u64)
        {
            return Err(SplineMerkleError::SegmentOutOfOrder {
                position,
                index: record.index,
            });
        }

        let parallel = records.len() >= parallel_threshold;
        debug!(
            leaves = records.len(),
            parallel, "Encoding segment records"
        );

        let leaves: Vec<LeafDigest> = if parallel {
            records.par_iter().map(encode).collect::<Result<_>>()?
        } else {
            records.iter().map(encode).collect::<Result<_>>()?
        };

        Self::from_leaves(&leaves)
    }

    /// Build a tree from leaf digests that are already computed
    pub fn from_leaves(leaves: &[LeafDigest]) -> Result<Self> {
        if leaves.is_empty() {
            return Err(SplineMerkleError::EmptyInput);
        }

        let node_count = 2 * leaves.len() - 1;
        let mut nodes = vec![Hash::zero(); node_count];
        let leaf_slots: Vec<usize> = (0..leaves.len())
            .map(|position| node_count - 1 - position)
            .collect();

        for (leaf, &slot) in leaves.iter().zip(&leaf_slots) {
            nodes[slot] = *leaf;
        }

        for slot in (0..leaves.len() - 1).rev() {
            nodes[slot] = hash_pair(&nodes[left_child(slot)], &nodes[right_child(slot)]);
        }

        let tree = Self { nodes, leaf_slots };
        debug!(leaves = tree.size(), root = %tree.root(), "Built merkle tree");
        Ok(tree)
    }

    /// Rebuild a tree from persisted nodes, checking every digest.
    ///
    /// `leaves` are the freshly encoded records in sequence order and
    /// `leaf_slots` the persisted slot of each one.
    pub(crate) fn restore(
        nodes: Vec<Hash>,
        leaf_slots: Vec<usize>,
        leaves: &[LeafDigest],
    ) -> Result<Self> {
        if leaves.is_empty() {
            return Err(SplineMerkleError::format("tree has no leaves"));
        }
        if leaf_slots.len() != leaves.len() {
            return Err(SplineMerkleError::format(format!(
                "{} leaf slots for {} leaves",
                leaf_slots.len(),
                leaves.len()
            )));
        }

        let expected_nodes = 2 * leaves.len() - 1;
        if nodes.len() != expected_nodes {
            return Err(SplineMerkleError::format(format!(
                "expected {} tree nodes for {} leaves, found {}",
                expected_nodes,
                leaves.len(),
                nodes.len()
            )));
        }

        for (position, (&slot, leaf)) in leaf_slots.iter().zip(leaves).enumerate() {
            if slot != expected_nodes - 1 - position {
                return Err(SplineMerkleError::format(format!(
                    "leaf {} stored at slot {}, expected {}",
                    position,
                    slot,
                    expected_nodes - 1 - position
                )));
            }
            if nodes[slot] != *leaf {
                return Err(SplineMerkleError::format(format!(
                    "leaf {} digest does not match its record",
                    position
                )));
            }
        }

        for slot in 0..leaves.len() - 1 {
            let expected = hash_pair(&nodes[left_child(slot)], &nodes[right_child(slot)]);
            if nodes[slot] != expected {
                return Err(SplineMerkleError::format(format!(
                    "internal node {} does not match its children",
                    slot
                )));
            }
        }

        Ok(Self { nodes, leaf_slots })
    }

    /// Root digest committing to the whole sequence
    pub fn root(&self) -> RootHash {
        self.nodes[0]
    }

    /// Number of leaves
    pub fn size(&self) -> usize {
        self.leaf_slots.len()
    }

    /// All node digests in level order
    pub fn nodes(&self) -> &[Hash] {
        &self.nodes
    }

    /// Slot of the leaf at `position`
    pub fn leaf_slot(&self, position: usize) -> Option<usize> {
        self.leaf_slots.get(position).copied()
    }

    /// Digest of the leaf at `position`
    pub fn leaf_hash(&self, position: usize) -> Option<LeafDigest> {
        self.leaf_slot(position).map(|slot| self.nodes[slot])
    }

    /// Number of edges between the root and the deepest leaf
    pub fn depth(&self) -> usize {
        self.nodes.len().ilog2() as usize
    }

    /// Generate the authentication path for the leaf at `position`
    pub fn prove(&self, position: usize) -> Result<Proof> {
        let mut slot = self
            .leaf_slot(position)
            .ok_or(SplineMerkleError::PositionOutOfRange {
                position,
                size: self.size(),
            })?;

        let mut siblings = Vec::with_capacity(self.depth());
        while slot > 0 {
            siblings.push(self.nodes[sibling(slot)]);
            slot = parent(slot);
        }

        Ok(Proof::new(siblings))
    }
}

fn left_child(slot: usize) -> usize {
    2 * slot + 1
}

fn right_child(slot: usize) -> usize {
    2 * slot + 2
}

fn parent(slot: usize) -> usize {
    (slot - 1) / 2
}

fn sibling(slot: usize) -> usize {
    if slot % 2 == 0 {
        slot - 1
    } else {
        slot + 1
    }
}
