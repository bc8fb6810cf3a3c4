//! Inclusion proofs and their verification

use crate::core::{error::*, hash::hash_pair, types::*};
use crate::segment::{encoding::encode, record::SegmentRecord};
use serde::{Deserialize, Serialize};

/// Authentication path from a leaf up to the root.
///
/// Siblings are listed bottom-up. Parents are formed with the sorted pair
/// hash, so no left/right flags are needed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proof {
    siblings: Vec<Hash>,
}

impl Proof {
    pub fn new(siblings: Vec<Hash>) -> Self {
        Self { siblings }
    }

    /// Sibling digests, leaf level first
    pub fn siblings(&self) -> &[Hash] {
        &self.siblings
    }

    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Fold the path over `leaf` and return the implied root
    pub fn compute_root(&self, leaf: &LeafDigest) -> RootHash {
        self.siblings
            .iter()
            .fold(*leaf, |acc, sibling| hash_pair(&acc, sibling))
    }

    /// Concatenated 32-byte siblings
    pub fn to_bytes(&self) -> Vec<u8> {
        self.siblings
            .iter()
            .flat_map(|hash| hash.as_bytes().iter().copied())
            .collect()
    }

    /// Parse concatenated 32-byte siblings
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 32 != 0 {
            return Err(SplineMerkleError::format(format!(
                "proof length {} is not a multiple of 32",
                bytes.len()
            )));
        }

        let siblings = bytes
            .chunks_exact(32)
            .map(|chunk| {
                let mut array = [0u8; 32];
                array.copy_from_slice(chunk);
                Hash::from_bytes(array)
            })
            .collect();
        Ok(Self { siblings })
    }
}

/// Check that `record` sits at `position` under `root`.
///
/// The leaf digest is recomputed from the record itself. The record's
/// committed `index` must equal `position`. Any mismatch, including a record
/// that cannot be encoded, yields `false`.
pub fn verify(record: &SegmentRecord, position: usize, proof: &Proof, root: &RootHash) -> bool {
    if record.index != position as u64 {
        return false;
    }

    match encode(record) {
        Ok(leaf) => proof.compute_root(&leaf) == *root,
        Err(_) => false,
    }
}

/// Everything a verifier needs to check one query answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofBundle {
    /// Root the proof was generated against
    pub root: RootHash,
    /// Position of the record in the committed sequence
    pub position: usize,
    /// The committed record
    pub record: SegmentRecord,
    /// Authentication path
    pub proof: Proof,
}

impl ProofBundle {
    /// Verify against the root carried in the bundle
    pub fn verify(&self) -> bool {
        self.verify_against(&self.root)
    }

    /// Verify against an externally trusted root
    pub fn verify_against(&self, root: &RootHash) -> bool {
        verify(&self.record, self.position, &self.proof, root)
    }

    /// Serialize bundle to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SplineMerkleError::JsonSerialization)
    }

    /// Deserialize bundle from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SplineMerkleError::JsonSerialization)
    }
}
