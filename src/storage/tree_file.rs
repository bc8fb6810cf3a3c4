//! Tree file format
//!
//! A tree file is a JSON document holding the format tag, the leaf field
//! layout, every node digest in level order, and the committed records with
//! the slot each one occupies. Loading re-encodes every record and checks
//! every node, so a file that loads is a file whose root is trustworthy.

use crate::core::{error::*, types::*};
use crate::proofs::merkle::{MerkleTree, DEFAULT_PARALLEL_THRESHOLD};
use crate::proofs::segment_tree::SegmentTree;
use crate::segment::{
    encoding::{encode, LEAF_ENCODING},
    record::SegmentRecord,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Format tag written to and required from every tree file
pub const TREE_FORMAT: &str = "spline-merkle-v1";

/// Serialized form of a [`SegmentTree`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeFile {
    /// Format/version tag
    pub format: String,
    /// Field layout of each leaf
    pub leaf_encoding: Vec<String>,
    /// Node digests in level order, root first
    pub tree: Vec<Hash>,
    /// Records in sequence order
    pub values: Vec<TreeValue>,
}

/// One committed record and its leaf slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeValue {
    pub value: SegmentRecord,
    pub tree_index: usize,
}

impl TreeFile {
    /// Parse a tree file, reporting any structural problem as a format error
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SplineMerkleError::format(format!("malformed tree file: {}", e)))
    }

    /// Serialize tree file to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SplineMerkleError::JsonSerialization)
    }

    /// Check the file and turn it back into a [`SegmentTree`]
    pub fn into_tree(self) -> Result<SegmentTree> {
        self.into_tree_with_threshold(DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Like [`TreeFile::into_tree`], re-encoding records in parallel from
    /// `parallel_threshold` records up
    pub fn into_tree_with_threshold(self, parallel_threshold: usize) -> Result<SegmentTree> {
        if self.format != TREE_FORMAT {
            warn!(format = %self.format, "Rejecting tree file with unknown format");
            return Err(SplineMerkleError::format(format!(
                "unknown format {:?}, expected {:?}",
                self.format, TREE_FORMAT
            )));
        }

        if self.leaf_encoding != LEAF_ENCODING {
            return Err(SplineMerkleError::format(format!(
                "unsupported leaf encoding {:?}",
                self.leaf_encoding
            )));
        }

        if self.values.is_empty() {
            return Err(SplineMerkleError::format("tree file has no values"));
        }

        let (records, slots): (Vec<SegmentRecord>, Vec<usize>) = self
            .values
            .into_iter()
            .map(|entry| (entry.value, entry.tree_index))
            .unzip();

        for (position, record) in records.iter().enumerate() {
            if record.index != position as u64 {
                return Err(SplineMerkleError::format(format!(
                    "value {} carries index {}",
                    position, record.index
                )));
            }
        }

        let encode_checked = |record: &SegmentRecord| {
            encode(record).map_err(|e| SplineMerkleError::format(e.to_string()))
        };
        let leaves: Vec<LeafDigest> = if records.len() >= parallel_threshold {
            records.par_iter().map(encode_checked).collect::<Result<_>>()?
        } else {
            records.iter().map(encode_checked).collect::<Result<_>>()?
        };

        let tree = MerkleTree::restore(self.tree, slots, &leaves)?;
        debug!(segments = records.len(), root = %tree.root(), "Loaded tree file");
        Ok(SegmentTree::from_parts(records, tree))
    }
}

impl SegmentTree {
    /// Produce the serializable form of this tree
    pub fn dump(&self) -> TreeFile {
        TreeFile {
            format: TREE_FORMAT.to_string(),
            leaf_encoding: LEAF_ENCODING.iter().map(|s| s.to_string()).collect(),
            tree: self.tree().nodes().to_vec(),
            values: self
                .records()
                .iter()
                .enumerate()
                .map(|(position, record)| TreeValue {
                    value: record.clone(),
                    tree_index: self.tree().nodes().len() - 1 - position,
                })
                .collect(),
        }
    }

    /// Restore a tree from its serialized form
    pub fn load(file: TreeFile) -> Result<Self> {
        file.into_tree()
    }

    /// Write the tree file to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.dump().to_json()?)?;
        debug!(path = %path.display(), "Wrote tree file");
        Ok(())
    }

    /// Read and check a tree file from `path`
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_threshold(path, DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Read and check a tree file, re-encoding in parallel from
    /// `parallel_threshold` records up
    pub fn open_with_threshold(path: &Path, parallel_threshold: usize) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        TreeFile::from_json(&content)?.into_tree_with_threshold(parallel_threshold)
    }
}
