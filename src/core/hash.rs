//! Hash utilities for Spline Merkle
//!
//! Leaves and internal nodes are hashed under distinct one-byte domain tags,
//! and leaves get a second hashing round, so no leaf digest can be passed off
//! as an internal node.

use crate::core::types::Hash;
use sha2::{Digest, Sha256};

/// Domain tag prepended to encoded leaf data
pub const LEAF_TAG: u8 = 0x00;

/// Domain tag prepended to a pair of child digests
pub const NODE_TAG: u8 = 0x01;

/// Compute SHA-256 hash of data
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Hash::from_bytes(hasher.finalize().into())
}

/// Hash an encoded leaf: `SHA256(SHA256(LEAF_TAG || data))`
pub fn hash_leaf(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_TAG]);
    hasher.update(data);
    let inner: [u8; 32] = hasher.finalize().into();
    sha256(&inner)
}

/// Combine two child digests into their parent.
///
/// The pair is sorted before hashing, so `hash_pair(a, b) == hash_pair(b, a)`.
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Sha256::new();
    hasher.update([NODE_TAG]);
    hasher.update(first.as_bytes());
    hasher.update(second.as_bytes());
    Hash::from_bytes(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256() {
        let data = b"Hello, spline!";
        let hash = sha256(data);

        assert_ne!(hash, Hash::zero());
        assert_eq!(hash, sha256(data));
    }

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_leaf_is_double_and_tagged() {
        let data = b"segment";
        let mut tagged = vec![LEAF_TAG];
        tagged.extend_from_slice(data);

        assert_eq!(hash_leaf(data), sha256(sha256(&tagged).as_bytes()));
        assert_ne!(hash_leaf(data), sha256(data));
    }

    #[test]
    fn test_hash_pair_is_order_independent() {
        let hash1 = sha256(b"first");
        let hash2 = sha256(b"second");
        let combined = hash_pair(&hash1, &hash2);

        assert_ne!(combined, hash1);
        assert_ne!(combined, hash2);
        assert_eq!(combined, hash_pair(&hash2, &hash1));
    }

    #[test]
    fn test_node_and_leaf_domains_differ() {
        let a = sha256(b"a");
        let b = sha256(b"b");
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let mut concat = Vec::new();
        concat.extend_from_slice(lo.as_bytes());
        concat.extend_from_slice(hi.as_bytes());

        assert_ne!(hash_pair(&a, &b), hash_leaf(&concat));
    }
}
