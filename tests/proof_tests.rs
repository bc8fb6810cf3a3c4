//! Proof generation and verification tests

use anyhow::Result;
use pretty_assertions::assert_ne;
use proptest::prelude::*;
use spline_merkle::{
    segment::reindex, verify, MerkleTree, Proof, Scalar, SegmentRecord, SegmentTree,
    SplineMerkleError,
};

fn example_segments() -> Vec<SegmentRecord> {
    vec![
        SegmentRecord::new(0, 0, 10, vec![Scalar::Int(1), Scalar::Float(0.25)]),
        SegmentRecord::new(1, 10, 20, vec![Scalar::Int(2), Scalar::Float(0.5)]),
        SegmentRecord::new(2, 20, 30, vec![Scalar::Int(3), Scalar::Float(0.75)]),
    ]
}

/// Contiguous segments starting at -5000 with random widths and payloads
fn segments(max_len: usize) -> impl Strategy<Value = Vec<SegmentRecord>> {
    prop::collection::vec(
        (1i64..1000, prop::collection::vec(any::<i64>(), 0..4)),
        1..max_len,
    )
    .prop_map(|pieces| {
        let mut lower = -5000i64;
        pieces
            .into_iter()
            .enumerate()
            .map(|(index, (width, payload))| {
                let record = SegmentRecord::new(
                    index as u64,
                    lower,
                    lower + width,
                    payload.into_iter().map(Scalar::from).collect(),
                );
                lower += width;
                record
            })
            .collect()
    })
}

#[test]
fn test_example_prove_and_verify() -> Result<()> {
    let records = example_segments();
    let tree = SegmentTree::build(records.clone())?;

    let proof = tree.prove(1)?;
    assert!(verify(&records[1], 1, &proof, &tree.root()));

    Ok(())
}

#[test]
fn test_example_payload_bit_flip_changes_root() -> Result<()> {
    let records = example_segments();
    let original = SegmentTree::build(records.clone())?.root();

    let mut flipped = records;
    flipped[1].payload[1] = match flipped[1].payload[1] {
        Scalar::Float(v) => Scalar::Float(f64::from_bits(v.to_bits() ^ 1)),
        Scalar::Int(v) => Scalar::Int(v ^ 1),
    };

    assert_ne!(SegmentTree::build(flipped)?.root(), original);
    Ok(())
}

#[test]
fn test_proof_for_other_leaf_fails() -> Result<()> {
    let records = example_segments();
    let tree = MerkleTree::build(&records)?;

    let proof = tree.prove(0)?;
    assert!(!verify(&records[1], 1, &proof, &tree.root()));
    Ok(())
}

#[test]
fn test_position_out_of_range() -> Result<()> {
    let tree = MerkleTree::build(&example_segments())?;
    let result = tree.prove(3);

    assert!(matches!(
        result,
        Err(SplineMerkleError::PositionOutOfRange {
            position: 3,
            size: 3
        })
    ));
    Ok(())
}

#[test]
fn test_non_finite_segment_fails_build() {
    let mut records = example_segments();
    records[2].upper_bound = Scalar::Float(f64::INFINITY);

    assert!(matches!(
        MerkleTree::build(&records),
        Err(SplineMerkleError::Encoding { .. })
    ));
}

#[test]
fn test_large_tree_parallel_build() -> Result<()> {
    let records: Vec<SegmentRecord> = (0..3000)
        .map(|i| SegmentRecord::new(i, i as i64, i as i64 + 1, vec![Scalar::Int(i as i128)]))
        .collect();

    let parallel = MerkleTree::build_with_threshold(&records, 1)?;
    let sequential = MerkleTree::build_with_threshold(&records, usize::MAX)?;
    assert_eq!(parallel.root(), sequential.root());

    for position in [0, 1, 1499, 2047, 2999] {
        let proof = parallel.prove(position)?;
        assert!(verify(&records[position], position, &proof, &parallel.root()));
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_every_position_verifies(records in segments(64)) {
        let tree = MerkleTree::build(&records).unwrap();
        for (position, record) in records.iter().enumerate() {
            let proof = tree.prove(position).unwrap();
            prop_assert!(verify(record, position, &proof, &tree.root()));
        }
    }

    #[test]
    fn prop_wrong_position_fails(records in segments(32), shift in 1usize..32) {
        prop_assume!(records.len() > 1);
        let tree = MerkleTree::build(&records).unwrap();
        let position = shift % records.len();
        let wrong = (position + shift) % records.len();
        prop_assume!(wrong != position);

        let proof = tree.prove(position).unwrap();
        prop_assert!(!verify(&records[position], wrong, &proof, &tree.root()));
    }

    #[test]
    fn prop_tampered_proof_byte_fails(
        records in segments(32),
        pick in any::<usize>(),
        byte in any::<usize>(),
        bit in 0u8..8,
    ) {
        prop_assume!(records.len() > 1);
        let tree = MerkleTree::build(&records).unwrap();
        let position = pick % records.len();
        let proof = tree.prove(position).unwrap();

        let mut bytes = proof.to_bytes();
        let len = bytes.len();
        bytes[byte % len] ^= 1 << bit;
        let tampered = Proof::from_bytes(&bytes).unwrap();

        prop_assert!(!verify(&records[position], position, &tampered, &tree.root()));
    }

    #[test]
    fn prop_single_field_change_changes_root(
        records in segments(32),
        pick in any::<usize>(),
        field in 0u8..4,
        delta in 1i64..1000,
    ) {
        let original = MerkleTree::build(&records).unwrap().root();

        let mut changed = records.clone();
        let position = pick % changed.len();
        let record = &mut changed[position];
        match field {
            0 => record.lower_bound = Scalar::Int(bump(&record.lower_bound, delta)),
            1 => record.upper_bound = Scalar::Int(bump(&record.upper_bound, delta)),
            2 => record.payload.push(Scalar::Int(delta as i128)),
            _ => record.payload = vec![Scalar::Float(delta as f64 + 0.5)],
        }

        prop_assert_ne!(MerkleTree::build(&changed).unwrap().root(), original);
    }

    #[test]
    fn prop_permutation_changes_root(records in segments(32)) {
        prop_assume!(records.len() > 1);
        let original = MerkleTree::build(&records).unwrap().root();

        let mut permuted = records;
        permuted.reverse();
        reindex(&mut permuted);

        prop_assert_ne!(MerkleTree::build(&permuted).unwrap().root(), original);
    }
}

fn bump(value: &Scalar, delta: i64) -> i128 {
    match value {
        Scalar::Int(v) => v + delta as i128,
        Scalar::Float(v) => *v as i128 + delta as i128,
    }
}
