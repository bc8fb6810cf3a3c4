//! Canonical leaf encoding
//!
//! Layout, all integers big-endian:
//!
//! ```text
//! "SPLN" | version:u8 | index:u64 | lower:scalar | upper:scalar | len:u32 | payload:scalar*
//! scalar = 0x01 | i128        (integer)
//!        | 0x02 | f64 bits    (finite float, -0.0 stored as +0.0)
//! ```

use crate::core::{error::*, hash::hash_leaf, types::*};
use crate::segment::record::SegmentRecord;

/// Magic bytes at the start of every encoded record
pub const RECORD_MAGIC: &[u8; 4] = b"SPLN";

/// Version of the record encoding
pub const ENCODING_VERSION: u8 = 1;

const SCALAR_INT: u8 = 0x01;
const SCALAR_FLOAT: u8 = 0x02;

/// Field layout advertised in tree files
pub const LEAF_ENCODING: [&str; 4] = ["u64", "scalar", "scalar", "scalar[]"];

/// Serialize a record to its canonical byte form
pub fn encode_record(record: &SegmentRecord) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(4 + 1 + 8 + 2 * 17 + 4 + record.payload.len() * 17);
    out.extend_from_slice(RECORD_MAGIC);
    out.push(ENCODING_VERSION);
    out.extend_from_slice(&record.index.to_be_bytes());
    write_scalar(&mut out, &record.lower_bound, "lower_bound")?;
    write_scalar(&mut out, &record.upper_bound, "upper_bound")?;

    let len = u32::try_from(record.payload.len())
        .map_err(|_| SplineMerkleError::encoding("payload has more than u32::MAX entries"))?;
    out.extend_from_slice(&len.to_be_bytes());
    for (i, value) in record.payload.iter().enumerate() {
        write_scalar(&mut out, value, &format!("payload[{}]", i))?;
    }
    Ok(out)
}

/// Compute the leaf digest of a record
pub fn encode(record: &SegmentRecord) -> Result<LeafDigest> {
    Ok(hash_leaf(&encode_record(record)?))
}

fn write_scalar(out: &mut Vec<u8>, value: &Scalar, field: &str) -> Result<()> {
    match value {
        Scalar::Int(v) => {
            out.push(SCALAR_INT);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Scalar::Float(v) => {
            if !v.is_finite() {
                return Err(SplineMerkleError::encoding(format!(
                    "{} is not a finite number ({})",
                    field, v
                )));
            }
            let v = if *v == 0.0 { 0.0f64 } else { *v };
            out.push(SCALAR_FLOAT);
            out.extend_from_slice(&v.to_bits().to_be_bytes());
        }
    }
    Ok(())
}
