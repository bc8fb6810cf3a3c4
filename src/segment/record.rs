//! Segment records

use crate::core::types::Scalar;
use serde::{Deserialize, Serialize};

/// One interval-indexed piece of the committed domain.
///
/// The interval is closed on both ends. The payload is carried and hashed but
/// never interpreted; for splines it holds the polynomial coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// Position of this record in the canonical ordering
    pub index: u64,
    /// Inclusive lower end of the domain interval
    pub lower_bound: Scalar,
    /// Inclusive upper end of the domain interval
    pub upper_bound: Scalar,
    /// Per-segment data (coefficients)
    #[serde(default)]
    pub payload: Vec<Scalar>,
}

impl SegmentRecord {
    pub fn new(
        index: u64,
        lower_bound: impl Into<Scalar>,
        upper_bound: impl Into<Scalar>,
        payload: Vec<Scalar>,
    ) -> Self {
        Self {
            index,
            lower_bound: lower_bound.into(),
            upper_bound: upper_bound.into(),
            payload,
        }
    }

    /// Whether `x` falls inside `[lower_bound, upper_bound]`
    pub fn contains(&self, x: &Scalar) -> bool {
        self.lower_bound.le(x) && x.le(&self.upper_bound)
    }
}

/// Reassign `index` so that every record matches its position.
///
/// Useful after reordering or filtering a sequence before rebuilding.
pub fn reindex(records: &mut [SegmentRecord]) {
    for (position, record) in records.iter_mut().enumerate() {
        record.index = position as u64;
    }
}
