//! Segment lookup by interval containment
//!
//! Intervals are closed, so neighbouring segments may share a boundary value.
//! A point on a shared boundary belongs to the earlier segment.

use crate::core::types::Scalar;
use crate::segment::record::SegmentRecord;
use std::cmp::Ordering;

/// Find the first record, in sequence order, whose interval contains `x`.
///
/// Returns `None` when `x` lies outside every interval (or is NaN).
pub fn locate(records: &[SegmentRecord], x: &Scalar) -> Option<usize> {
    records.iter().position(|record| record.contains(x))
}

/// Binary-search variant of [`locate`].
///
/// Requires records sorted by domain with intervals that overlap at most on a
/// shared endpoint. Under that requirement it returns exactly what [`locate`]
/// returns, including the earlier-segment tie-break.
pub fn locate_sorted(records: &[SegmentRecord], x: &Scalar) -> Option<usize> {
    // First record whose upper bound is not below x; on a shared boundary this
    // is the earlier of the two neighbours.
    let candidate = records.partition_point(|record| {
        matches!(record.upper_bound.numeric_cmp(x), Some(Ordering::Less))
    });

    records
        .get(candidate)
        .filter(|record| record.contains(x))
        .map(|_| candidate)
}
