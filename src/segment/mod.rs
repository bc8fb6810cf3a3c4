//! Segment records, their canonical encoding, and interval lookup

pub mod encoding;
pub mod index;
pub mod record;

pub use encoding::{encode, encode_record};
pub use index::{locate, locate_sorted};
pub use record::{reindex, SegmentRecord};
