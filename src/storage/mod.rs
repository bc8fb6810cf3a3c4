//! Persistence and import collaborators
//!
//! Tree files are the source of truth for a committed segment set; CSV import
//! turns upstream spline parameters into segment records.

pub mod csv_import;
pub mod tree_file;

pub use csv_import::{import_csv, import_reader};
pub use tree_file::{TreeFile, TreeValue, TREE_FORMAT};
