//! Error types for Spline Merkle

use thiserror::Error;

/// Main error type for Spline Merkle operations
#[derive(Error, Debug)]
pub enum SplineMerkleError {
    /// Leaf encoding errors
    #[error("Encoding error: {reason}")]
    Encoding { reason: String },

    /// Tree construction errors
    #[error("Cannot build a merkle tree from an empty segment sequence")]
    EmptyInput,

    #[error("Segment at position {position} carries index {index}")]
    SegmentOutOfOrder { position: usize, index: u64 },

    /// Proof errors
    #[error("Position {position} out of range for tree with {size} leaves")]
    PositionOutOfRange { position: usize, size: usize },

    /// Tree file errors
    #[error("Invalid tree format: {reason}")]
    Format { reason: String },

    /// CSV import errors
    #[error("Import failed at line {line}: {reason}")]
    Import { line: u64, reason: String },

    #[error("Invalid numeric value: {value:?}")]
    InvalidScalar { value: String },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Hex encoding/decoding errors
    #[error("Hex encoding error: {0}")]
    HexError(#[from] hex::FromHexError),
}

impl SplineMerkleError {
    /// Create a new encoding error
    pub fn encoding(reason: impl Into<String>) -> Self {
        Self::Encoding {
            reason: reason.into(),
        }
    }

    /// Create a new tree format error
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    /// Create a new import error
    pub fn import(line: u64, reason: impl Into<String>) -> Self {
        Self::Import {
            line,
            reason: reason.into(),
        }
    }

    /// Create a new invalid scalar error
    pub fn invalid_scalar(value: impl Into<String>) -> Self {
        Self::InvalidScalar {
            value: value.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}

/// Result type alias for Spline Merkle operations
pub type Result<T> = std::result::Result<T, SplineMerkleError>;
