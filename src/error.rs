//! Error types for mapping operations.

use thiserror::Error;

/// Error type for dataset mapping operations.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Read-only type lookup on a dimension the mapper does not know about.
    #[error("requested type of dimension {dimension}, but dataset only has {dimensionality} dimensions")]
    DimensionOutOfRange {
        dimension: usize,
        dimensionality: usize,
    },
    /// No token was ever assigned the given code in the dimension.
    #[error("value '{code}' unknown for dimension {dimension}")]
    UnknownCode { code: usize, dimension: usize },
    /// The token was never assigned a code in the dimension.
    #[error("string '{token}' unknown for dimension {dimension}")]
    UnknownToken { token: String, dimension: usize },
    /// Output buffer or input rows do not have the expected length.
    #[error("Shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    /// Deserialized parameters violate a mapper invariant.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for MappingError {
    fn from(err: std::io::Error) -> Self {
        MappingError::Io(err.to_string())
    }
}

impl From<bincode::Error> for MappingError {
    fn from(err: bincode::Error) -> Self {
        MappingError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for MappingError {
    fn from(err: serde_json::Error) -> Self {
        MappingError::Config(err.to_string())
    }
}
