//! Error types for the roundcolor workspace.
//!
//! All crates return `ColoringResult<T>` from fallible operations.

use thiserror::Error;

use crate::ids::VertexId;

/// Unified error type for graph construction, the round protocol and I/O.
#[derive(Debug, Error)]
pub enum ColoringError {
    /// Graph input is malformed (self-loop, asymmetric adjacency,
    /// out-of-range neighbor, or a degree bound below the true degree).
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// A vertex ran out of candidate colors before committing.
    #[error("Palette of {vertex} is empty")]
    EmptyPalette {
        vertex: VertexId,
    },

    /// A harness-imposed round cap was hit before every vertex committed.
    #[error("Coloring did not finish within {rounds} rounds")]
    RoundLimitExceeded {
        rounds: u32,
    },

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A finished coloring failed validation.
    #[error("Invalid coloring: {0}")]
    InvalidColoring(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, ColoringError>`.
pub type ColoringResult<T> = Result<T, ColoringError>;
