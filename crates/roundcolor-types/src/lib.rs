//! # roundcolor-types
//!
//! Shared types, identifiers, error types, and protocol constants
//! for the roundcolor vertex coloring workspace.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other roundcolor crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{ColoringError, ColoringResult};
pub use ids::{Color, VertexId, UNCOMMITTED};
