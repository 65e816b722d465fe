//! # roundcolor-graph
//!
//! Immutable undirected graph representation used by the round protocol.
//!
//! ## Key Types
//!
//! - [`Graph`] — Vertex count plus symmetric, loop-free adjacency sets,
//!   validated once at construction and never mutated afterwards.
//! - Procedural generators for tests and benchmarks (complete graphs,
//!   paths, cycles, stars, and random degree-capped graphs).

pub mod generators;
pub mod graph;

pub use graph::Graph;
