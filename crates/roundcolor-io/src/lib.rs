//! # roundcolor-io
//!
//! Coloring input/output contract and coloring validation.
//!
//! Defines the boundary types that external systems (CLI, files, other
//! services) use to hand graphs to the protocol and read results back,
//! plus the post-hoc validator for finished colorings.

pub mod contract;
pub mod validator;
