//! # roundcolor-debug
//!
//! Round observers and state snapshots for debugging coloring runs.
//! Supports serializing per-round executor state to binary for
//! offline inspection, and bridging executor callbacks into telemetry.

pub mod hooks;
pub mod snapshot;
