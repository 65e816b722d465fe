//! # roundcolor-protocol
//!
//! Synchronous simulation of a randomized distributed (Δ+1)-coloring
//! protocol. Every vertex acts as an agent that, once per round,
//! broadcasts to its neighbors, samples a tentative color from its
//! shrinking palette, and commits unless a neighbor holds the same value.
//!
//! ## Key Types
//!
//! - [`PaletteStore`] — Per-vertex admissible color sets (only ever shrink)
//! - [`RoundExecutor`] — Broadcast / select / detect / commit state machine
//! - [`ProtocolConfig`] — Seed, broadcast policy, optional harness round cap
//! - [`RoundObserver`] — Inspection hook invoked after every round

pub mod config;
pub mod executor;
pub mod observer;
pub mod palette;

pub use config::{BroadcastPolicy, ProtocolConfig};
pub use executor::{color_graph, ColoringOutcome, ExecutorState, RoundExecutor, RoundSummary};
pub use observer::{NullObserver, RoundObserver};
pub use palette::PaletteStore;
