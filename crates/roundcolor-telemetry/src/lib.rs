//! # roundcolor-telemetry
//!
//! Event bus for coloring telemetry. Emits structured events
//! (run start, per-round progress, palette exhaustion, completion)
//! that can be consumed by pluggable sinks (in-memory, `tracing`, ...).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, RoundEvent};
