//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, RoundEvent};

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &RoundEvent);

    /// Called when the run ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events in memory.
///
/// The event list is shared, so a clone kept by the caller can read what
/// the bus delivered after the sink itself was boxed and registered.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<RoundEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event received so far.
    pub fn events(&self) -> Vec<RoundEvent> {
        self.events.lock().map(|e| e.to_vec()).unwrap_or_default()
    }

    /// Number of events received so far.
    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true if nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &RoundEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
pub struct TracingSink {
    /// Log per-round events at `debug` instead of `trace`.
    verbose: bool,
}

impl TracingSink {
    /// Creates a new tracing sink.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &RoundEvent) {
        match &event.kind {
            EventKind::RoundEnd { .. } if self.verbose => {
                tracing::debug!(round = event.round, event = ?event.kind, "coloring_event");
            }
            EventKind::RoundEnd { .. } => {
                tracing::trace!(round = event.round, event = ?event.kind, "coloring_event");
            }
            EventKind::PaletteExhausted { vertex } => {
                tracing::warn!(round = event.round, vertex, "coloring_event: palette exhausted");
            }
            EventKind::Failure { reason } => {
                tracing::warn!(round = event.round, %reason, "coloring_event");
            }
            _ => {
                tracing::info!(round = event.round, event = ?event.kind, "coloring_event");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
