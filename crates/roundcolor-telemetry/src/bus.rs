//! Event bus — broadcast-style event dispatch with pluggable sinks.
//!
//! The bus uses `std::sync::mpsc` for event delivery. Sinks are registered
//! once at initialization and receive events when the bus is flushed.

use std::sync::mpsc;

use crate::events::RoundEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for coloring telemetry.
///
/// The producer side (`emit`) queues events; `flush` hands each queued
/// event to every registered sink in registration order.
pub struct EventBus {
    sender: mpsc::Sender<RoundEvent>,
    receiver: mpsc::Receiver<RoundEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Disabled bus is a no-op.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. Disabled bus drops events silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit an event. If the bus is disabled, this is a no-op.
    pub fn emit(&self, event: RoundEvent) {
        if !self.enabled {
            return;
        }
        // Receiver lives as long as the bus, send cannot fail here
        let _ = self.sender.send(event);
    }

    /// Emit every event from an iterator.
    pub fn emit_all(&self, events: impl IntoIterator<Item = RoundEvent>) {
        for event in events {
            self.emit(event);
        }
    }

    /// Flush all pending events to registered sinks.
    ///
    /// Returns the number of events dispatched.
    pub fn flush(&mut self) -> usize {
        let mut dispatched = 0;
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            dispatched += 1;
        }
        dispatched
    }

    /// Flushes pending events and finalizes every sink.
    pub fn shutdown(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
