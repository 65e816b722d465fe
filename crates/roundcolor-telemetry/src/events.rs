//! Coloring event types.
//!
//! Structured events emitted at fixed points of a protocol run. Events are
//! lightweight value types carrying just enough data for monitoring.

use serde::{Deserialize, Serialize};

/// A telemetry event, tagged with the round it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundEvent {
    /// Round number (0 before the first round).
    pub round: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// A run is about to start.
    RunBegin {
        vertex_count: usize,
        edge_count: usize,
        max_degree: u32,
    },

    /// A round finished.
    RoundEnd {
        /// Vertices that committed this round.
        newly_committed: usize,
        /// Uncommitted vertices reset because of a collision.
        collisions: usize,
        /// Vertices still uncommitted.
        uncommitted: usize,
        /// Smallest palette among uncommitted vertices (0 if none remain).
        min_palette: usize,
    },

    /// Every vertex committed.
    RunEnd {
        rounds: u32,
        colors_used: usize,
    },

    /// A vertex had to select from an empty palette.
    PaletteExhausted {
        /// Index of the stranded vertex.
        vertex: u32,
    },

    /// The run aborted for any other reason.
    Failure {
        /// Rendered error message.
        reason: String,
    },
}

impl RoundEvent {
    /// Creates a new event for the given round.
    pub fn new(round: u32, kind: EventKind) -> Self {
        Self { round, kind }
    }
}
