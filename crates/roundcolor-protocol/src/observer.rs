//! Round observers — inspection hooks for the executor loop.
//!
//! Observers are handed to [`RoundExecutor::run_with`](crate::RoundExecutor::run_with)
//! and called at fixed points of the run. They see read-only views of the
//! executor state and cannot influence the protocol.
//!
//! # Lifecycle
//!
//! ```text
//! observer.on_run_begin(...)
//! for each round:
//!   observer.on_round_end(...)
//! observer.on_run_end(...)      // or on_failure(...)
//! ```

use roundcolor_graph::Graph;
use roundcolor_types::{Color, ColoringError};

use crate::executor::{ColoringOutcome, RoundSummary};
use crate::palette::PaletteStore;

/// Trait for round-level inspection hooks.
pub trait RoundObserver: Send {
    /// Called once before the first round.
    fn on_run_begin(&mut self, graph: &Graph, max_degree: u32) {
        let _ = (graph, max_degree);
    }

    /// Called after every completed round with the new committed array
    /// and the palettes as they stood at the end of the round.
    fn on_round_end(&mut self, summary: &RoundSummary, committed: &[Color], palettes: &PaletteStore) {
        let _ = (summary, committed, palettes);
    }

    /// Called once when every vertex has committed.
    fn on_run_end(&mut self, outcome: &ColoringOutcome) {
        let _ = outcome;
    }

    /// Called when the run aborts.
    fn on_failure(&mut self, error: &ColoringError) {
        let _ = error;
    }

    /// Returns the observer's name for logging.
    fn name(&self) -> &str;
}

/// Observer that ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RoundObserver for NullObserver {
    fn name(&self) -> &str {
        "null_observer"
    }
}
