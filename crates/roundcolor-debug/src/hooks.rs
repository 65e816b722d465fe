//! Round observers for live debugging.
//!
//! Both hooks are read-only: they record what the executor reports and
//! never touch protocol state.

use roundcolor_graph::Graph;
use roundcolor_protocol::{ColoringOutcome, PaletteStore, RoundObserver, RoundSummary};
use roundcolor_telemetry::events::{EventKind, RoundEvent};
use roundcolor_types::{Color, ColoringError, VertexId, UNCOMMITTED};

use crate::snapshot::{RunSnapshot, RunTrace};

/// Hook that bridges to the telemetry event bus.
///
/// Translates executor callbacks into [`RoundEvent`]s, which the caller
/// drains and emits through an `EventBus`.
pub struct TelemetryHook {
    events: Vec<RoundEvent>,
    last_round: u32,
}

impl TelemetryHook {
    /// Creates a new telemetry hook.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            last_round: 0,
        }
    }

    /// Drains collected events for dispatch.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for TelemetryHook {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundObserver for TelemetryHook {
    fn on_run_begin(&mut self, graph: &Graph, max_degree: u32) {
        self.last_round = 0;
        self.events.push(RoundEvent::new(
            0,
            EventKind::RunBegin {
                vertex_count: graph.vertex_count(),
                edge_count: graph.edge_count(),
                max_degree,
            },
        ));
    }

    fn on_round_end(&mut self, summary: &RoundSummary, committed: &[Color], palettes: &PaletteStore) {
        let min_palette = committed
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == UNCOMMITTED)
            .map(|(v, _)| palettes.len(VertexId(v as u32)))
            .min()
            .unwrap_or(0);

        self.last_round = summary.round;
        self.events.push(RoundEvent::new(
            summary.round,
            EventKind::RoundEnd {
                newly_committed: summary.newly_committed,
                collisions: summary.collisions,
                uncommitted: summary.uncommitted,
                min_palette,
            },
        ));
    }

    fn on_run_end(&mut self, outcome: &ColoringOutcome) {
        self.events.push(RoundEvent::new(
            outcome.rounds,
            EventKind::RunEnd {
                rounds: outcome.rounds,
                colors_used: outcome.colors_used(),
            },
        ));
    }

    fn on_failure(&mut self, error: &ColoringError) {
        let kind = match error {
            ColoringError::EmptyPalette { vertex } => EventKind::PaletteExhausted { vertex: vertex.0 },
            other => EventKind::Failure {
                reason: other.to_string(),
            },
        };
        self.events.push(RoundEvent::new(self.last_round, kind));
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}

/// Hook that keeps a [`RunSnapshot`] of every round.
#[derive(Default)]
pub struct SnapshotHook {
    trace: RunTrace,
}

impl SnapshotHook {
    /// Creates an empty snapshot hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded trace so far.
    pub fn trace(&self) -> &RunTrace {
        &self.trace
    }

    /// Consumes the hook, returning the trace.
    pub fn into_trace(self) -> RunTrace {
        self.trace
    }
}

impl RoundObserver for SnapshotHook {
    fn on_run_begin(&mut self, _graph: &Graph, _max_degree: u32) {
        self.trace = RunTrace::default();
    }

    fn on_round_end(&mut self, summary: &RoundSummary, committed: &[Color], palettes: &PaletteStore) {
        self.trace
            .snapshots
            .push(RunSnapshot::capture(summary.round, committed, palettes));
    }

    fn on_run_end(&mut self, outcome: &ColoringOutcome) {
        self.trace.seed = Some(outcome.seed);
    }

    fn name(&self) -> &str {
        "snapshot_hook"
    }
}

/// Forwards every callback to each wrapped observer in order.
#[derive(Default)]
pub struct ObserverChain<'a> {
    observers: Vec<&'a mut dyn RoundObserver>,
}

impl<'a> ObserverChain<'a> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Appends an observer.
    pub fn push(&mut self, observer: &'a mut dyn RoundObserver) {
        self.observers.push(observer);
    }
}

impl RoundObserver for ObserverChain<'_> {
    fn on_run_begin(&mut self, graph: &Graph, max_degree: u32) {
        for o in &mut self.observers {
            o.on_run_begin(graph, max_degree);
        }
    }

    fn on_round_end(&mut self, summary: &RoundSummary, committed: &[Color], palettes: &PaletteStore) {
        for o in &mut self.observers {
            o.on_round_end(summary, committed, palettes);
        }
    }

    fn on_run_end(&mut self, outcome: &ColoringOutcome) {
        for o in &mut self.observers {
            o.on_run_end(outcome);
        }
    }

    fn on_failure(&mut self, error: &ColoringError) {
        for o in &mut self.observers {
            o.on_failure(error);
        }
    }

    fn name(&self) -> &str {
        "observer_chain"
    }
}
