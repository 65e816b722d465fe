//! Round executor — the protocol state machine.
//!
//! One round runs four phases over the full vertex set, strictly in order:
//!
//! 1. **Broadcast** — each vertex removes a value from its neighbors' palettes
//!    (see [`BroadcastPolicy`]).
//! 2. **Select** — each uncommitted vertex samples a tentative color into the
//!    working array; committed vertices keep their color.
//! 3. **Detect** — an uncommitted vertex whose tentative color equals any
//!    neighbor's working value joins the reset set.
//! 4. **Reset & commit** — reset vertices go back to `UNCOMMITTED`, the
//!    working array becomes the committed array, the round counter advances.
//!
//! Each phase finishes over all vertices before the next one starts; that
//! ordering is what simulates the agents acting simultaneously.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use roundcolor_graph::Graph;
use roundcolor_types::{Color, ColoringError, ColoringResult, VertexId, UNCOMMITTED};

use crate::config::{BroadcastPolicy, ProtocolConfig};
use crate::observer::{NullObserver, RoundObserver};
use crate::palette::PaletteStore;

/// Whether any vertex is still uncommitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorState {
    /// At least one vertex is uncommitted.
    Running,
    /// Every vertex holds a committed color.
    Done,
}

/// What happened in a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// 1-based index of the round that just finished.
    pub round: u32,
    /// Vertices that committed in this round.
    pub newly_committed: usize,
    /// Uncommitted vertices whose tentative color collided with a neighbor.
    pub collisions: usize,
    /// Vertices still uncommitted after this round.
    pub uncommitted: usize,
}

/// Result of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringOutcome {
    /// Committed color per vertex, each in `1..=max_degree + 1`.
    pub colors: Vec<Color>,
    /// Number of rounds executed.
    pub rounds: u32,
    /// Seed of the random source, for replay.
    pub seed: u64,
}

impl ColoringOutcome {
    /// Number of distinct colors in the coloring.
    pub fn colors_used(&self) -> usize {
        self.colors.iter().collect::<BTreeSet<_>>().len()
    }
}

/// Drives the protocol for one graph.
///
/// Owns the committed array, the palette store and the random source for
/// the duration of a run; the graph is borrowed immutably.
pub struct RoundExecutor<'g> {
    graph: &'g Graph,
    max_degree: u32,
    config: ProtocolConfig,
    palettes: PaletteStore,
    committed: Vec<Color>,
    rng: StdRng,
    seed: u64,
    round: u32,
}

impl<'g> RoundExecutor<'g> {
    /// Prepares a run over `graph` with colors `1..=max_degree + 1`.
    ///
    /// Fails with `InvalidConfig` for an unusable config, and with
    /// `InvalidGraph` when degree checking is on and some vertex has more
    /// than `max_degree` neighbors.
    ///
    /// The caller's `max_degree` is otherwise taken as given, but with
    /// `check_degree` on (the default) the graph's true maximum degree is
    /// computed once here to reject a bound that is too small. That is a
    /// deliberate departure from trusting the bound outright. Set `check_degree = false` to trust the bound without recomputing it.
    pub fn new(graph: &'g Graph, max_degree: u32, config: ProtocolConfig) -> ColoringResult<Self> {
        config.validate()?;

        if max_degree == u32::MAX {
            return Err(ColoringError::InvalidConfig(
                "max_degree must leave room for max_degree + 1 colors".into(),
            ));
        }

        if config.check_degree {
            let actual = graph.max_degree();
            if actual > max_degree {
                return Err(ColoringError::InvalidGraph(format!(
                    "Declared max degree {max_degree} is below the true max degree {actual}"
                )));
            }
        }

        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());

        Ok(Self {
            graph,
            max_degree,
            palettes: PaletteStore::initialize(graph.vertex_count(), max_degree),
            committed: vec![UNCOMMITTED; graph.vertex_count()],
            rng: StdRng::seed_from_u64(seed),
            seed,
            round: 0,
            config,
        })
    }

    /// Returns `Done` once every vertex has committed.
    pub fn state(&self) -> ExecutorState {
        if self.committed.iter().any(|&c| c == UNCOMMITTED) {
            ExecutorState::Running
        } else {
            ExecutorState::Done
        }
    }

    /// Number of rounds executed so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Committed color per vertex (`UNCOMMITTED` where not yet fixed).
    pub fn committed(&self) -> &[Color] {
        &self.committed
    }

    /// Current palettes.
    pub fn palettes(&self) -> &PaletteStore {
        &self.palettes
    }

    /// Seed of the random source.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Degree bound the palettes were sized for.
    pub fn max_degree(&self) -> u32 {
        self.max_degree
    }

    /// Runs one full round.
    ///
    /// Once the executor is `Done` this is a no-op that reports an empty
    /// summary without advancing the round counter.
    pub fn step(&mut self) -> ColoringResult<RoundSummary> {
        if self.state() == ExecutorState::Done {
            return Ok(RoundSummary {
                round: self.round,
                newly_committed: 0,
                collisions: 0,
                uncommitted: 0,
            });
        }

        let round = self.round + 1;

        self.broadcast();
        let mut working = self.select(round)?;
        let reset = self.detect_collisions(&working);

        for &v in &reset {
            working[v.index()] = UNCOMMITTED;
        }

        let newly_committed = self
            .committed
            .iter()
            .zip(&working)
            .filter(|&(&before, &after)| before == UNCOMMITTED && after != UNCOMMITTED)
            .count();

        self.committed = working;
        self.round = round;

        let summary = RoundSummary {
            round,
            newly_committed,
            collisions: reset.len(),
            uncommitted: self.committed.iter().filter(|&&c| c == UNCOMMITTED).count(),
        };

        debug!(
            round,
            newly_committed,
            collisions = summary.collisions,
            uncommitted = summary.uncommitted,
            "round finished"
        );
        if self.config.progress_every > 0 && round % self.config.progress_every == 0 {
            info!(round, uncommitted = summary.uncommitted, "coloring in progress");
        }

        Ok(summary)
    }

    /// Runs rounds until every vertex commits.
    pub fn run(&mut self) -> ColoringResult<ColoringOutcome> {
        self.run_with(&mut NullObserver)
    }

    /// Runs rounds until every vertex commits, reporting to `observer`.
    pub fn run_with(&mut self, observer: &mut dyn RoundObserver) -> ColoringResult<ColoringOutcome> {
        observer.on_run_begin(self.graph, self.max_degree);

        while self.state() == ExecutorState::Running {
            if let Some(limit) = self.config.round_limit {
                if self.round >= limit {
                    let err = ColoringError::RoundLimitExceeded { rounds: self.round };
                    warn!(rounds = self.round, "round limit reached before all vertices committed");
                    observer.on_failure(&err);
                    return Err(err);
                }
            }

            match self.step() {
                Ok(summary) => observer.on_round_end(&summary, &self.committed, &self.palettes),
                Err(err) => {
                    observer.on_failure(&err);
                    return Err(err);
                }
            }
        }

        let outcome = ColoringOutcome {
            colors: self.committed.clone(),
            rounds: self.round,
            seed: self.seed,
        };
        info!(
            rounds = outcome.rounds,
            vertices = outcome.colors.len(),
            colors_used = outcome.colors_used(),
            "It took {} rounds to color the graph",
            outcome.rounds
        );
        observer.on_run_end(&outcome);
        Ok(outcome)
    }

    /// Phase 1: every vertex removes its broadcast value from each neighbor's palette.
    fn broadcast(&mut self) {
        match self.config.broadcast {
            BroadcastPolicy::VertexIndex => {
                for v in self.graph.vertices() {
                    for &u in self.graph.neighbors(v) {
                        self.palettes.exclude(VertexId(u), v.0);
                    }
                }
            }
            BroadcastPolicy::CommittedColor => {
                for v in self.graph.vertices() {
                    let color = self.committed[v.index()];
                    if color == UNCOMMITTED {
                        continue;
                    }
                    for &u in self.graph.neighbors(v) {
                        self.palettes.exclude(VertexId(u), color);
                    }
                }
            }
        }
    }

    /// Phase 2: uncommitted vertices draw a tentative color.
    fn select(&mut self, round: u32) -> ColoringResult<Vec<Color>> {
        let mut working = self.committed.clone();
        for v in self.graph.vertices() {
            if self.committed[v.index()] != UNCOMMITTED {
                continue;
            }
            working[v.index()] = self.palettes.sample(v, &mut self.rng).map_err(|err| {
                warn!(vertex = v.0, round, "palette exhausted before commit");
                err
            })?;
        }
        Ok(working)
    }

    /// Phase 3: uncommitted vertices sharing a working value with a neighbor.
    fn detect_collisions(&self, working: &[Color]) -> BTreeSet<VertexId> {
        let mut reset = BTreeSet::new();
        for v in self.graph.vertices() {
            if self.committed[v.index()] != UNCOMMITTED {
                continue;
            }
            let mine = working[v.index()];
            if self
                .graph
                .neighbors(v)
                .iter()
                .any(|&u| working[u as usize] == mine)
            {
                reset.insert(v);
            }
        }
        reset
    }
}

/// Colors `graph` in one call.
pub fn color_graph(graph: &Graph, max_degree: u32, config: ProtocolConfig) -> ColoringResult<ColoringOutcome> {
    RoundExecutor::new(graph, max_degree, config)?.run()
}
