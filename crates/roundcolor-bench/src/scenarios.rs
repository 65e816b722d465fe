//! Benchmark scenarios — graph + degree bound + protocol config per case.
//!
//! Canonical scenarios:
//! 1. **Triangle** — `K_3` with `max_degree = 2`
//! 2. **Isolated** — a single vertex with `max_degree = 0`
//! 3. **Path** — `0 - 1 - 2 - 3` with `max_degree = 2`
//! 4. **Sweep** — random degree-capped graphs of growing size

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use roundcolor_graph::generators::{complete, path, sweep_case};
use roundcolor_graph::Graph;
use roundcolor_protocol::ProtocolConfig;
use roundcolor_types::constants::HARNESS_ROUND_LIMIT;
use roundcolor_types::ColoringResult;

/// Number of cases in the full sweep.
pub const SWEEP_STEPS: usize = 10;

/// Round cap for sweep cases. Sweep graphs reach tens of thousands of
/// vertices, so a stalled case is cut off earlier than the small scenarios.
pub const SWEEP_ROUND_LIMIT: u32 = 1_000;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    Triangle,
    Isolated,
    Path,
    Sweep,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::Triangle,
            ScenarioKind::Isolated,
            ScenarioKind::Path,
            ScenarioKind::Sweep,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Triangle => "triangle",
            ScenarioKind::Isolated => "isolated",
            ScenarioKind::Path => "path",
            ScenarioKind::Sweep => "sweep",
        }
    }

    /// Parses a scenario name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// One graph to color.
#[derive(Debug, Clone)]
pub struct Case {
    /// Label used in metrics (`sweep/3` etc.).
    pub label: String,
    pub graph: Graph,
    pub max_degree: u32,
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    /// Graphs to color, in order.
    pub cases: Vec<Case>,
    /// Protocol configuration shared by every case. The runner overrides
    /// the seed per case.
    pub config: ProtocolConfig,
}

impl Scenario {
    fn single(kind: ScenarioKind, graph: Graph, max_degree: u32) -> Self {
        Self {
            kind,
            cases: vec![Case {
                label: kind.name().to_string(),
                graph,
                max_degree,
            }],
            config: ProtocolConfig::default().with_round_limit(HARNESS_ROUND_LIMIT),
        }
    }

    /// Triangle `K_3`, three colors available.
    pub fn triangle() -> ColoringResult<Self> {
        Ok(Self::single(ScenarioKind::Triangle, complete(3)?, 2))
    }

    /// One isolated vertex, a single color available.
    pub fn isolated() -> ColoringResult<Self> {
        Ok(Self::single(ScenarioKind::Isolated, Graph::empty(1)?, 0))
    }

    /// Path on four vertices, three colors available.
    pub fn path() -> ColoringResult<Self> {
        Ok(Self::single(ScenarioKind::Path, path(4)?, 2))
    }

    /// Ten random degree-capped graphs for steps `1, 11, ..., 91`.
    ///
    /// Each case's degree bound is its realized max degree. Graph
    /// generation is seeded by `seed`, so the sweep is reproducible.
    pub fn sweep(seed: u64) -> ColoringResult<Self> {
        Self::sweep_steps(seed, SWEEP_STEPS)
    }

    /// The first `count` cases of the sweep.
    pub fn sweep_steps(seed: u64, count: usize) -> ColoringResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cases = Vec::new();
        for step in (1..100).step_by(10).take(count) {
            let graph = sweep_case(&mut rng, step)?;
            cases.push(Case {
                label: format!("sweep/{step}"),
                max_degree: graph.max_degree(),
                graph,
            });
        }
        Ok(Self {
            kind: ScenarioKind::Sweep,
            cases,
            config: ProtocolConfig::default().with_round_limit(SWEEP_ROUND_LIMIT),
        })
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind, seed: u64) -> ColoringResult<Self> {
        match kind {
            ScenarioKind::Triangle => Self::triangle(),
            ScenarioKind::Isolated => Self::isolated(),
            ScenarioKind::Path => Self::path(),
            ScenarioKind::Sweep => Self::sweep(seed),
        }
    }

    /// Replace the protocol configuration for every case.
    pub fn with_config(mut self, config: ProtocolConfig) -> Self {
        self.config = config;
        self
    }
}
