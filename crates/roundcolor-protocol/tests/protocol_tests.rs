//! Integration tests for roundcolor-protocol.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use roundcolor_graph::generators::{complete, cycle, path, random_capped, star};
use roundcolor_graph::Graph;
use roundcolor_protocol::{
    color_graph, BroadcastPolicy, ColoringOutcome, ExecutorState, PaletteStore, ProtocolConfig,
    RoundExecutor, RoundObserver, RoundSummary,
};
use roundcolor_types::constants::HARNESS_ROUND_LIMIT;
use roundcolor_types::{Color, ColoringError, VertexId, UNCOMMITTED};

fn assert_proper(graph: &Graph, colors: &[Color], max_degree: u32) {
    assert_eq!(colors.len(), graph.vertex_count());
    for v in graph.vertices() {
        let c = colors[v.index()];
        assert!(c >= 1 && c <= max_degree + 1, "{v} has out-of-range color {c}");
        for &u in graph.neighbors(v) {
            assert_ne!(c, colors[u as usize], "{v} and v{u} share color {c}");
        }
    }
}

/// Records per-round state so tests can check cross-round invariants.
#[derive(Default)]
struct Recorder {
    began: bool,
    ended: bool,
    failed: bool,
    summaries: Vec<RoundSummary>,
    committed: Vec<Vec<Color>>,
    palette_sizes: Vec<Vec<usize>>,
}

impl RoundObserver for Recorder {
    fn on_run_begin(&mut self, _graph: &Graph, _max_degree: u32) {
        self.began = true;
    }

    fn on_round_end(&mut self, summary: &RoundSummary, committed: &[Color], palettes: &PaletteStore) {
        self.summaries.push(*summary);
        self.committed.push(committed.to_vec());
        self.palette_sizes.push(palettes.sizes());
    }

    fn on_run_end(&mut self, _outcome: &ColoringOutcome) {
        self.ended = true;
    }

    fn on_failure(&mut self, _error: &ColoringError) {
        self.failed = true;
    }

    fn name(&self) -> &str {
        "recorder"
    }
}

// ─── Concrete Scenarios ───────────────────────────────────────

#[test]
fn triangle_gets_three_distinct_colors() {
    let g = complete(3).unwrap();
    for seed in 0..20 {
        let outcome = color_graph(&g, 2, ProtocolConfig::seeded(seed)).unwrap();
        assert_proper(&g, &outcome.colors, 2);
        assert_eq!(outcome.colors_used(), 3);
    }
}

#[test]
fn triangle_index_broadcast_forces_unique_coloring() {
    // Vertex 0 loses colors 1 and 2 (its neighbors' indices), vertex 1
    // loses 2, vertex 2 loses 1: the only proper outcome left is [3, 1, 2].
    let g = complete(3).unwrap();
    let outcome = color_graph(&g, 2, ProtocolConfig::seeded(42)).unwrap();
    assert_eq!(outcome.colors, vec![3, 1, 2]);
}

#[test]
fn isolated_vertex_commits_in_first_round() {
    let g = Graph::empty(1).unwrap();
    let outcome = color_graph(&g, 0, ProtocolConfig::seeded(1)).unwrap();
    assert_eq!(outcome.colors, vec![1]);
    assert_eq!(outcome.rounds, 1);
}

#[test]
fn path_of_four_always_finishes() {
    // After the first broadcast: v0 = {2, 3}, v1 = {1, 3}, v2 = {2},
    // v3 = {1, 3}. Every neighbor pair keeps a color the other cannot take,
    // so no commitment pattern strands a vertex.
    let g = path(4).unwrap();
    for seed in 0..500 {
        let config = ProtocolConfig::seeded(seed).with_round_limit(200);
        let outcome = color_graph(&g, 2, config)
            .unwrap_or_else(|e| panic!("seed {seed}: {e}"));
        assert_proper(&g, &outcome.colors, 2);
        assert_eq!(outcome.colors[2], 2);
    }
}

#[test]
fn index_broadcast_can_stall_on_a_hub() {
    // v10 is adjacent to v1 and v20. Index broadcast removes 1 from v10's
    // palette and nothing else in range, leaving v10 = {2, 3}. Once v1 and
    // v20 commit 2 and 3 between them, v10 collides every round.
    let g = Graph::from_edges(21, &[(10, 1), (10, 20)]).unwrap();
    let mut stalled = 0;
    for seed in 0..300 {
        let config = ProtocolConfig::seeded(seed).with_round_limit(100);
        let mut exec = RoundExecutor::new(&g, 2, config).unwrap();
        match exec.run() {
            Ok(outcome) => assert_proper(&g, &outcome.colors, 2),
            Err(ColoringError::RoundLimitExceeded { rounds }) => {
                assert_eq!(rounds, 100);
                let committed = exec.committed();
                assert_eq!(committed[10], UNCOMMITTED);
                let mut held = [committed[1], committed[20]];
                held.sort_unstable();
                assert_eq!(held, [2, 3]);
                let palette: Vec<Color> = exec.palettes().get(VertexId(10)).iter().copied().collect();
                assert_eq!(palette, vec![2, 3]);
                stalled += 1;
            }
            Err(other) => panic!("seed {seed}: unexpected error: {other}"),
        }
    }
    assert!(stalled > 0, "no seed stalled");
}

#[test]
fn committed_color_broadcast_frees_the_hub() {
    let g = Graph::from_edges(21, &[(10, 1), (10, 20)]).unwrap();
    for seed in 0..300 {
        let config = ProtocolConfig::corrected().with_round_limit(HARNESS_ROUND_LIMIT);
        let config = ProtocolConfig { seed: Some(seed), ..config };
        let outcome = color_graph(&g, 2, config).unwrap();
        assert_proper(&g, &outcome.colors, 2);
    }
}

#[test]
fn understated_degree_rejected_up_front() {
    let g = path(2).unwrap();
    let err = color_graph(&g, 0, ProtocolConfig::seeded(0)).unwrap_err();
    assert!(matches!(err, ColoringError::InvalidGraph(_)));
}

#[test]
fn understated_degree_exhausts_palette_when_trusted() {
    let g = path(2).unwrap();
    let config = ProtocolConfig {
        check_degree: false,
        ..ProtocolConfig::seeded(0)
    };
    let err = color_graph(&g, 0, config).unwrap_err();
    assert!(matches!(err, ColoringError::EmptyPalette { vertex } if vertex == VertexId(0)));
}

#[test]
fn understated_degree_never_yields_improper_coloring() {
    let g = path(2).unwrap();
    let config = ProtocolConfig {
        check_degree: false,
        ..ProtocolConfig::corrected().with_round_limit(50)
    };
    let err = color_graph(&g, 0, config).unwrap_err();
    assert!(matches!(err, ColoringError::RoundLimitExceeded { rounds: 50 }));
}

// ─── Palette Store ────────────────────────────────────────────

#[test]
fn palette_initialize_fills_full_range() {
    let store = PaletteStore::initialize(3, 2);
    assert_eq!(store.vertex_count(), 3);
    for v in 0..3 {
        let colors: Vec<Color> = store.get(VertexId(v)).iter().copied().collect();
        assert_eq!(colors, vec![1, 2, 3]);
    }
}

#[test]
fn palette_exclude_absent_is_noop() {
    let mut store = PaletteStore::initialize(1, 1);
    assert!(store.exclude(VertexId(0), 2));
    assert!(!store.exclude(VertexId(0), 2));
    assert!(!store.exclude(VertexId(0), 0));
    assert!(!store.exclude(VertexId(0), 99));
    assert_eq!(store.len(VertexId(0)), 1);
}

#[test]
fn palette_sample_stays_in_palette() {
    let mut store = PaletteStore::initialize(1, 5);
    store.exclude(VertexId(0), 2);
    store.exclude(VertexId(0), 4);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let c = store.sample(VertexId(0), &mut rng).unwrap();
        assert!(store.contains(VertexId(0), c));
    }
}

#[test]
fn palette_sample_covers_every_color() {
    let store = PaletteStore::initialize(1, 3);
    let mut rng = StdRng::seed_from_u64(5);
    let mut seen = BTreeSet::new();
    for _ in 0..500 {
        seen.insert(store.sample(VertexId(0), &mut rng).unwrap());
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn palette_sample_empty_fails() {
    let mut store = PaletteStore::initialize(2, 0);
    store.exclude(VertexId(1), 1);
    assert!(store.is_empty(VertexId(1)));
    let mut rng = StdRng::seed_from_u64(0);
    let err = store.sample(VertexId(1), &mut rng).unwrap_err();
    assert!(matches!(err, ColoringError::EmptyPalette { vertex } if vertex == VertexId(1)));
}

// ─── Executor API Tests ───────────────────────────────────────

#[test]
fn step_runs_one_round_at_a_time() {
    let g = star(5).unwrap();
    let mut exec = RoundExecutor::new(&g, 4, ProtocolConfig::seeded(9)).unwrap();
    assert_eq!(exec.state(), ExecutorState::Running);
    assert_eq!(exec.round(), 0);
    assert!(exec.committed().iter().all(|&c| c == UNCOMMITTED));

    let summary = exec.step().unwrap();
    assert_eq!(summary.round, 1);
    assert_eq!(exec.round(), 1);
    assert_eq!(summary.uncommitted + summary.newly_committed, 5);
}

#[test]
fn step_after_done_is_noop() {
    let g = Graph::empty(3).unwrap();
    let mut exec = RoundExecutor::new(&g, 0, ProtocolConfig::seeded(2)).unwrap();
    exec.run().unwrap();
    assert_eq!(exec.state(), ExecutorState::Done);
    let summary = exec.step().unwrap();
    assert_eq!(summary.round, 1);
    assert_eq!(summary.newly_committed, 0);
    assert_eq!(exec.round(), 1);
}

#[test]
fn seeded_runs_are_reproducible() {
    let mut rng = StdRng::seed_from_u64(17);
    let g = random_capped(&mut rng, 80, 6, 3_000).unwrap();
    let d = g.max_degree();
    let config = ProtocolConfig::corrected();
    let a = color_graph(&g, d, ProtocolConfig { seed: Some(5), ..config.clone() }).unwrap();
    let b = color_graph(&g, d, ProtocolConfig { seed: Some(5), ..config }).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.seed, 5);
}

#[test]
fn unseeded_run_reports_its_seed() {
    let g = complete(3).unwrap();
    let outcome = color_graph(&g, 2, ProtocolConfig::default()).unwrap();
    let replay = color_graph(&g, 2, ProtocolConfig::seeded(outcome.seed)).unwrap();
    assert_eq!(outcome, replay);
}

#[test]
fn zero_round_limit_rejected() {
    let g = Graph::empty(1).unwrap();
    let err = RoundExecutor::new(&g, 0, ProtocolConfig::seeded(0).with_round_limit(0)).err();
    assert!(matches!(err, Some(ColoringError::InvalidConfig(_))));
}

#[test]
fn max_degree_overflow_rejected() {
    let g = Graph::empty(1).unwrap();
    assert!(RoundExecutor::new(&g, u32::MAX, ProtocolConfig::seeded(0)).is_err());
}

// ─── Observer Tests ───────────────────────────────────────────

#[test]
fn observer_sees_every_round() {
    let g = cycle(7).unwrap();
    let mut recorder = Recorder::default();
    let mut exec = RoundExecutor::new(&g, 2, ProtocolConfig::corrected().with_round_limit(HARNESS_ROUND_LIMIT)).unwrap();
    let outcome = exec.run_with(&mut recorder).unwrap();

    assert!(recorder.began);
    assert!(recorder.ended);
    assert!(!recorder.failed);
    assert_eq!(recorder.summaries.len(), outcome.rounds as usize);
    assert_eq!(recorder.summaries.last().unwrap().uncommitted, 0);
    let committed_total: usize = recorder.summaries.iter().map(|s| s.newly_committed).sum();
    assert_eq!(committed_total, 7);
}

#[test]
fn observer_notified_on_failure() {
    let g = path(2).unwrap();
    let config = ProtocolConfig {
        check_degree: false,
        ..ProtocolConfig::seeded(3)
    };
    let mut recorder = Recorder::default();
    let mut exec = RoundExecutor::new(&g, 0, config).unwrap();
    assert!(exec.run_with(&mut recorder).is_err());
    assert!(recorder.failed);
    assert!(!recorder.ended);
}

#[test]
fn commitments_are_permanent_and_palettes_shrink() {
    let mut rng = StdRng::seed_from_u64(23);
    for policy in [BroadcastPolicy::VertexIndex, BroadcastPolicy::CommittedColor] {
        let g = random_capped(&mut rng, 50, 5, 1_500).unwrap();
        let d = g.max_degree();
        let config = ProtocolConfig::seeded(8).with_broadcast(policy).with_round_limit(500);
        let mut recorder = Recorder::default();
        let mut exec = RoundExecutor::new(&g, d, config).unwrap();
        let _ = exec.run_with(&mut recorder);

        for window in recorder.committed.windows(2) {
            for (before, after) in window[0].iter().zip(&window[1]) {
                if *before != UNCOMMITTED {
                    assert_eq!(before, after);
                }
            }
        }
        for window in recorder.palette_sizes.windows(2) {
            for (before, after) in window[0].iter().zip(&window[1]) {
                assert!(after <= before);
            }
        }
    }
}

// ─── Property Tests ───────────────────────────────────────────

#[test]
fn corrected_protocol_always_terminates_properly() {
    let mut rng = StdRng::seed_from_u64(2024);
    for case in 0..25u64 {
        let g = random_capped(&mut rng, 30 + case as usize * 4, 1 + (case % 8) as u32, 2_000).unwrap();
        let d = g.max_degree();
        let config = ProtocolConfig {
            seed: Some(case),
            ..ProtocolConfig::corrected().with_round_limit(HARNESS_ROUND_LIMIT)
        };
        let outcome = color_graph(&g, d, config).unwrap();
        assert_proper(&g, &outcome.colors, d);
        assert!(outcome.rounds >= 1);
    }
}

#[test]
fn index_broadcast_never_exhausts_with_valid_degree() {
    let mut rng = StdRng::seed_from_u64(77);
    for case in 0..25u64 {
        let g = random_capped(&mut rng, 40, 1 + (case % 6) as u32, 1_000).unwrap();
        let d = g.max_degree();
        let config = ProtocolConfig::seeded(case).with_round_limit(2_000);
        match color_graph(&g, d, config) {
            Ok(outcome) => assert_proper(&g, &outcome.colors, d),
            Err(ColoringError::RoundLimitExceeded { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn generous_degree_bound_is_fine() {
    let g = path(4).unwrap();
    let outcome = color_graph(&g, 10, ProtocolConfig::corrected()).unwrap();
    assert_proper(&g, &outcome.colors, 10);
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn default_config() {
    let config = ProtocolConfig::default();
    assert_eq!(config.broadcast, BroadcastPolicy::VertexIndex);
    assert!(config.check_degree);
    assert!(config.round_limit.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn config_toml_round_trip() {
    let config = ProtocolConfig::corrected().with_round_limit(100);
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("committed_color"));
    let recovered: ProtocolConfig = toml::from_str(&text).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn partial_toml_uses_defaults() {
    let config: ProtocolConfig = toml::from_str("seed = 7").unwrap();
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.broadcast, BroadcastPolicy::VertexIndex);
    assert!(config.check_degree);
}

#[test]
fn summary_serializes() {
    let summary = RoundSummary {
        round: 3,
        newly_committed: 4,
        collisions: 2,
        uncommitted: 1,
    };
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"collisions\":2"));
}
