//! Benchmark runner — colors scenario graphs, validates, and collects metrics.

use std::time::Instant;

use roundcolor_io::validator::check_coloring;
use roundcolor_protocol::{ProtocolConfig, RoundExecutor};
use roundcolor_types::{ColoringError, ColoringResult};

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Case, Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run every case of a scenario.
    ///
    /// Case `i` uses protocol seed `seed + i`. A case that hits the round
    /// limit is recorded as invalid; any other protocol error aborts.
    pub fn run(scenario: &Scenario, seed: u64) -> ColoringResult<Vec<BenchmarkMetrics>> {
        scenario
            .cases
            .iter()
            .enumerate()
            .map(|(i, case)| {
                let config = ProtocolConfig {
                    seed: Some(seed.wrapping_add(i as u64)),
                    ..scenario.config.clone()
                };
                Self::run_case(case, config)
            })
            .collect()
    }

    /// Run a single case.
    pub fn run_case(case: &Case, config: ProtocolConfig) -> ColoringResult<BenchmarkMetrics> {
        let seed = config.seed.unwrap_or_default();
        let mut executor = RoundExecutor::new(&case.graph, case.max_degree, config)?;

        let start = Instant::now();
        let result = executor.run();
        let wall_time = start.elapsed().as_secs_f64();

        let mut metrics = BenchmarkMetrics {
            scenario: case.label.clone(),
            vertex_count: case.graph.vertex_count(),
            edge_count: case.graph.edge_count(),
            max_degree: case.max_degree,
            rounds: executor.round(),
            colors_used: 0,
            wall_time,
            seed: executor.seed(),
            valid: false,
        };

        match result {
            Ok(outcome) => {
                let report = check_coloring(&case.graph, &outcome.colors, case.max_degree);
                metrics.colors_used = outcome.colors_used();
                metrics.valid = report.is_valid();
                if !metrics.valid {
                    tracing::error!(case = %case.label, seed, "protocol produced an invalid coloring");
                }
            }
            Err(ColoringError::RoundLimitExceeded { rounds }) => {
                tracing::warn!(case = %case.label, seed, rounds, "case stalled");
            }
            Err(err) => return Err(err),
        }

        Ok(metrics)
    }

    /// Run all scenarios and return metrics for each case.
    pub fn run_all(seed: u64) -> ColoringResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind, seed)?;
            results.extend(Self::run(&scenario, seed)?);
        }
        Ok(results)
    }
}
