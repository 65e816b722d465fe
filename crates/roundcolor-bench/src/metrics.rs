//! Benchmark metrics — data collected from one coloring run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a single benchmark case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Case label.
    pub scenario: String,
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Degree bound the palettes were sized for.
    pub max_degree: u32,
    /// Rounds until every vertex committed (or until the run stopped).
    pub rounds: u32,
    /// Distinct colors in the final coloring (0 when the run failed).
    pub colors_used: usize,
    /// Total wall-clock time (seconds).
    pub wall_time: f64,
    /// Seed of the protocol run.
    pub seed: u64,
    /// Whether the run finished with a valid coloring.
    pub valid: bool,
}

impl BenchmarkMetrics {
    /// CSV header line.
    pub fn to_csv_header() -> String {
        "scenario,vertex_count,edge_count,max_degree,rounds,colors_used,wall_time_ms,seed,valid".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{:.4},{},{}",
            self.scenario,
            self.vertex_count,
            self.edge_count,
            self.max_degree,
            self.rounds,
            self.colors_used,
            self.wall_time * 1000.0,
            self.seed,
            self.valid,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
