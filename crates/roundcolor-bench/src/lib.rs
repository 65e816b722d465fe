//! # roundcolor-bench
//!
//! Benchmark suite for the round protocol.
//!
//! Provides the canonical small scenarios plus a randomized sweep of
//! growing degree-capped graphs, metric collection, and CSV export for
//! regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
