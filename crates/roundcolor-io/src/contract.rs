//! Coloring input/output contract types.
//!
//! These types define the I/O boundary of the protocol. They are
//! serializable as JSON for files and CLI use.

use serde::{Deserialize, Serialize};
use roundcolor_graph::Graph;
use roundcolor_protocol::{ColoringOutcome, ProtocolConfig};
use roundcolor_types::{Color, ColoringError, ColoringResult};

/// Everything needed to run the protocol on one graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColoringInput {
    /// Neighbor lists indexed by vertex; validated on load.
    pub graph: Graph,

    /// Degree bound for the palettes. `None` uses the graph's true
    /// maximum degree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_degree: Option<u32>,

    /// Protocol configuration. `None` uses the defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ProtocolConfig>,
}

impl ColoringInput {
    /// Wraps a graph with default settings.
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            max_degree: None,
            config: None,
        }
    }

    /// Degree bound the run will use.
    pub fn effective_max_degree(&self) -> u32 {
        self.max_degree.unwrap_or_else(|| self.graph.max_degree())
    }

    /// Parses an input from JSON text.
    pub fn from_json(text: &str) -> ColoringResult<Self> {
        serde_json::from_str(text).map_err(|e| ColoringError::Serialization(e.to_string()))
    }

    /// Renders the input as pretty JSON.
    pub fn to_json(&self) -> ColoringResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ColoringError::Serialization(e.to_string()))
    }
}

/// Result of a finished run, as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringOutput {
    /// Committed color per vertex.
    pub coloring: Vec<Color>,
    /// Rounds the protocol took.
    pub rounds: u32,
    /// Number of distinct colors used.
    pub colors_used: usize,
    /// Degree bound the palettes were sized for.
    pub max_degree: u32,
    /// Seed that reproduces this run.
    pub seed: u64,
}

impl ColoringOutput {
    /// Builds the output record for a finished run.
    pub fn from_outcome(outcome: &ColoringOutcome, max_degree: u32) -> Self {
        Self {
            coloring: outcome.colors.clone(),
            rounds: outcome.rounds,
            colors_used: outcome.colors_used(),
            max_degree,
            seed: outcome.seed,
        }
    }

    /// Renders the output as pretty JSON.
    pub fn to_json(&self) -> ColoringResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ColoringError::Serialization(e.to_string()))
    }

    /// Parses an output from JSON text.
    pub fn from_json(text: &str) -> ColoringResult<Self> {
        serde_json::from_str(text).map_err(|e| ColoringError::Serialization(e.to_string()))
    }
}
