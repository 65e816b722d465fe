//! Protocol configuration.
//!
//! Parameters that control a coloring run: the random seed, which value a
//! vertex broadcasts to its neighbors, and an optional round cap for
//! harnesses that must not hang.

use serde::{Deserialize, Serialize};
use roundcolor_types::{ColoringError, ColoringResult};

/// What a vertex removes from its neighbors' palettes during the broadcast phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadcastPolicy {
    /// Every round, every vertex removes its own *index* from each
    /// neighbor's palette, committed or not. Reproduces the reference
    /// behavior of the protocol.
    #[default]
    VertexIndex,

    /// Every round, every committed vertex removes its *committed color*
    /// from each neighbor's palette. This is the textbook protocol.
    CommittedColor,
}

impl BroadcastPolicy {
    /// Returns a short name for logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            BroadcastPolicy::VertexIndex => "vertex_index",
            BroadcastPolicy::CommittedColor => "committed_color",
        }
    }
}

/// Configuration for one coloring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolConfig {
    /// Seed for the run's random source. `None` draws a fresh seed
    /// from OS entropy; the seed actually used is reported in the outcome.
    pub seed: Option<u64>,

    /// Broadcast semantics.
    pub broadcast: BroadcastPolicy,

    /// Abort with `RoundLimitExceeded` after this many rounds.
    /// `None` runs until every vertex commits.
    pub round_limit: Option<u32>,

    /// Reject a `max_degree` below the graph's true maximum degree
    /// before the first round. When disabled the bound is trusted and an
    /// understated degree shows up as an exhausted palette.
    pub check_degree: bool,

    /// Emit a progress line every N rounds (0 = off).
    pub progress_every: u32,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            seed: None,
            broadcast: BroadcastPolicy::VertexIndex,
            round_limit: None,
            check_degree: true,
            progress_every: 0,
        }
    }
}

impl ProtocolConfig {
    /// Creates a reproducible config with the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Creates a config running the committed-color broadcast.
    pub fn corrected() -> Self {
        Self {
            broadcast: BroadcastPolicy::CommittedColor,
            ..Default::default()
        }
    }

    /// Returns a copy with a harness round cap.
    pub fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = Some(limit);
        self
    }

    /// Returns a copy using the given broadcast policy.
    pub fn with_broadcast(mut self, broadcast: BroadcastPolicy) -> Self {
        self.broadcast = broadcast;
        self
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> ColoringResult<()> {
        if self.round_limit == Some(0) {
            return Err(ColoringError::InvalidConfig(
                "round_limit must be >= 1 when set".into(),
            ));
        }
        Ok(())
    }
}
