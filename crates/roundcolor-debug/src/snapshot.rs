//! Run snapshot serialization for replay and debugging.

use serde::{Deserialize, Serialize};
use roundcolor_protocol::PaletteStore;
use roundcolor_types::{Color, ColoringError, ColoringResult, UNCOMMITTED};

/// Executor state at the end of one round.
///
/// Serialized with `bincode` for compact binary output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSnapshot {
    /// Round after which this snapshot was taken.
    pub round: u32,
    /// Committed color per vertex (`0` = uncommitted).
    pub committed: Vec<Color>,
    /// Palette size per vertex.
    pub palette_sizes: Vec<usize>,
}

impl RunSnapshot {
    /// Captures the committed array and palette sizes.
    pub fn capture(round: u32, committed: &[Color], palettes: &PaletteStore) -> Self {
        Self {
            round,
            committed: committed.to_vec(),
            palette_sizes: palettes.sizes(),
        }
    }

    /// Number of vertices in the snapshot.
    pub fn vertex_count(&self) -> usize {
        self.committed.len()
    }

    /// Number of vertices still uncommitted.
    pub fn uncommitted(&self) -> usize {
        self.committed.iter().filter(|&&c| c == UNCOMMITTED).count()
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> ColoringResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| ColoringError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> ColoringResult<Self> {
        bincode::deserialize(data)
            .map_err(|e| ColoringError::Serialization(format!("Snapshot deserialization failed: {e}")))
    }
}

/// Ordered sequence of snapshots from one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTrace {
    /// Seed of the run, when it finished.
    pub seed: Option<u64>,
    /// One snapshot per completed round.
    pub snapshots: Vec<RunSnapshot>,
}

impl RunTrace {
    /// Serializes the whole trace.
    pub fn to_bytes(&self) -> ColoringResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| ColoringError::Serialization(e.to_string()))
    }

    /// Deserializes a trace.
    pub fn from_bytes(data: &[u8]) -> ColoringResult<Self> {
        bincode::deserialize(data)
            .map_err(|e| ColoringError::Serialization(format!("Trace deserialization failed: {e}")))
    }

    /// Returns the first round in which a committed color changed, if any.
    pub fn first_recoloring(&self) -> Option<u32> {
        self.snapshots.windows(2).find_map(|pair| {
            pair[0]
                .committed
                .iter()
                .zip(&pair[1].committed)
                .any(|(&a, &b)| a != UNCOMMITTED && a != b)
                .then_some(pair[1].round)
        })
    }

    /// Returns the first round in which some palette grew, if any.
    pub fn first_palette_growth(&self) -> Option<u32> {
        self.snapshots.windows(2).find_map(|pair| {
            pair[0]
                .palette_sizes
                .iter()
                .zip(&pair[1].palette_sizes)
                .any(|(a, b)| b > a)
                .then_some(pair[1].round)
        })
    }
}
