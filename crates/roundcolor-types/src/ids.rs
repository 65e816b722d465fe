//! Strongly-typed identifiers for graph entities.
//!
//! Vertices are addressed by their position in `[0, V)`; colors are plain
//! integers where `0` means "not yet committed".

use serde::{Deserialize, Serialize};

/// A color value. `UNCOMMITTED` (0) marks a vertex without a final color,
/// committed colors live in `1..=max_degree + 1`.
pub type Color = u32;

/// Marker stored in the committed array for vertices without a color.
pub const UNCOMMITTED: Color = 0;

/// Index of a vertex in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for VertexId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}
