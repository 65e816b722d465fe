//! Palette store — per-vertex sets of still-admissible colors.
//!
//! Palettes start as the full `1..=max_degree + 1` range and only ever
//! lose values. Ordered sets keep sampling reproducible for a fixed seed.

use std::collections::BTreeSet;

use rand::Rng;
use roundcolor_types::constants::MIN_COLOR;
use roundcolor_types::{Color, ColoringError, ColoringResult, VertexId};

/// Arena of palettes indexed by vertex id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteStore {
    palettes: Vec<BTreeSet<Color>>,
}

impl PaletteStore {
    /// Gives every one of `vertex_count` vertices the full `1..=max_degree + 1` palette.
    pub fn initialize(vertex_count: usize, max_degree: u32) -> Self {
        let full: BTreeSet<Color> = (MIN_COLOR..=max_degree + 1).collect();
        Self {
            palettes: vec![full; vertex_count],
        }
    }

    /// Removes `value` from the palette of `vertex`.
    ///
    /// Returns `true` if the value was present. Absent values are a no-op.
    #[inline]
    pub fn exclude(&mut self, vertex: VertexId, value: Color) -> bool {
        self.palettes[vertex.index()].remove(&value)
    }

    /// Draws one color uniformly at random from the current palette of `vertex`.
    ///
    /// Fails with [`ColoringError::EmptyPalette`] when nothing is left.
    pub fn sample<R: Rng + ?Sized>(&self, vertex: VertexId, rng: &mut R) -> ColoringResult<Color> {
        let palette = &self.palettes[vertex.index()];
        if palette.is_empty() {
            return Err(ColoringError::EmptyPalette { vertex });
        }
        let pick = rng.gen_range(0..palette.len());
        palette
            .iter()
            .nth(pick)
            .copied()
            .ok_or(ColoringError::EmptyPalette { vertex })
    }

    /// Returns the current palette of `vertex`.
    #[inline]
    pub fn get(&self, vertex: VertexId) -> &BTreeSet<Color> {
        &self.palettes[vertex.index()]
    }

    /// Returns the number of colors left for `vertex`.
    #[inline]
    pub fn len(&self, vertex: VertexId) -> usize {
        self.palettes[vertex.index()].len()
    }

    /// Returns true if `vertex` has no colors left.
    #[inline]
    pub fn is_empty(&self, vertex: VertexId) -> bool {
        self.palettes[vertex.index()].is_empty()
    }

    /// Returns true if `value` is still admissible for `vertex`.
    #[inline]
    pub fn contains(&self, vertex: VertexId, value: Color) -> bool {
        self.palettes[vertex.index()].contains(&value)
    }

    /// Returns every palette size, indexed by vertex.
    pub fn sizes(&self) -> Vec<usize> {
        self.palettes.iter().map(BTreeSet::len).collect()
    }

    /// Returns the number of vertices tracked.
    pub fn vertex_count(&self) -> usize {
        self.palettes.len()
    }
}
