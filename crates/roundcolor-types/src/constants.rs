//! Protocol constants and defaults.

/// Smallest color value a vertex can commit to.
pub const MIN_COLOR: u32 = 1;

/// Seed used by benchmarks and examples when none is supplied.
pub const DEFAULT_SEED: u64 = 0x5EED_C010;

/// Round cap applied by test and benchmark harnesses.
///
/// The protocol itself never caps rounds; harnesses use this
/// so a pathological run fails instead of hanging.
pub const HARNESS_ROUND_LIMIT: u32 = 10_000;

/// Number of colors available for a given degree bound (`max_degree + 1`).
#[inline]
pub fn palette_size(max_degree: u32) -> u32 {
    max_degree + 1
}
