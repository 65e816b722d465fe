//! Procedural graph generators for benchmarks and testing.
//!
//! The deterministic shapes have known maximum degrees; the random
//! generator samples edges under a per-vertex degree cap, producing
//! inputs that satisfy the protocol's preconditions by construction.

use rand::Rng;
use roundcolor_types::ColoringResult;

use crate::graph::Graph;

/// Complete graph `K_n` (max degree `n - 1`).
///
/// # Example
/// ```
/// use roundcolor_graph::generators::complete;
/// let g = complete(3).unwrap();
/// assert_eq!(g.edge_count(), 3);
/// assert_eq!(g.max_degree(), 2);
/// ```
pub fn complete(n: usize) -> ColoringResult<Graph> {
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for u in 0..n as u32 {
        for v in (u + 1)..n as u32 {
            edges.push((u, v));
        }
    }
    Graph::from_edges(n, &edges)
}

/// Path `0 - 1 - ... - (n-1)` (max degree 2 for `n >= 3`).
pub fn path(n: usize) -> ColoringResult<Graph> {
    let edges: Vec<(u32, u32)> = (1..n as u32).map(|v| (v - 1, v)).collect();
    Graph::from_edges(n, &edges)
}

/// Cycle on `n` vertices. Falls back to a path for `n < 3`.
pub fn cycle(n: usize) -> ColoringResult<Graph> {
    if n < 3 {
        return path(n);
    }
    let mut edges: Vec<(u32, u32)> = (1..n as u32).map(|v| (v - 1, v)).collect();
    edges.push((n as u32 - 1, 0));
    Graph::from_edges(n, &edges)
}

/// Star with vertex 0 at the hub and `n - 1` leaves.
pub fn star(n: usize) -> ColoringResult<Graph> {
    let edges: Vec<(u32, u32)> = (1..n as u32).map(|v| (0, v)).collect();
    Graph::from_edges(n, &edges)
}

/// Random graph with every vertex degree at most `degree_cap`.
///
/// Makes `attempts` draws of an endpoint pair. A draw is skipped when both
/// endpoints coincide, the edge already exists, or either endpoint has
/// reached the cap.
pub fn random_capped<R: Rng>(
    rng: &mut R,
    vertex_count: usize,
    degree_cap: u32,
    attempts: usize,
) -> ColoringResult<Graph> {
    let mut edges = Vec::new();
    let mut present = std::collections::HashSet::new();
    let mut degree = vec![0u32; vertex_count];

    if vertex_count > 1 {
        for _ in 0..attempts {
            let v = rng.gen_range(0..vertex_count as u32);
            let u = rng.gen_range(0..vertex_count as u32);
            if u == v {
                continue;
            }
            let key = (u.min(v), u.max(v));
            if present.contains(&key)
                || degree[u as usize] >= degree_cap
                || degree[v as usize] >= degree_cap
            {
                continue;
            }
            present.insert(key);
            edges.push(key);
            degree[u as usize] += 1;
            degree[v as usize] += 1;
        }
    }

    Graph::from_edges(vertex_count, &edges)
}

/// One case of the growing random sweep, parameterized by `step`.
///
/// The degree cap is drawn from `[step, 2 * step + 1]`, the vertex count
/// from `[cap + 1, (cap + 1)^2]`, and `(step + 1)^3` edge draws are made.
pub fn sweep_case<R: Rng>(rng: &mut R, step: u32) -> ColoringResult<Graph> {
    let cap = rng.gen_range(step..=2 * step + 1);
    let lo = cap as usize + 1;
    let vertex_count = rng.gen_range(lo..=lo * lo);
    let attempts = (step as usize + 1).pow(3);
    random_capped(rng, vertex_count, cap, attempts)
}
