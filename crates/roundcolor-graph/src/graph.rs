//! Core graph type with arena-style adjacency.
//!
//! Adjacency is stored as one ordered neighbor set per vertex, indexed by
//! vertex id. Ordered sets keep iteration order stable so that a seeded
//! protocol run is reproducible bit for bit.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use roundcolor_types::{ColoringError, ColoringResult, VertexId};

/// An undirected, loop-free graph over vertices `0..vertex_count`.
///
/// Invariants (checked by every constructor):
/// - at least one vertex
/// - no self-loops
/// - `u ∈ adjacency[v] ⟺ v ∈ adjacency[u]`
/// - every neighbor index is `< vertex_count`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Graph {
    adjacency: Vec<BTreeSet<u32>>,
}

impl Graph {
    /// Builds a graph from per-vertex neighbor lists.
    ///
    /// The lists must already be symmetric; asymmetric input is rejected
    /// rather than repaired. Duplicate entries within one list collapse.
    pub fn from_adjacency(adjacency: Vec<Vec<u32>>) -> ColoringResult<Self> {
        let graph = Self {
            adjacency: adjacency
                .into_iter()
                .map(|neighbors| neighbors.into_iter().collect())
                .collect(),
        };
        graph.validate()?;
        Ok(graph)
    }

    /// Builds a graph from an undirected edge list.
    ///
    /// Each `(u, v)` pair is inserted in both directions. Self-loops and
    /// out-of-range endpoints are rejected.
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32)]) -> ColoringResult<Self> {
        let mut adjacency = vec![BTreeSet::new(); vertex_count];
        for &(u, v) in edges {
            if u == v {
                return Err(ColoringError::InvalidGraph(format!(
                    "Self-loop at vertex {u}"
                )));
            }
            if u as usize >= vertex_count || v as usize >= vertex_count {
                return Err(ColoringError::InvalidGraph(format!(
                    "Edge ({u}, {v}) is out of range (vertex count: {vertex_count})"
                )));
            }
            adjacency[u as usize].insert(v);
            adjacency[v as usize].insert(u);
        }
        let graph = Self { adjacency };
        graph.validate()?;
        Ok(graph)
    }

    /// Builds a graph with `vertex_count` isolated vertices.
    pub fn empty(vertex_count: usize) -> ColoringResult<Self> {
        Self::from_edges(vertex_count, &[])
    }

    /// Checks the structural invariants.
    pub fn validate(&self) -> ColoringResult<()> {
        let n = self.adjacency.len();
        if n == 0 {
            return Err(ColoringError::InvalidGraph(
                "Graph must have at least one vertex".into(),
            ));
        }
        if n > u32::MAX as usize {
            return Err(ColoringError::InvalidGraph(format!(
                "Vertex count {n} does not fit a 32-bit vertex id"
            )));
        }

        for (v, neighbors) in self.adjacency.iter().enumerate() {
            for &u in neighbors {
                if u as usize >= n {
                    return Err(ColoringError::InvalidGraph(format!(
                        "Neighbor {u} of vertex {v} is out of range (vertex count: {n})"
                    )));
                }
                if u as usize == v {
                    return Err(ColoringError::InvalidGraph(format!(
                        "Self-loop at vertex {v}"
                    )));
                }
                if !self.adjacency[u as usize].contains(&(v as u32)) {
                    return Err(ColoringError::InvalidGraph(format!(
                        "Asymmetric adjacency: {u} is a neighbor of {v} but not vice versa"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the neighbor set of vertex `v`.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &BTreeSet<u32> {
        &self.adjacency[v.index()]
    }

    /// Returns the degree of vertex `v`.
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency[v.index()].len()
    }

    /// Returns the largest vertex degree (0 for an edgeless graph).
    pub fn max_degree(&self) -> u32 {
        self.adjacency
            .iter()
            .map(|neighbors| neighbors.len() as u32)
            .max()
            .unwrap_or(0)
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Iterates every undirected edge once as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(v, neighbors)| {
            let v = v as u32;
            neighbors
                .iter()
                .filter(move |&&u| v < u)
                .map(move |&u| (v, u))
        })
    }

    /// Iterates all vertex ids in index order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.adjacency.len() as u32).map(VertexId)
    }

    /// Returns the raw adjacency, indexed by vertex.
    pub fn adjacency(&self) -> &[BTreeSet<u32>] {
        &self.adjacency
    }
}

impl TryFrom<Vec<Vec<u32>>> for Graph {
    type Error = ColoringError;

    fn try_from(adjacency: Vec<Vec<u32>>) -> ColoringResult<Self> {
        Self::from_adjacency(adjacency)
    }
}

impl From<Graph> for Vec<Vec<u32>> {
    fn from(graph: Graph) -> Self {
        graph
            .adjacency
            .into_iter()
            .map(|neighbors| neighbors.into_iter().collect())
            .collect()
    }
}
