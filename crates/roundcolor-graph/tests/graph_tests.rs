//! Integration tests for roundcolor-graph.

use rand::rngs::StdRng;
use rand::SeedableRng;
use roundcolor_graph::generators::{complete, cycle, path, random_capped, star, sweep_case};
use roundcolor_graph::Graph;
use roundcolor_types::{ColoringError, VertexId};

// ─── Construction Tests ───────────────────────────────────────

#[test]
fn from_edges_symmetrizes() {
    let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    assert!(g.neighbors(VertexId(1)).contains(&0));
    assert!(g.neighbors(VertexId(0)).contains(&1));
    assert_eq!(g.degree(VertexId(1)), 2);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn from_edges_rejects_self_loop() {
    let err = Graph::from_edges(2, &[(1, 1)]).unwrap_err();
    assert!(matches!(err, ColoringError::InvalidGraph(_)));
}

#[test]
fn from_edges_rejects_out_of_range() {
    assert!(Graph::from_edges(2, &[(0, 5)]).is_err());
}

#[test]
fn from_adjacency_rejects_asymmetry() {
    let err = Graph::from_adjacency(vec![vec![1], vec![]]).unwrap_err();
    assert!(err.to_string().contains("Asymmetric"));
}

#[test]
fn from_adjacency_rejects_self_loop() {
    assert!(Graph::from_adjacency(vec![vec![0]]).is_err());
}

#[test]
fn zero_vertices_rejected() {
    assert!(Graph::empty(0).is_err());
    assert!(Graph::from_adjacency(Vec::new()).is_err());
}

#[test]
fn duplicate_neighbors_collapse() {
    let g = Graph::from_adjacency(vec![vec![1, 1], vec![0]]).unwrap();
    assert_eq!(g.degree(VertexId(0)), 1);
}

#[test]
fn isolated_vertex() {
    let g = Graph::empty(1).unwrap();
    assert_eq!(g.vertex_count(), 1);
    assert_eq!(g.max_degree(), 0);
    assert_eq!(g.edges().count(), 0);
}

#[test]
fn edges_listed_once() {
    let g = complete(4).unwrap();
    let edges: Vec<_> = g.edges().collect();
    assert_eq!(edges.len(), 6);
    assert!(edges.iter().all(|&(u, v)| u < v));
}

// ─── Serde Tests ──────────────────────────────────────────────

#[test]
fn graph_serializes_as_adjacency_lists() {
    let g = path(3).unwrap();
    let json = serde_json::to_string(&g).unwrap();
    assert_eq!(json, "[[1],[0,2],[1]]");
    let recovered: Graph = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, g);
}

#[test]
fn deserialization_validates() {
    let result: Result<Graph, _> = serde_json::from_str("[[1],[]]");
    assert!(result.is_err());
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn shapes_have_expected_degrees() {
    assert_eq!(complete(5).unwrap().max_degree(), 4);
    assert_eq!(path(4).unwrap().max_degree(), 2);
    assert_eq!(path(1).unwrap().edge_count(), 0);
    assert_eq!(cycle(6).unwrap().edge_count(), 6);
    assert_eq!(cycle(2).unwrap().edge_count(), 1);
    assert_eq!(star(6).unwrap().max_degree(), 5);
}

#[test]
fn random_capped_respects_cap() {
    let mut rng = StdRng::seed_from_u64(7);
    for cap in [1, 2, 5, 9] {
        let g = random_capped(&mut rng, 60, cap, 2_000).unwrap();
        assert!(g.max_degree() <= cap);
        assert!(g.validate().is_ok());
    }
}

#[test]
fn random_capped_single_vertex() {
    let mut rng = StdRng::seed_from_u64(1);
    let g = random_capped(&mut rng, 1, 3, 100).unwrap();
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn random_capped_is_reproducible() {
    let a = random_capped(&mut StdRng::seed_from_u64(99), 40, 4, 500).unwrap();
    let b = random_capped(&mut StdRng::seed_from_u64(99), 40, 4, 500).unwrap();
    assert_eq!(a, b);
}

#[test]
fn sweep_case_bounds() {
    let mut rng = StdRng::seed_from_u64(3);
    for step in [1u32, 11, 21] {
        let g = sweep_case(&mut rng, step).unwrap();
        assert!(g.max_degree() <= 2 * step + 1);
        let cap_max = 2 * step as usize + 2;
        assert!(g.vertex_count() <= cap_max * cap_max);
    }
}
