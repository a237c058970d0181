//! Integration test for large graph handling (100K vertices, 500K edges).

use adjgraph::{helpers, AdjacencyListGraph};

#[test]
#[ignore] // This test is slow, run with --ignored flag
fn test_large_graph_100k_vertices_500k_edges() {
    let num_vertices = 100_000u32;
    let edges_per_vertex = 5u32;

    let mut graph = AdjacencyListGraph::new();
    for i in 0..num_vertices {
        for j in 1..=edges_per_vertex {
            graph.add_edge(i, (i + j) % num_vertices);
        }
    }

    assert_eq!(graph.num_vertices(), num_vertices as usize);
    assert_eq!(graph.num_edges(), (num_vertices * edges_per_vertex) as usize);
    assert_eq!(helpers::total_degree(&graph), graph.num_edges());
    assert!(graph.capacity() >= graph.num_vertices());

    // Random access
    let mid = num_vertices / 2;
    assert_eq!(graph.degree(&mid).unwrap(), edges_per_vertex as usize);
    assert!(graph.has_edge(&mid, &(mid + 1)));
}

#[test]
fn test_medium_graph_with_duplicates() {
    let mut graph = AdjacencyListGraph::new();

    // Every edge inserted twice
    for _ in 0..2 {
        for i in 0..1_000u32 {
            graph.add_edge(i, (i * 7) % 1_000);
            graph.add_edge(i, (i + 1) % 1_000);
        }
    }

    assert_eq!(graph.num_vertices(), 1_000);
    assert_eq!(helpers::total_degree(&graph), graph.num_edges());
    for v in graph.vertices() {
        assert!(graph.degree(v).unwrap() <= 2);
    }
}
