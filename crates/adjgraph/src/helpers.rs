//! Convenience helpers for building and inspecting graphs.
//!
//! These reduce boilerplate for common operations like creating a graph from an
//! edge list or comparing renderings independent of vertex order.

use crate::config::GraphConfig;
use crate::error::Result;
use crate::graph::{AdjacencyListGraph, Graph, Vertex};
use log::debug;
use std::fmt::Display;

/// Create a fresh, empty graph with the default representation.
pub fn create_graph<V: Vertex>() -> AdjacencyListGraph<V> {
    AdjacencyListGraph::new()
}

/// Build a graph from `(from, to)` pairs using a custom capacity policy.
///
/// # Errors
///
/// Returns [`GraphError::InvalidConfig`](crate::GraphError::InvalidConfig) if
/// the config fails validation.
pub fn from_edges_with_config<V, I>(edges: I, config: GraphConfig) -> Result<AdjacencyListGraph<V>>
where
    V: Vertex,
    I: IntoIterator<Item = (V, V)>,
{
    let mut graph = AdjacencyListGraph::with_config(config)?;
    add_edges(&mut graph, edges);
    Ok(graph)
}

/// Add every vertex from `vertices` to `graph`.
///
/// Returns how many of them were new.
pub fn add_vertices<V, G, I>(graph: &mut G, vertices: I) -> usize
where
    V: Vertex,
    G: Graph<V> + ?Sized,
    I: IntoIterator<Item = V>,
{
    let before = graph.num_vertices();
    for vertex in vertices {
        graph.add_vertex(vertex);
    }
    let added = graph.num_vertices() - before;
    debug!("Added {added} new vertices");
    added
}

/// Add every `(from, to)` pair from `edges` to `graph`.
///
/// Returns how many of them were new edges.
pub fn add_edges<V, G, I>(graph: &mut G, edges: I) -> usize
where
    V: Vertex,
    G: Graph<V> + ?Sized,
    I: IntoIterator<Item = (V, V)>,
{
    let before = graph.num_edges();
    for (from, to) in edges {
        graph.add_edge(from, to);
    }
    let added = graph.num_edges() - before;
    debug!("Added {added} new edges");
    added
}

/// Render one `vertex: t1, t2` line per vertex, with the targets of each line
/// and the lines themselves sorted lexicographically.
///
/// Useful for comparing graphs whose vertex or edge insertion order differs.
/// Unlike `Display`, targets do not appear in insertion order.
pub fn sorted_lines<V, G>(graph: &G) -> Vec<String>
where
    V: Vertex + Display,
    G: Graph<V> + ?Sized,
{
    let mut lines: Vec<String> = graph
        .vertices()
        .map(|vertex| {
            let mut targets: Vec<String> =
                graph.adjacent_to(vertex).map(|t| t.to_string()).collect();
            targets.sort();
            if targets.is_empty() {
                format!("{vertex}:")
            } else {
                format!("{vertex}: {}", targets.join(", "))
            }
        })
        .collect();
    lines.sort();
    lines
}

/// Total out-degree over all vertices.
///
/// Always equals [`Graph::num_edges`] for a consistent graph.
pub fn total_degree<V, G>(graph: &G) -> usize
where
    V: Vertex,
    G: Graph<V> + ?Sized,
{
    graph
        .vertices()
        .map(|v| graph.adjacent_to(v).count())
        .sum()
}
