//! JSON format export.
//!
//! Generates JSON with a `vertices` array and an `edges` array of
//! `{"source", "target"}` objects, both in vertex order.

use super::check_export_size;
use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyListGraph, Vertex};
use log::debug;
use serde::Serialize;
use serde_json::{json, Value};

/// Export graph to JSON
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if a vertex cannot be serialized.
pub fn export_json<V>(graph: &AdjacencyListGraph<V>) -> Result<String>
where
    V: Vertex + Serialize,
{
    export_json_filtered(graph, |_| true)
}

/// Export the subgraph induced by the vertices accepted by `vertex_filter`
///
/// Only edges whose endpoints are both accepted are included.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if a vertex cannot be serialized.
pub fn export_json_filtered<V>(
    graph: &AdjacencyListGraph<V>,
    vertex_filter: impl Fn(&V) -> bool,
) -> Result<String>
where
    V: Vertex + Serialize,
{
    check_export_size(graph.num_vertices());

    let mut vertices_array = Vec::new();
    for vertex in graph.vertices().filter(|v| vertex_filter(v)) {
        vertices_array.push(to_value(vertex)?);
    }

    let mut edges_array = Vec::new();
    for (from, to) in graph.edges() {
        if vertex_filter(from) && vertex_filter(to) {
            edges_array.push(json!({
                "source": to_value(from)?,
                "target": to_value(to)?,
            }));
        }
    }

    debug!(
        "Exporting {} vertices and {} edges as JSON",
        vertices_array.len(),
        edges_array.len()
    );

    let result = json!({
        "vertices": vertices_array,
        "edges": edges_array,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}

/// Convert a vertex to a JSON value
fn to_value<V: Serialize>(vertex: &V) -> Result<Value> {
    serde_json::to_value(vertex)
        .map_err(|e| GraphError::serialization("Failed to serialize vertex", Some(e)))
}
