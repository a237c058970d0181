//! DOT format export for Graphviz visualization.
//!
//! Generates Graphviz DOT format for rendering graphs as images or interactive visualizations.

use super::check_export_size;
use crate::graph::{AdjacencyListGraph, Vertex};
use log::debug;
use std::fmt::Display;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Name emitted after the `digraph` keyword
    pub graph_name: String,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Shape used for every vertex (box, circle, ellipse, etc.)
    pub node_shape: String,
    /// Fill color for vertices (hex color code)
    pub fill_color: Option<String>,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            graph_name: "adjgraph".to_string(),
            rankdir: "LR".to_string(),
            node_shape: "ellipse".to_string(),
            fill_color: None,
        }
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot<V: Vertex + Display>(graph: &AdjacencyListGraph<V>) -> String {
    export_dot_styled(graph, &DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
///
/// Vertices are emitted as `n<slot>` in vertex order and labelled with their
/// `Display` rendering.
pub fn export_dot_styled<V: Vertex + Display>(
    graph: &AdjacencyListGraph<V>,
    options: &DotOptions,
) -> String {
    check_export_size(graph.num_vertices());
    debug!(
        "Exporting {} vertices and {} edges as DOT",
        graph.num_vertices(),
        graph.num_edges()
    );

    let mut output = String::new();

    // Header
    output.push_str(&format!("digraph {} {{\n", escape_dot_id(&options.graph_name)));
    output.push_str(&format!("    rankdir={};\n", escape_dot_id(&options.rankdir)));
    let shape = escape_dot_id(&options.node_shape);
    match &options.fill_color {
        Some(color) => output.push_str(&format!(
            "    node [shape={shape}, style=filled, fillcolor=\"{}\"];\n",
            escape_dot_label(color)
        )),
        None => output.push_str(&format!("    node [shape={shape}];\n")),
    }
    output.push('\n');

    for (slot, vertex) in graph.vertices().enumerate() {
        let label = escape_dot_label(&vertex.to_string());
        output.push_str(&format!("    n{slot} [label=\"{label}\"];\n"));
    }

    output.push('\n');

    for (from, to) in graph.edges() {
        // Both endpoints of a stored edge always have a slot
        if let (Some(source), Some(target)) = (graph.index_of(from), graph.index_of(to)) {
            output.push_str(&format!("    n{source} -> n{target};\n"));
        }
    }

    output.push_str("}\n");
    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Quote a DOT id (graph name, attribute value) unless it is a plain identifier
fn escape_dot_id(s: &str) -> String {
    let plain = !s.is_empty()
        && !s.starts_with(|c: char| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        s.to_string()
    } else {
        format!("\"{}\"", escape_dot_label(s))
    }
}
