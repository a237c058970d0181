//! # adjgraph
//!
//! A generic directed graph backed by insertion-ordered adjacency lists.
//!
//! ## Core Principles
//!
//! - **Value Identity**: Vertices are any `Eq + Hash + Clone + Debug` type, identified by value
//! - **Idempotent Inserts**: Adding an existing vertex or edge changes nothing
//! - **Forgiving Queries**: Missing vertices give empty results, only `degree` reports them
//! - **Deterministic Output**: Vertices and edges keep their insertion order
//!
//! ## Architecture
//!
//! ```text
//! Helpers / Export (convenience API, DOT, JSON)
//!     ↓
//! Graph trait (public surface, equality)
//!     ↓
//! AdjacencyListGraph (vertex index, edge count, capacity policy)
//!     ↓
//! AdjacencyRecord (one per vertex, ordered unique targets)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use adjgraph::AdjacencyListGraph;
//!
//! let mut graph = AdjacencyListGraph::new();
//! graph.add_edge("A", "B");
//! graph.add_edge("A", "B"); // duplicate, ignored
//! graph.add_vertex("C");
//!
//! assert_eq!(graph.num_vertices(), 3);
//! assert_eq!(graph.num_edges(), 1);
//! assert!(graph.has_edge(&"A", &"B"));
//! assert_eq!(graph.adjacent_to(&"missing").count(), 0);
//! assert!(graph.degree(&"missing").is_err());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod helpers;

// Re-export main types
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{AdjacencyListGraph, AdjacencyRecord, Edges, Graph, Vertex, Vertices};
