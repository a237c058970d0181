//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Vertex`]: The capability bound every vertex type must satisfy
//! - [`Graph`]: The public surface shared by graph representations
//! - [`AdjacencyRecord`]: Outgoing edges of one vertex
//! - [`AdjacencyListGraph`]: The adjacency-list graph store

mod adjacency;
mod adjacency_list;

pub use adjacency::AdjacencyRecord;
pub use adjacency_list::{AdjacencyListGraph, Edges, Vertices};

use crate::error::Result;
use std::fmt::Debug;
use std::hash::Hash;

/// Values usable as vertices.
///
/// Vertices are identified by value: two vertices are the same vertex iff they
/// compare equal (and therefore hash equally). `Debug` is used to name missing
/// vertices in errors.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Vertex for T {}

/// A directed graph over vertices of type `V`.
///
/// Missing vertices are not errors for queries: [`adjacent_to`](Graph::adjacent_to)
/// yields nothing and [`has_edge`](Graph::has_edge) returns `false`. Only
/// [`degree`](Graph::degree) reports a missing vertex.
pub trait Graph<V: Vertex> {
    /// Number of distinct vertices.
    fn num_vertices(&self) -> usize;

    /// Number of distinct directed edges.
    fn num_edges(&self) -> usize;

    /// Out-degree of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound)
    /// if `vertex` is not in the graph.
    fn degree(&self, vertex: &V) -> Result<usize>;

    /// Add a directed edge, inserting either endpoint if it is missing.
    ///
    /// Adding an existing edge does nothing.
    fn add_edge(&mut self, from: V, to: V);

    /// Add a vertex with no edges. Adding an existing vertex does nothing.
    fn add_vertex(&mut self, vertex: V);

    /// All vertices in the graph.
    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = &'a V> + 'a>
    where
        V: 'a;

    /// Targets of the edges leaving `from`, empty if `from` is absent.
    fn adjacent_to<'a>(&'a self, from: &V) -> Box<dyn Iterator<Item = &'a V> + 'a>
    where
        V: 'a;

    /// Whether `vertex` is in the graph.
    fn contains(&self, vertex: &V) -> bool;

    /// Whether the edge `(from, to)` is in the graph.
    fn has_edge(&self, from: &V, to: &V) -> bool;

    /// Hint that the graph will hold at least `min_capacity` vertices.
    fn ensure_capacity(&mut self, min_capacity: usize);

    /// Compare the shape of two graphs.
    ///
    /// Holds when both have the same vertex count and edge count and every
    /// vertex of `self` is in `other`. Individual edges are not compared; two
    /// graphs over the same vertices with the same number of differently wired
    /// edges are equal under this test.
    fn equals(&self, other: &dyn Graph<V>) -> bool {
        self.num_vertices() == other.num_vertices()
            && self.num_edges() == other.num_edges()
            && self.vertices().all(|v| other.contains(v))
    }

    /// Compare two graphs edge by edge.
    ///
    /// Stricter than [`equals`](Graph::equals): every edge of `self` must also
    /// be an edge of `other`. With equal edge counts that makes the edge sets
    /// identical.
    fn same_edges(&self, other: &dyn Graph<V>) -> bool {
        self.equals(other)
            && self
                .vertices()
                .all(|from| self.adjacent_to(from).all(|to| other.has_edge(from, to)))
    }
}
