//! Adjacency-list graph store.

use super::adjacency::AdjacencyRecord;
use super::{Graph, Vertex};
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::fmt;

/// A directed graph storing one [`AdjacencyRecord`] per vertex.
///
/// Vertices are kept in insertion order, so iteration and rendering are
/// deterministic. Each vertex value is mapped to the slot of its record, and
/// every record keeps its own targets in insertion order.
///
/// # Example
///
/// ```
/// use adjgraph::AdjacencyListGraph;
///
/// let mut graph = AdjacencyListGraph::new();
/// graph.add_edge("A", "A");
/// graph.add_edge("A", "B");
/// graph.add_edge("C", "A");
/// graph.add_edge("C", "B");
///
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 4);
/// assert_eq!(graph.to_string(), "A: A, B\nB:\nC: A, B");
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<V> {
    records: Vec<AdjacencyRecord<V>>,
    // Vertex value -> slot in `records`
    index: HashMap<V, usize>,
    edge_count: usize,
    capacity: usize,
    config: GraphConfig,
}

impl<V: Vertex> AdjacencyListGraph<V> {
    /// Create an empty graph with the default capacity policy.
    pub fn new() -> Self {
        Self::from_valid_config(GraphConfig::default())
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_valid_config(GraphConfig::large(capacity))
    }

    /// Create an empty graph using a custom capacity policy.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if the config fails validation.
    pub fn with_config(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GraphConfig) -> Self {
        let mut graph = Self {
            records: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
            capacity: 0,
            config,
        };
        graph.ensure_capacity(config.initial_capacity);
        graph
    }

    /// The capacity policy this graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of vertices the graph is currently sized for.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the total number of vertices in the graph.
    pub fn num_vertices(&self) -> usize {
        self.records.len()
    }

    /// Get the total number of edges in the graph.
    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Out-degree of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `vertex` is not in the graph.
    pub fn degree(&self, vertex: &V) -> Result<usize> {
        self.record(vertex)
            .map(AdjacencyRecord::degree)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    /// Add a vertex with no edges. Does nothing if it is already present.
    pub fn add_vertex(&mut self, vertex: V) {
        self.insert_vertex(vertex);
    }

    /// Add the directed edge `(from, to)`.
    ///
    /// Missing endpoints are added first. Adding an edge that already exists
    /// changes nothing. Self-loops count as a single edge.
    pub fn add_edge(&mut self, from: V, to: V) {
        let from_idx = self.insert_vertex(from);
        self.insert_vertex(to.clone());

        let record = &mut self.records[from_idx];
        if record.has_edge(&to) {
            return;
        }
        trace!("Adding edge {:?} -> {:?}", record.source(), to);
        record.add_edge(to);
        self.edge_count += 1;
    }

    /// Iterate over all vertices in insertion order.
    pub fn vertices(&self) -> Vertices<'_, V> {
        Vertices {
            inner: self.records.iter(),
        }
    }

    /// Iterate over the targets of edges leaving `from`, in insertion order.
    ///
    /// Yields nothing if `from` is not in the graph.
    pub fn adjacent_to(&self, from: &V) -> std::slice::Iter<'_, V> {
        match self.record(from) {
            Some(record) => record.edges(),
            None => <&[V]>::default().iter(),
        }
    }

    /// Iterate over every edge as a `(from, to)` pair.
    ///
    /// Edges are grouped by source in vertex order, then in target order.
    pub fn edges(&self) -> Edges<'_, V> {
        Edges {
            records: self.records.iter(),
            current: None,
        }
    }

    /// Whether `vertex` is in the graph.
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Whether the edge `(from, to)` is in the graph.
    ///
    /// Returns `false` if either endpoint is missing.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        // A stored target always has a record; checking it keeps the
        // "both endpoints present" rule explicit.
        self.contains(to) && self.record(from).is_some_and(|r| r.has_edge(to))
    }

    /// Read-only view of a vertex's adjacency record.
    pub fn record(&self, vertex: &V) -> Option<&AdjacencyRecord<V>> {
        self.index.get(vertex).map(|&idx| &self.records[idx])
    }

    /// Make room for at least `min_capacity` vertices.
    ///
    /// This only affects allocation. When growth is needed the capacity jumps
    /// to `capacity * growth_factor`, or straight to `min_capacity` if that is
    /// larger. Requests the allocator cannot satisfy are ignored.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        let grown = self.config.grown_capacity(self.capacity, min_capacity);
        if grown == self.capacity {
            return;
        }

        let additional = grown.saturating_sub(self.records.len());
        if let Err(e) = self.records.try_reserve(additional) {
            warn!("Could not reserve {additional} vertex slots: {e}");
            return;
        }
        if let Err(e) = self.index.try_reserve(additional) {
            warn!("Could not reserve {additional} index entries: {e}");
            return;
        }

        debug!("Vertex capacity grown: {} -> {grown}", self.capacity);
        self.capacity = grown;
    }

    /// Slot of `vertex` in vertex order.
    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    fn insert_vertex(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }

        self.ensure_capacity(self.records.len() + 1);
        let idx = self.records.len();
        trace!("Adding vertex {vertex:?} at slot {idx}");
        self.index.insert(vertex.clone(), idx);
        self.records.push(AdjacencyRecord::new(vertex));
        idx
    }
}

impl<V: Vertex> Default for AdjacencyListGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> for AdjacencyListGraph<V> {
    fn num_vertices(&self) -> usize {
        AdjacencyListGraph::num_vertices(self)
    }

    fn num_edges(&self) -> usize {
        AdjacencyListGraph::num_edges(self)
    }

    fn degree(&self, vertex: &V) -> Result<usize> {
        AdjacencyListGraph::degree(self, vertex)
    }

    fn add_edge(&mut self, from: V, to: V) {
        AdjacencyListGraph::add_edge(self, from, to)
    }

    fn add_vertex(&mut self, vertex: V) {
        AdjacencyListGraph::add_vertex(self, vertex)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = &'a V> + 'a>
    where
        V: 'a,
    {
        Box::new(AdjacencyListGraph::vertices(self))
    }

    fn adjacent_to<'a>(&'a self, from: &V) -> Box<dyn Iterator<Item = &'a V> + 'a>
    where
        V: 'a,
    {
        Box::new(AdjacencyListGraph::adjacent_to(self, from))
    }

    fn contains(&self, vertex: &V) -> bool {
        AdjacencyListGraph::contains(self, vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        AdjacencyListGraph::has_edge(self, from, to)
    }

    fn ensure_capacity(&mut self, min_capacity: usize) {
        AdjacencyListGraph::ensure_capacity(self, min_capacity)
    }
}

/// `==` is shape equality, see [`Graph::equals`].
///
/// It does not compare individual edges: two graphs over the same vertices
/// with the same edge count but different wiring are `==`. Use
/// [`Graph::same_edges`] to compare edge sets.
impl<V: Vertex> PartialEq for AdjacencyListGraph<V> {
    /// Shape equality, see [`Graph::equals`].
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<V: Vertex> Eq for AdjacencyListGraph<V> {}

impl<V: fmt::Display> fmt::Display for AdjacencyListGraph<V> {
    /// One `vertex: t1, t2` line per vertex, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

impl<V: Vertex> FromIterator<(V, V)> for AdjacencyListGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<V: Vertex> Extend<(V, V)> for AdjacencyListGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}

/// Iterator over the vertices of an [`AdjacencyListGraph`].
#[derive(Debug, Clone)]
pub struct Vertices<'a, V> {
    inner: std::slice::Iter<'a, AdjacencyRecord<V>>,
}

impl<'a, V: Vertex> Iterator for Vertices<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(AdjacencyRecord::source)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V: Vertex> ExactSizeIterator for Vertices<'_, V> {}

/// Iterator over the edges of an [`AdjacencyListGraph`].
#[derive(Debug, Clone)]
pub struct Edges<'a, V> {
    records: std::slice::Iter<'a, AdjacencyRecord<V>>,
    current: Option<(&'a V, std::slice::Iter<'a, V>)>,
}

impl<'a, V: Vertex> Iterator for Edges<'a, V> {
    type Item = (&'a V, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((source, targets)) = &mut self.current {
                if let Some(target) = targets.next() {
                    return Some((*source, target));
                }
            }
            let record = self.records.next()?;
            self.current = Some((record.source(), record.edges()));
        }
    }
}
