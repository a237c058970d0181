//! Per-vertex adjacency record.

use super::Vertex;
use std::collections::HashSet;
use std::fmt;

/// Outgoing edges of a single vertex.
///
/// Targets keep their insertion order and never repeat. The record is owned by
/// the graph it belongs to; callers only ever see it through `&`.
#[derive(Debug, Clone)]
pub struct AdjacencyRecord<V> {
    source: V,
    targets: Vec<V>,
    // Mirrors `targets` for O(1) duplicate checks
    lookup: HashSet<V>,
}

impl<V: Vertex> AdjacencyRecord<V> {
    /// Create an empty record for `source`.
    pub fn new(source: V) -> Self {
        Self {
            source,
            targets: Vec::new(),
            lookup: HashSet::new(),
        }
    }

    /// The vertex this record describes.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Append an edge to `target` unless one already exists.
    ///
    /// Returns `true` if the edge was added.
    pub fn add_edge(&mut self, target: V) -> bool {
        if self.lookup.contains(&target) {
            return false;
        }
        self.lookup.insert(target.clone());
        self.targets.push(target);
        true
    }

    /// Whether an edge to `target` exists.
    pub fn has_edge(&self, target: &V) -> bool {
        self.lookup.contains(target)
    }

    /// Same test as [`has_edge`](Self::has_edge), phrased from the target's side.
    pub fn is_adjacent(&self, target: &V) -> bool {
        self.has_edge(target)
    }

    /// Edge targets in insertion order.
    pub fn edges(&self) -> std::slice::Iter<'_, V> {
        self.targets.iter()
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.targets.len()
    }
}

impl<V: fmt::Display> fmt::Display for AdjacencyRecord<V> {
    /// Renders as `source: t1, t2`, or `source:` when there are no targets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.source)?;
        for (i, target) in self.targets.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{target}")?;
        }
        Ok(())
    }
}
