//! Unit tests for graph equality (shape equality and strict edge comparison).

use adjgraph::{AdjacencyListGraph, Graph};

fn from_edges(edges: &[(&'static str, &'static str)]) -> AdjacencyListGraph<&'static str> {
    edges.iter().copied().collect()
}

#[test]
fn test_empty_graphs_are_equal() {
    let a: AdjacencyListGraph<u32> = AdjacencyListGraph::new();
    let b: AdjacencyListGraph<u32> = AdjacencyListGraph::new();

    assert!(a.equals(&b));
    assert_eq!(a, b);
}

#[test]
fn test_same_edges_different_order_are_equal() {
    let a = from_edges(&[("A", "A"), ("A", "B"), ("C", "A"), ("C", "B")]);
    let b = from_edges(&[("C", "B"), ("A", "B"), ("C", "A"), ("A", "A"), ("A", "B")]);

    assert!(a.equals(&b));
    assert!(b.equals(&a));
    assert!(a.same_edges(&b));
    assert_eq!(a, b);
}

#[test]
fn test_different_vertex_count_not_equal() {
    let a = from_edges(&[("A", "B")]);
    let mut b = from_edges(&[("A", "B")]);
    b.add_vertex("C");

    assert!(!a.equals(&b));
    assert_ne!(a, b);
}

#[test]
fn test_different_edge_count_not_equal() {
    let a = from_edges(&[("A", "B")]);
    let b = from_edges(&[("A", "B"), ("B", "A")]);

    assert!(!a.equals(&b));
}

#[test]
fn test_different_vertex_set_not_equal() {
    let a = from_edges(&[("A", "B")]);
    let b = from_edges(&[("A", "C")]);

    assert!(!a.equals(&b));
}

#[test]
fn test_rewired_edges_still_equal_by_shape() {
    // Same vertices, same edge count, different wiring
    let a = from_edges(&[("A", "B"), ("C", "C")]);
    let b = from_edges(&[("B", "A"), ("C", "C")]);

    assert!(a.equals(&b));
    assert_eq!(a, b);
    assert!(!a.same_edges(&b));
}

#[test]
fn test_equals_through_trait_object() {
    let a = from_edges(&[("A", "B")]);
    let b = from_edges(&[("A", "B")]);
    let erased: &dyn Graph<&str> = &b;

    assert!(a.equals(erased));
    assert!(erased.equals(&a));
}

#[test]
fn test_clone_is_equal() {
    let a = from_edges(&[("A", "B"), ("B", "C")]);
    let b = a.clone();

    assert!(a.same_edges(&b));
    assert_eq!(a.to_string(), b.to_string());
}
