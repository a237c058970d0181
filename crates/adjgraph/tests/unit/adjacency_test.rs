//! Unit tests for AdjacencyRecord edge handling and rendering.

use adjgraph::AdjacencyRecord;

#[test]
fn test_record_creation() {
    let record = AdjacencyRecord::new("A");

    assert_eq!(record.source(), &"A");
    assert_eq!(record.degree(), 0);
    assert!(!record.has_edge(&"A"));
}

#[test]
fn test_add_edge_increments_degree() {
    let mut record = AdjacencyRecord::new("A");

    assert!(record.add_edge("B"));
    assert!(record.add_edge("C"));

    assert_eq!(record.degree(), 2);
    assert!(record.has_edge(&"B"));
    assert!(record.has_edge(&"C"));
}

#[test]
fn test_add_edge_ignores_duplicates() {
    let mut record = AdjacencyRecord::new("A");
    record.add_edge("B");

    assert!(!record.add_edge("B"));
    assert_eq!(record.degree(), 1);
    assert_eq!(record.edges().count(), 1);
}

#[test]
fn test_is_adjacent_matches_has_edge() {
    let mut record = AdjacencyRecord::new(1);
    record.add_edge(2);

    for target in [1, 2, 3] {
        assert_eq!(record.is_adjacent(&target), record.has_edge(&target));
    }
}

#[test]
fn test_edges_in_insertion_order() {
    let mut record = AdjacencyRecord::new('s');
    for target in ['z', 'a', 'm', 'a'] {
        record.add_edge(target);
    }

    let targets: String = record.edges().collect();
    assert_eq!(targets, "zam");
}

#[test]
fn test_display_no_extraneous_spaces() {
    let mut record = AdjacencyRecord::new("C");
    assert_eq!(record.to_string().replace(' ', "*"), "C:");

    record.add_edge("A");
    record.add_edge("B");
    assert_eq!(record.to_string().replace(' ', "*"), "C:*A,*B");
}

#[test]
fn test_display_single_target() {
    let mut record = AdjacencyRecord::new(4);
    record.add_edge(4);

    assert_eq!(record.to_string(), "4: 4");
}
