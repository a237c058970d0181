//! Unit tests for capacity configuration.

use adjgraph::{AdjacencyListGraph, GraphConfig, GraphError};

#[test]
fn test_default_config() {
    let config = GraphConfig::default();

    assert_eq!(config.initial_capacity, 10);
    assert_eq!(config.growth_factor, 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_with_config_rejects_zero_growth() {
    let config = GraphConfig {
        initial_capacity: 4,
        growth_factor: 0,
    };

    let result = AdjacencyListGraph::<u32>::with_config(config);
    assert!(matches!(result, Err(GraphError::InvalidConfig { .. })));
}

#[test]
fn test_compact_config_grows_one_at_a_time() {
    let mut graph = AdjacencyListGraph::with_config(GraphConfig::compact()).unwrap();
    assert_eq!(graph.capacity(), 0);

    graph.add_vertex(1);
    assert_eq!(graph.capacity(), 1);
    graph.add_edge(2, 3);
    assert_eq!(graph.capacity(), 3);
}

#[test]
fn test_with_capacity() {
    let graph: AdjacencyListGraph<u32> = AdjacencyListGraph::with_capacity(500);

    assert_eq!(graph.capacity(), 500);
    assert_eq!(graph.config().initial_capacity, 500);
    assert!(graph.is_empty());
}

#[test]
fn test_ensure_capacity_jumps_to_large_request() {
    let mut graph: AdjacencyListGraph<u32> = AdjacencyListGraph::new();

    graph.ensure_capacity(15);
    assert_eq!(graph.capacity(), 20);

    graph.ensure_capacity(100);
    assert_eq!(graph.capacity(), 100);

    graph.ensure_capacity(50);
    assert_eq!(graph.capacity(), 100);
}

#[test]
fn test_config_from_json() {
    let config: GraphConfig =
        serde_json::from_str(r#"{"initial_capacity": 64, "growth_factor": 3}"#).unwrap();

    assert_eq!(config.initial_capacity, 64);
    assert_eq!(config.growth_factor, 3);
}

#[test]
fn test_config_from_partial_json_uses_defaults() {
    let config: GraphConfig = serde_json::from_str(r#"{"growth_factor": 4}"#).unwrap();

    assert_eq!(config.initial_capacity, 10);
    assert_eq!(config.growth_factor, 4);
}

#[test]
fn test_config_json_roundtrip() {
    let config = GraphConfig::large(1_000);
    let json = serde_json::to_string(&config).unwrap();
    let back: GraphConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(config, back);
}
