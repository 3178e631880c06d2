use ordered_float::OrderedFloat;
use shortest_paths::graph::generators::{line, sparse_random};
use shortest_paths::graph::{Graph, MutableGraph};
use shortest_paths::AdjacencyGraph;
use std::collections::HashMap;

type Weight = OrderedFloat<f64>;

#[test]
fn test_add_node_and_edge_bookkeeping() {
    let mut graph: AdjacencyGraph<&str, Weight> = AdjacencyGraph::new();
    assert!(graph.add_node("a"));
    assert!(graph.add_node("b"));
    assert!(!graph.add_node("a"), "Double insert should report false");
    assert_eq!(graph.node_count(), 2);

    assert!(graph.add_edge("a", "b", OrderedFloat(2.0)));
    assert!(graph.contains_node(&"a"));
    assert!(graph.has_edge(&"a", &"b"));
    assert!(!graph.has_edge(&"b", &"a"), "Edges are directed");
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(&"a", &"b"), Some(OrderedFloat(2.0)));
    assert_eq!(graph.edge_weight(&"b", &"a"), None);
}

#[test]
fn test_add_edge_refuses_bad_input() {
    let mut graph: AdjacencyGraph<&str, Weight> = AdjacencyGraph::new();
    graph.add_node("a");

    assert!(!graph.add_edge("a", "ghost", OrderedFloat(1.0)), "Unknown target");
    assert!(!graph.add_edge("ghost", "a", OrderedFloat(1.0)), "Unknown source");
    assert!(!graph.add_edge("a", "a", OrderedFloat(-1.0)), "Negative weight");
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_duplicate_edge_updates_weight() {
    let mut graph: AdjacencyGraph<&str, Weight> = AdjacencyGraph::new();
    graph.add_node("a");
    graph.add_node("b");

    assert!(graph.add_edge("a", "b", OrderedFloat(5.0)));
    assert!(graph.add_edge("a", "b", OrderedFloat(2.0)));
    assert_eq!(graph.edge_count(), 1, "Edge gets replaced, not duplicated");
    assert_eq!(graph.edge_weight(&"a", &"b"), Some(OrderedFloat(2.0)));
}

#[test]
fn test_neighbors_keep_insertion_order() {
    let mut graph: AdjacencyGraph<&str, Weight> = AdjacencyGraph::new();
    for node in ["hub", "x", "y", "z"] {
        graph.add_node(node);
    }
    graph.add_edge("hub", "z", OrderedFloat(3.0));
    graph.add_edge("hub", "x", OrderedFloat(1.0));
    graph.add_edge("hub", "y", OrderedFloat(2.0));

    let order: Vec<&str> = graph.neighbors(&"hub").map(|(n, _)| *n).collect();
    assert_eq!(order, vec!["z", "x", "y"]);

    // Unknown nodes have no neighbors rather than an error
    assert_eq!(graph.neighbors(&"ghost").count(), 0);
}

#[test]
fn test_remove_edge_and_node() {
    let mut graph: AdjacencyGraph<&str, Weight> = AdjacencyGraph::new();
    for node in ["a", "b", "c"] {
        graph.add_node(node);
    }
    graph.add_edge("a", "b", OrderedFloat(1.0));
    graph.add_edge("b", "c", OrderedFloat(1.0));
    graph.add_edge("c", "a", OrderedFloat(1.0));

    assert!(graph.remove_edge(&"a", &"b"));
    assert!(!graph.remove_edge(&"a", &"b"), "Already removed");
    assert!(!graph.has_edge(&"a", &"b"));

    assert!(graph.remove_node(&"c"));
    assert!(!graph.contains_node(&"c"));
    assert_eq!(graph.edge_count(), 0, "Edges into the removed node go too");
    assert!(!graph.remove_node(&"c"));
}

#[test]
fn test_from_adjacency_mapping() {
    let mut adjacency: HashMap<&str, Vec<(&str, Weight)>> = HashMap::new();
    adjacency.insert("a", vec![("b", OrderedFloat(4.0))]);
    adjacency.insert("b", vec![]);

    let graph = AdjacencyGraph::from_adjacency(adjacency);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(&"a", &"b"), Some(OrderedFloat(4.0)));
}

#[test]
fn test_add_undirected_edge_inserts_both_directions() {
    let mut graph: AdjacencyGraph<&str, Weight> = AdjacencyGraph::new();
    graph.add_node("a");
    graph.add_node("b");

    assert!(graph.add_undirected_edge("a", "b", OrderedFloat(2.5)));
    assert!(graph.has_edge(&"a", &"b"));
    assert!(graph.has_edge(&"b", &"a"));
    assert_eq!(graph.edge_count(), 2);

    assert!(
        !graph.add_undirected_edge("a", "ghost", OrderedFloat(1.0)),
        "Unknown endpoint adds nothing"
    );
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_sparse_random_is_deterministic() {
    let first = sparse_random(80, 4, 42);
    let second = sparse_random(80, 4, 42);

    assert_eq!(first.node_count(), second.node_count());
    assert_eq!(first.edge_count(), second.edge_count());
    for node in 0..80 {
        let a: Vec<(usize, Weight)> = first.neighbors(&node).map(|(n, w)| (*n, w)).collect();
        let b: Vec<(usize, Weight)> = second.neighbors(&node).map(|(n, w)| (*n, w)).collect();
        assert_eq!(a, b, "same seed must rebuild the same graph");
    }

    let other = sparse_random(80, 4, 43);
    let differs = (0..80).any(|node| {
        let a: Vec<(usize, Weight)> = first.neighbors(&node).map(|(n, w)| (*n, w)).collect();
        let b: Vec<(usize, Weight)> = other.neighbors(&node).map(|(n, w)| (*n, w)).collect();
        a != b
    });
    assert!(differs, "a different seed should change the graph");
}

#[test]
fn test_sparse_random_respects_size_request() {
    let graph = sparse_random(100, 4, 7);
    assert_eq!(graph.node_count(), 100);
    // Self-loop and duplicate attempts are dropped, never retried
    assert!(graph.edge_count() <= 400);
    assert!(graph.edge_count() > 300, "most attempts should land");
}

#[test]
fn test_line_generator_shape() {
    let graph = line(5);
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 4);
    for node in 1..5 {
        assert_eq!(
            graph.edge_weight(&(node - 1), &node),
            Some(OrderedFloat(1.0))
        );
    }
    assert!(!graph.has_edge(&4, &0), "chain does not wrap around");
}
