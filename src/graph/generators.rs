use crate::graph::{AdjacencyGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a sparse pseudo-random directed graph with `node_count` nodes
/// and about `avg_out_degree` outgoing edges per node, weights drawn from
/// 1.0..100.0. The same seed always produces the same graph. Nothing
/// guarantees connectivity, so some nodes may stay unreached from any
/// given source.
pub fn sparse_random(
    node_count: usize,
    avg_out_degree: usize,
    seed: u64,
) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(node_count);
    let mut rng = StdRng::seed_from_u64(seed);

    for node in 0..node_count {
        graph.add_node(node);
    }
    if node_count == 0 {
        return graph;
    }

    // Attempts landing on a self-loop or an existing edge are dropped, so
    // the real edge count comes out slightly below the target.
    for _ in 0..node_count * avg_out_degree {
        let from = rng.gen_range(0..node_count);
        let to = rng.gen_range(0..node_count);
        if from == to {
            continue;
        }
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        graph.add_edge(from, to, weight);
    }

    graph
}

/// Generates a chain 0 -> 1 -> ... -> `node_count` - 1 with unit weights,
/// the deepest possible shortest-path tree for its size.
pub fn line(node_count: usize) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(node_count);

    for node in 0..node_count {
        graph.add_node(node);
    }
    for node in 1..node_count {
        graph.add_edge(node - 1, node, OrderedFloat(1.0));
    }

    graph
}
