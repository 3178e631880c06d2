//! Small road-network walkthrough: build an undirected city graph, solve
//! once from a source city, then print the route to every destination.
//!
//! Run with `RUST_LOG=debug` to watch the solver log its progress.

use ordered_float::OrderedFloat;
use shortest_paths::graph::{Graph, MutableGraph};
use shortest_paths::{AdjacencyGraph, Dijkstra, PathOutcome, ShortestPathSolver};

fn main() {
    env_logger::init();

    // Road distances in kilometers
    let mut graph = AdjacencyGraph::new();
    let cities = [
        "amsterdam",
        "brussels",
        "cologne",
        "frankfurt",
        "paris",
        "zurich",
    ];
    for city in cities {
        graph.add_node(city);
    }
    graph.add_undirected_edge("amsterdam", "brussels", OrderedFloat(210.0));
    graph.add_undirected_edge("amsterdam", "cologne", OrderedFloat(260.0));
    graph.add_undirected_edge("brussels", "cologne", OrderedFloat(220.0));
    graph.add_undirected_edge("brussels", "paris", OrderedFloat(310.0));
    graph.add_undirected_edge("cologne", "frankfurt", OrderedFloat(190.0));
    graph.add_undirected_edge("frankfurt", "zurich", OrderedFloat(310.0));
    graph.add_undirected_edge("paris", "zurich", OrderedFloat(490.0));

    let source = "amsterdam";
    println!(
        "Routes from {} ({} cities, {} directed edges)",
        source,
        graph.node_count(),
        graph.edge_count()
    );

    let solver = Dijkstra::new();
    let tree = match solver.solve(&graph, &source) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("solve failed: {}", err);
            return;
        }
    };

    for city in cities {
        if city == source {
            continue;
        }
        match tree.path_to(&city) {
            PathOutcome::Found(path) => {
                let distance = tree
                    .distance(&city)
                    .expect("every city is in the solved graph");
                println!("  {:>9}: {:>5} km via {}", city, distance, path.join(" -> "));
            }
            PathOutcome::Unreachable => println!("  {:>9}: unreachable", city),
            PathOutcome::UnknownTarget => println!("  {:>9}: unknown city", city),
        }
    }
}
