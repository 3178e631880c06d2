//! Single-source shortest paths over generic weighted graphs.
//!
//! The solver is the classic label-setting relaxation (Dijkstra's algorithm)
//! over a binary-heap frontier: one call computes, for a single source node,
//! the shortest distance to every reachable node of the graph together with
//! the predecessor links of a shortest-path tree. A separate reconstruction
//! step walks those links backward to materialize the concrete path to any
//! target, as often as needed, without solving again.
//!
//! Node identifiers are opaque: any hashable, clonable type works (`&str`,
//! `String`, integers, coordinates). Weights are any ordered additive type
//! with a zero, such as `OrderedFloat<f64>` or the unsigned integers. Edge
//! weights must be non-negative for the computed distances to be meaningful.
//!
//! # Example
//!
//! ```
//! use ordered_float::OrderedFloat;
//! use shortest_paths::graph::MutableGraph;
//! use shortest_paths::{AdjacencyGraph, Dijkstra, Distance, PathOutcome, ShortestPathSolver};
//!
//! let mut graph = AdjacencyGraph::new();
//! for city in ["berlin", "munich", "cologne"] {
//!     graph.add_node(city);
//! }
//! graph.add_edge("berlin", "munich", OrderedFloat(584.0));
//! graph.add_edge("berlin", "cologne", OrderedFloat(576.0));
//! graph.add_edge("cologne", "munich", OrderedFloat(577.0));
//!
//! let tree = Dijkstra::new().solve(&graph, &"berlin").unwrap();
//! assert_eq!(tree.distance(&"munich"), Some(Distance::Finite(OrderedFloat(584.0))));
//! assert_eq!(
//!     tree.path_to(&"munich"),
//!     PathOutcome::Found(vec!["berlin", "munich"])
//! );
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    distance::Distance,
    path::{reconstruct_path, PathOutcome},
    ShortestPathSolver, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source node not found in graph")]
    SourceNotFound,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
