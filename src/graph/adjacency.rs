use crate::graph::traits::{Graph, MutableGraph};
use num_traits::Zero;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A weighted directed graph stored as an adjacency mapping.
///
/// Every node identifier maps to the ordered sequence of its outgoing
/// (neighbor, weight) pairs. Identifiers are opaque to the graph: any
/// hashable, clonable value works. Undirected graphs insert every edge in
/// both directions, see [`AdjacencyGraph::add_undirected_edge`].
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + Ord + Debug,
{
    /// Outgoing edges for each node: node -> [(neighbor, weight)]
    adjacency: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + Ord + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty graph sized for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        AdjacencyGraph {
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Wraps a prebuilt adjacency mapping as a graph.
    ///
    /// The mapping is taken verbatim. Every identifier that should take
    /// part in a computation must appear as a key; edges whose target is
    /// not a key are ignored by solvers.
    pub fn from_adjacency(adjacency: HashMap<N, Vec<(N, W)>>) -> Self {
        AdjacencyGraph { adjacency }
    }

    /// Adds an edge in both directions with the same weight. Returns false
    /// when an endpoint is unknown or the weight is negative
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: W) -> bool {
        self.add_edge(a.clone(), b.clone(), weight) && self.add_edge(b, a, weight)
    }
}

impl<N, W> Graph<N, W> for AdjacencyGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + Ord + Debug,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        if let Some(edges) = self.adjacency.get(node) {
            Box::new(edges.iter().map(|(neighbor, weight)| (neighbor, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_edge(&self, from: &N, to: &N) -> bool {
        if let Some(edges) = self.adjacency.get(from) {
            edges.iter().any(|(target, _)| target == to)
        } else {
            false
        }
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        if let Some(edges) = self.adjacency.get(from) {
            edges
                .iter()
                .find(|(target, _)| target == to)
                .map(|(_, weight)| *weight)
        } else {
            None
        }
    }
}

impl<N, W> MutableGraph<N, W> for AdjacencyGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + Ord + Debug,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        true
    }

    fn remove_node(&mut self, node: &N) -> bool {
        if self.adjacency.remove(node).is_none() {
            return false;
        }

        // Edges pointing at the removed node go with it
        for edges in self.adjacency.values_mut() {
            edges.retain(|(target, _)| target != node);
        }

        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        if !self.adjacency.contains_key(&to) || weight < W::zero() {
            return false;
        }

        if let Some(edges) = self.adjacency.get_mut(&from) {
            // Check if the edge already exists and update it if it does
            for edge in edges.iter_mut() {
                if edge.0 == to {
                    edge.1 = weight;
                    return true;
                }
            }

            edges.push((to, weight));
            true
        } else {
            false
        }
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        if let Some(edges) = self.adjacency.get_mut(from) {
            let len_before = edges.len();
            edges.retain(|(target, _)| target != to);
            len_before > edges.len()
        } else {
            false
        }
    }
}
