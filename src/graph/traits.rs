use num_traits::Zero;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait representing a weighted directed graph keyed by opaque node
/// identifiers. Undirected graphs list every edge in both directions.
pub trait Graph<N, W>: Debug
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + Ord + Debug,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the node exists in the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Returns an iterator over every node of the graph
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the outgoing (neighbor, weight) pairs of a
    /// node, in insertion order; empty if the node is unknown
    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_>;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;
}

/// Trait for mutable graph operations. Construction happens before solving;
/// solvers only ever borrow a graph immutably.
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + Ord + Debug,
{
    /// Adds a node with no edges. Returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Removes a node and every edge touching it from the graph
    fn remove_node(&mut self, node: &N) -> bool;

    /// Adds a directed edge between two existing nodes with the given
    /// weight, replacing the weight if the edge already exists. Returns
    /// false when an endpoint is unknown or the weight is negative
    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;
}
