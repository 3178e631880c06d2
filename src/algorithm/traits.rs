use num_traits::Zero;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::distance::Distance;
use crate::algorithm::path::{reconstruct_path, PathOutcome};
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path computation: the distance of every graph node
/// from the source plus the predecessor links of a shortest-path tree.
///
/// Both maps hold exactly the node set of the solved graph and never
/// change after the solver returns. The caller owns the tree and can
/// reconstruct the path to any number of targets without solving again.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPathTree<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + Ord + Debug,
{
    /// The node all distances are measured from
    pub source: N,

    /// Shortest distance from the source to each node
    pub distances: HashMap<N, Distance<W>>,

    /// Previous node on a shortest path from the source; `None` for the
    /// source itself and for unreached nodes
    pub predecessors: HashMap<N, Option<N>>,
}

impl<N, W> ShortestPathTree<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + Ord + Debug,
{
    /// Shortest distance from the source to `node`, or `None` when the
    /// node was not part of the solved graph at all
    pub fn distance(&self, node: &N) -> Option<Distance<W>> {
        self.distances.get(node).copied()
    }

    /// Returns true if a path from the source reaches `node`
    pub fn is_reachable(&self, node: &N) -> bool {
        matches!(self.distances.get(node), Some(Distance::Finite(_)))
    }

    /// Walks the predecessor links backward and returns the path from the
    /// source to `target`
    pub fn path_to(&self, target: &N) -> PathOutcome<N> {
        reconstruct_path(&self.predecessors, &self.source, target)
    }
}

/// Trait for single-source shortest path solvers
pub trait ShortestPathSolver<N, W, G>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + Ord + Debug,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all reachable nodes.
    /// Fails with `Error::SourceNotFound` when the source is not a node of
    /// the graph
    fn solve(&self, graph: &G, source: &N) -> Result<ShortestPathTree<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
