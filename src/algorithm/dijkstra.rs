use log::debug;
use num_traits::Zero;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::distance::Distance;
use crate::algorithm::{ShortestPathSolver, ShortestPathTree};
use crate::data_structures::Frontier;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation: label-setting relaxation
/// over a binary-heap frontier.
///
/// Works on any [`Graph`] with non-negative edge weights. Every call owns
/// its complete working state, so a single instance can serve any number
/// of threads solving over a shared graph at once.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new solver instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathSolver<N, W, G> for Dijkstra
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + Ord + Debug,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn solve(&self, graph: &G, source: &N) -> Result<ShortestPathTree<N, W>> {
        if !graph.contains_node(source) {
            return Err(Error::SourceNotFound);
        }

        debug!(
            "solving shortest paths from {:?} over {} nodes and {} edges",
            source,
            graph.node_count(),
            graph.edge_count()
        );

        // Every graph node starts unreached with no predecessor
        let mut distances: HashMap<N, Distance<W>> = graph
            .nodes()
            .map(|node| (node.clone(), Distance::Unreached))
            .collect();
        let mut predecessors: HashMap<N, Option<N>> =
            graph.nodes().map(|node| (node.clone(), None)).collect();

        // Distance to source is 0
        distances.insert(source.clone(), Distance::Finite(W::zero()));

        // The frontier and the visited set live and die with this call
        let mut frontier = Frontier::new();
        frontier.push(source.clone(), W::zero());
        let mut visited: HashSet<N> = HashSet::with_capacity(graph.node_count());

        // Main Dijkstra loop
        while let Some((node, finalized)) = frontier.pop() {
            // An already visited node means this entry is stale: the node
            // was finalized through a cheaper entry earlier
            if !visited.insert(node.clone()) {
                continue;
            }

            // Relax all outgoing edges
            for (neighbor, weight) in graph.neighbors(&node) {
                if visited.contains(neighbor) {
                    continue;
                }
                let known = match distances.get(neighbor) {
                    Some(distance) => *distance,
                    // Edge target outside the graph's node set, nothing to relax
                    None => continue,
                };

                let candidate = finalized + weight;
                if Distance::Finite(candidate) < known {
                    distances.insert(neighbor.clone(), Distance::Finite(candidate));
                    predecessors.insert(neighbor.clone(), Some(node.clone()));
                    frontier.push(neighbor.clone(), candidate);
                }
            }
        }

        debug!(
            "finalized {} of {} nodes from {:?}",
            visited.len(),
            graph.node_count(),
            source
        );

        Ok(ShortestPathTree {
            source: source.clone(),
            distances,
            predecessors,
        })
    }
}
