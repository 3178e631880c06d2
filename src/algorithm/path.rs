use std::collections::HashMap;
use std::hash::Hash;

/// Outcome of reconstructing the path from a source to one target.
///
/// The two failure variants both collapse to an empty sequence through
/// [`PathOutcome::nodes`] and [`PathOutcome::into_nodes`]; callers that
/// need to tell an unreachable target apart from an identifier the solver
/// never saw match on the variant instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathOutcome<N> {
    /// Ordered nodes of a shortest path, source and target included
    Found(Vec<N>),
    /// The target is a known node but no path connects the source to it
    Unreachable,
    /// The target never appeared in the solved graph at all
    UnknownTarget,
}

impl<N> PathOutcome<N> {
    /// Returns true if a path was found
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    /// The path as a slice, empty when no path connects source and target
    pub fn nodes(&self) -> &[N] {
        match self {
            PathOutcome::Found(nodes) => nodes,
            _ => &[],
        }
    }

    /// Consumes the outcome into the path nodes, empty when no path
    /// connects source and target
    pub fn into_nodes(self) -> Vec<N> {
        match self {
            PathOutcome::Found(nodes) => nodes,
            _ => Vec::new(),
        }
    }
}

/// Walks predecessor links backward from `target` until `source` and
/// returns the ordered source-to-target path.
///
/// The map is the one a solver produced: every node of the solved graph is
/// a key, and the source and unreached nodes map to `None`. A target
/// missing from the map entirely yields [`PathOutcome::UnknownTarget`]; a
/// walk that runs out of links before the source yields
/// [`PathOutcome::Unreachable`]. When `source == target` the path is the
/// single-element sequence holding the source.
pub fn reconstruct_path<N>(
    predecessors: &HashMap<N, Option<N>>,
    source: &N,
    target: &N,
) -> PathOutcome<N>
where
    N: Eq + Hash + Clone,
{
    if !predecessors.contains_key(target) {
        return PathOutcome::UnknownTarget;
    }

    let mut path = vec![target.clone()];
    let mut current = target;

    while current != source {
        current = match predecessors.get(current) {
            Some(Some(predecessor)) => predecessor,
            // Out of links without meeting the source
            _ => return PathOutcome::Unreachable,
        };
        path.push(current.clone());

        // A simple path can never hold more nodes than the map has keys;
        // a longer walk means a caller-supplied map contains a cycle
        if path.len() > predecessors.len() {
            return PathOutcome::Unreachable;
        }
    }

    path.reverse();
    PathOutcome::Found(path)
}
