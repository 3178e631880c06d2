use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// One (distance, node) entry of the frontier.
///
/// Ordering looks at the distance alone, so frontier membership puts no
/// `Ord` requirement on the node type; entries with equal distances pop in
/// unspecified order.
#[derive(Debug)]
struct FrontierEntry<N, W> {
    distance: W,
    node: N,
}

impl<N, W: Ord> PartialEq for FrontierEntry<N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<N, W: Ord> Eq for FrontierEntry<N, W> {}

impl<N, W: Ord> PartialOrd for FrontierEntry<N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W: Ord> Ord for FrontierEntry<N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}

/// A min-priority queue of tentative (node, distance) pairs for shortest
/// path computation.
///
/// Built over the standard binary heap with reversed entries, so `pop`
/// yields the smallest tentative distance first. The frontier may hold
/// several entries for one node; every entry after the first popped is
/// stale and the caller skips it.
#[derive(Debug)]
pub struct Frontier<N, W>
where
    W: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<FrontierEntry<N, W>>>,
}

impl<N, W> Frontier<N, W>
where
    W: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues a node at the given tentative distance
    pub fn push(&mut self, node: N, distance: W) {
        self.heap.push(Reverse(FrontierEntry { distance, node }));
    }

    /// Removes and returns the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(N, W)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.node, entry.distance))
    }

    /// Returns the entry with the smallest distance without removing it
    pub fn peek(&self) -> Option<(&N, W)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.node, entry.distance))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
