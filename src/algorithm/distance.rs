use std::fmt;
use std::ops::Add;

/// Shortest distance from the source to one node.
///
/// An explicit value replaces the usual IEEE-infinity sentinel, so integer
/// weights work and "never reached" cannot be confused with a huge real
/// distance. `Unreached` orders after every finite distance, which makes
/// the derived ordering exactly the comparison relaxation needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance<W> {
    /// Total weight of a shortest path from the source
    Finite(W),
    /// No path from the source reaches the node
    Unreached,
}

impl<W> Distance<W> {
    /// Returns true if the node was reached
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns true if no path from the source reaches the node
    pub fn is_unreached(&self) -> bool {
        matches!(self, Distance::Unreached)
    }

    /// The finite weight sum, if the node was reached
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(total) => Some(total),
            Distance::Unreached => None,
        }
    }
}

/// Extends a distance by one edge; an unreached distance stays unreached
impl<W> Add<W> for Distance<W>
where
    W: Add<Output = W>,
{
    type Output = Distance<W>;

    fn add(self, edge: W) -> Distance<W> {
        match self {
            Distance::Finite(total) => Distance::Finite(total + edge),
            Distance::Unreached => Distance::Unreached,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(total) => total.fmt(f),
            Distance::Unreached => f.pad("unreachable"),
        }
    }
}
