//! The edge contract consumed by the container, and a concrete weighted edge.

use std::fmt;
use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Node;

/// An immutable arc between two nodes.
///
/// Equality identifies the exact value that `remove_edge` looks for.
/// `inverted` must swap the endpoints, keep the payload, and satisfy
/// `e.inverted().inverted() == e`.
pub trait GraphEdge: Clone + PartialEq {
    /// Node identifier type.
    type Node: Node;

    /// Origin of the arc.
    fn source(&self) -> &Self::Node;

    /// Destination of the arc.
    fn target(&self) -> &Self::Node;

    /// The same edge with source and target swapped.
    fn inverted(&self) -> Self;

    /// True when source and target are the same node.
    fn is_loop(&self) -> bool {
        self.source() == self.target()
    }
}

/// A weighted edge. Ordered by source, then target, then weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge<N, W = i64> {
    /// Origin node.
    pub source: N,
    /// Destination node.
    pub target: N,
    /// Payload carried unchanged through inversion.
    pub weight: W,
}

impl<N, W> Edge<N, W> {
    /// Create an edge with an explicit weight.
    pub fn new(source: N, target: N, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<N> Edge<N, i64> {
    /// Create an edge of weight 1.
    pub fn unweighted(source: N, target: N) -> Self {
        Self::new(source, target, 1)
    }
}

impl<N: Node, W: Clone + PartialEq> GraphEdge for Edge<N, W> {
    type Node = N;

    fn source(&self) -> &N {
        &self.source
    }

    fn target(&self) -> &N {
        &self.target
    }

    fn inverted(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            weight: self.weight.clone(),
        }
    }
}

/// `!edge` swaps the endpoints.
impl<N, W> Not for Edge<N, W> {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

impl<N: fmt::Display, W: fmt::Display> fmt::Display for Edge<N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}
