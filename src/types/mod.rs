//! Value types shared by the multigraph container.

pub mod edge;
pub mod error;

pub use edge::{Edge, GraphEdge};
pub use error::{GraphError, GraphResult};

use std::fmt::Debug;
use std::hash::Hash;

/// Bound satisfied by every node identifier.
///
/// Nodes are hashed for lookup and totally ordered so that undirected
/// edge listings can pick one side of each mirrored pair.
pub trait Node: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Node for T {}
