//! The multigraph container: storage, traversal, degrees and transforms.

pub mod builder;
pub mod iter;
pub mod multigraph;
pub mod transform;

pub use builder::GraphBuilder;
pub use iter::{Edges, InEdges, Neighbors, Nodes, OutEdges};
pub use multigraph::MultiGraph;
