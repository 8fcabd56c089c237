//! Multigraph — an in-memory weighted multigraph container.
//!
//! Parallel edges and loops are allowed. Directed and undirected graphs
//! share one representation: node -> neighbor -> list of parallel edges,
//! with undirected edges stored as mirrored, inverted pairs.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Edges, GraphBuilder, InEdges, MultiGraph, Neighbors, Nodes, OutEdges};
pub use types::{Edge, GraphEdge, GraphError, GraphResult, Node};
