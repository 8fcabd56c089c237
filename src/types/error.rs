//! Error types for the multigraph library.

use thiserror::Error;

/// All errors that can occur while operating on a multigraph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node not present in the multigraph.
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// Exact edge value not present between its endpoints.
    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound { from: String, to: String },

    /// Operation not defined for the graph's directedness.
    #[error("Invalid operation: {0}")]
    InvalidOperation(&'static str),
}

impl GraphError {
    /// True for both missing-node and missing-edge failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::NodeNotFound(_) | GraphError::EdgeNotFound { .. }
        )
    }

    pub(crate) fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        GraphError::NodeNotFound(format!("{:?}", node))
    }

    pub(crate) fn edge_not_found<N: std::fmt::Debug>(source: &N, target: &N) -> Self {
        GraphError::EdgeNotFound {
            from: format!("{:?}", source),
            to: format!("{:?}", target),
        }
    }
}

/// Convenience result type for multigraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
