//! Fluent API for building MultiGraph instances.

use crate::types::GraphEdge;

use super::MultiGraph;

/// Fluent builder for constructing a MultiGraph.
pub struct GraphBuilder<E: GraphEdge> {
    directed: bool,
    capacity: usize,
    nodes: Vec<E::Node>,
    edges: Vec<E>,
}

impl<E: GraphEdge> GraphBuilder<E> {
    /// Create a builder for an undirected multigraph.
    pub fn new() -> Self {
        Self {
            directed: false,
            capacity: 0,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create a builder for a directed multigraph.
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::new()
        }
    }

    /// Set the advisory node-count hint.
    pub fn capacity(&mut self, n: usize) -> &mut Self {
        self.capacity = n;
        self
    }

    /// Add an isolated node (no-op if an edge also names it).
    pub fn node(&mut self, node: E::Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Add an edge; endpoints are created on build.
    pub fn edge(&mut self, edge: E) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Add several edges.
    pub fn edges<I: IntoIterator<Item = E>>(&mut self, edges: I) -> &mut Self {
        self.edges.extend(edges);
        self
    }

    /// Build the final MultiGraph. Nodes are inserted before edges.
    pub fn build(self) -> MultiGraph<E> {
        let capacity = self.capacity.max(self.nodes.len());
        let mut graph = MultiGraph::with_capacity(capacity, self.directed);
        graph.n = self.capacity;
        for node in self.nodes {
            graph.add_node(node);
        }
        graph.extend(self.edges);
        graph
    }
}

impl<E: GraphEdge> Default for GraphBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
