//! Whole-graph transforms built on the public mutation primitives.

use crate::types::GraphEdge;

use super::MultiGraph;

impl<E: GraphEdge> MultiGraph<E> {
    /// A new multigraph with every edge inverted.
    ///
    /// Rebuilt through `add_edge`, so undirected mirrors are re-derived.
    /// For undirected graphs the result equals the original.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::with_capacity(self.n, self.directed);
        for node in self.nodes() {
            transposed.add_node(node.clone());
        }
        for edge in self.edges() {
            transposed.add_edge(edge.inverted());
        }
        log::debug!(
            "Transposed multigraph: {} nodes, {} edges",
            transposed.order(),
            transposed.size()
        );
        transposed
    }

    /// Add every node and edge of `other` to this multigraph.
    ///
    /// Parallel edges accumulate: an edge present in both graphs ends up
    /// with the summed multiplicity.
    pub fn merge(&mut self, other: &Self) {
        for node in other.nodes() {
            self.add_node(node.clone());
        }
        for edge in other.edges() {
            self.add_edge(edge.clone());
        }
        log::debug!(
            "Merged multigraph of {} nodes, now {} nodes and {} edges",
            other.order(),
            self.order(),
            self.size()
        );
    }
}
