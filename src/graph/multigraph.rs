//! Core multigraph structure — node keys + per-neighbor parallel-edge buckets.

use indexmap::IndexMap;

use crate::types::{GraphEdge, GraphError, GraphResult};

/// Parallel edges from one node, keyed by neighbor.
pub(crate) type Bucket<E> = IndexMap<<E as GraphEdge>::Node, Vec<E>>;

/// A weighted multigraph with parallel edges and loops.
///
/// The same storage serves directed and undirected graphs. In undirected
/// mode every non-loop edge `u -> v` is kept twice: as itself in
/// `[u][v]` and inverted in `[v][u]`, at the same position. Loops are
/// stored once. Only `add_edge`, `remove_edge` and `remove_node` touch the
/// mirrored pair.
#[derive(Debug, Clone)]
pub struct MultiGraph<E: GraphEdge> {
    /// Node -> neighbor -> parallel edges. A bucket exists only while non-empty.
    pub(crate) adjacency: IndexMap<E::Node, Bucket<E>>,
    /// Fixed at construction.
    pub(crate) directed: bool,
    /// Advisory node-count hint; `order()` is authoritative.
    pub(crate) n: usize,
}

impl<E: GraphEdge> MultiGraph<E> {
    /// Create an empty multigraph.
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(0, directed)
    }

    /// Create an empty multigraph pre-sized for `n` nodes.
    pub fn with_capacity(n: usize, directed: bool) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(n),
            directed,
            n,
        }
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The capacity hint given at construction.
    pub fn capacity_hint(&self) -> usize {
        self.n
    }

    /// Number of nodes (the multigraph order).
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// True when there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of edges, parallel edges counted individually.
    ///
    /// Undirected graphs hold every non-loop twice and every loop once,
    /// so the count is `(entries + loop_entries) / 2`.
    pub fn size(&self) -> usize {
        let mut entries = 0;
        let mut loops = 0;
        for (source, bucket) in &self.adjacency {
            for (target, edges) in bucket {
                entries += edges.len();
                if source == target {
                    loops += edges.len();
                }
            }
        }
        if self.directed {
            return entries;
        }
        debug_assert!(
            (entries + loops) % 2 == 0,
            "mirrored buckets out of sync: {} entries, {} loops",
            entries,
            loops
        );
        (entries + loops) / 2
    }

    /// Add a node. No-op if it already exists.
    pub fn add_node(&mut self, node: E::Node) {
        self.adjacency.entry(node).or_default();
    }

    /// Test if a node exists.
    pub fn has_node(&self, node: &E::Node) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Remove a node and every edge incident to it.
    pub fn remove_node(&mut self, node: &E::Node) -> GraphResult<()> {
        if !self.has_node(node) {
            return Err(GraphError::node_not_found(node));
        }

        // Edge removal reshapes the buckets being walked, so collect first.
        let incoming: Vec<E> = self.in_edges(node)?.collect();
        for edge in &incoming {
            self.remove_edge(edge)?;
        }
        let mut removed = incoming.len();
        if self.directed {
            let outgoing: Vec<E> = self.out_edges(node)?.cloned().collect();
            for edge in &outgoing {
                self.remove_edge(edge)?;
            }
            removed += outgoing.len();
        }

        self.adjacency.shift_remove(node);
        log::debug!("Removed node {:?} with {} incident edges", node, removed);
        Ok(())
    }

    /// Add an edge, creating missing endpoints.
    pub fn add_edge(&mut self, edge: E) {
        let source = edge.source().clone();
        let target = edge.target().clone();
        log::trace!("Adding edge {:?} -> {:?}", source, target);

        self.add_node(source.clone());
        self.add_node(target.clone());

        if !self.directed && source != target {
            self.adjacency
                .entry(target.clone())
                .or_default()
                .entry(source.clone())
                .or_default()
                .push(edge.inverted());
        }
        self.adjacency
            .entry(source)
            .or_default()
            .entry(target)
            .or_default()
            .push(edge);
    }

    /// Remove one occurrence of this exact edge value.
    ///
    /// Fails without touching the graph if the edge (or, for undirected
    /// graphs, its mirror) is absent.
    pub fn remove_edge(&mut self, edge: &E) -> GraphResult<()> {
        let source = edge.source();
        let target = edge.target();

        let forward = self
            .position(source, target, edge)
            .ok_or_else(|| GraphError::edge_not_found(source, target))?;

        let mirror = if !self.directed && source != target {
            let position = self.position(target, source, &edge.inverted());
            if position.is_none() {
                log::warn!(
                    "Mirror of edge {:?} -> {:?} missing from undirected graph",
                    source,
                    target
                );
            }
            Some(position.ok_or_else(|| GraphError::edge_not_found(target, source))?)
        } else {
            None
        };

        log::trace!("Removing edge {:?} -> {:?}", source, target);
        self.detach(source, target, forward);
        if let Some(index) = mirror {
            self.detach(target, source, index);
        }
        Ok(())
    }

    /// Test if any edge joins the edge's endpoints. The weight is not checked.
    pub fn has_edge(&self, edge: &E) -> bool {
        self.adjacency
            .get(edge.source())
            .is_some_and(|bucket| bucket.contains_key(edge.target()))
    }

    /// Number of parallel edges between the edge's endpoints, 0 if none.
    pub fn weight(&self, edge: &E) -> usize {
        self.edges_between(edge.source(), edge.target()).len()
    }

    /// The parallel edges stored from `source` to `target`.
    pub fn edges_between(&self, source: &E::Node, target: &E::Node) -> &[E] {
        self.adjacency
            .get(source)
            .and_then(|bucket| bucket.get(target))
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Remove every node and edge. Directedness and the hint are kept.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Degree of a node in an undirected graph. A loop counts twice.
    pub fn degree(&self, node: &E::Node) -> GraphResult<usize> {
        if self.directed {
            return Err(GraphError::InvalidOperation(
                "degree is undefined for a directed multigraph",
            ));
        }
        self.undirected_degree(node)
    }

    /// Number of edges leaving the node. Equals `degree` when undirected.
    pub fn out_degree(&self, node: &E::Node) -> GraphResult<usize> {
        if !self.directed {
            return self.undirected_degree(node);
        }
        Ok(bucket_len(self.bucket(node)?))
    }

    /// Number of edges entering the node. Equals `degree` when undirected.
    ///
    /// Directed graphs keep no reverse index, so this scans every node.
    pub fn in_degree(&self, node: &E::Node) -> GraphResult<usize> {
        if !self.directed {
            return self.undirected_degree(node);
        }
        self.bucket(node)?;
        Ok(self
            .adjacency
            .values()
            .filter_map(|bucket| bucket.get(node))
            .map(Vec::len)
            .sum())
    }

    /// Equality that also compares per-pair multiplicities and edge values.
    ///
    /// `==` only checks that every edge of one graph joins nodes that are
    /// joined in the other, plus matching totals.
    pub fn eq_strict(&self, other: &Self) -> bool {
        if self.directed != other.directed || self.order() != other.order() {
            return false;
        }
        self.adjacency.iter().all(|(source, bucket)| {
            let Some(other_bucket) = other.adjacency.get(source) else {
                return false;
            };
            bucket.len() == other_bucket.len()
                && bucket.iter().all(|(target, edges)| {
                    other_bucket
                        .get(target)
                        .is_some_and(|theirs| same_multiset(edges, theirs))
                })
        })
    }

    pub(crate) fn bucket(&self, node: &E::Node) -> GraphResult<&Bucket<E>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    fn undirected_degree(&self, node: &E::Node) -> GraphResult<usize> {
        let bucket = self.bucket(node)?;
        let loops = bucket.get(node).map_or(0, Vec::len);
        Ok(bucket_len(bucket) + loops)
    }

    fn position(&self, source: &E::Node, target: &E::Node, edge: &E) -> Option<usize> {
        self.adjacency
            .get(source)?
            .get(target)?
            .iter()
            .position(|stored| stored == edge)
    }

    /// Drop the edge at `index` and the bucket if it empties.
    fn detach(&mut self, source: &E::Node, target: &E::Node, index: usize) {
        let Some(bucket) = self.adjacency.get_mut(source) else {
            return;
        };
        if let Some(edges) = bucket.get_mut(target) {
            edges.remove(index);
            if edges.is_empty() {
                bucket.shift_remove(target);
            }
        }
    }
}

impl<E: GraphEdge> Default for MultiGraph<E> {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Weak structural equality: same directedness, node set, edge count, and
/// every edge's endpoints joined in the other graph. Multiplicities per
/// pair are not compared; see [`MultiGraph::eq_strict`].
impl<E: GraphEdge> PartialEq for MultiGraph<E> {
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed {
            return false;
        }
        if self.order() != other.order() {
            return false;
        }
        if !self.nodes().all(|node| other.has_node(node)) {
            return false;
        }
        if self.size() != other.size() {
            return false;
        }
        self.edges().all(|edge| other.has_edge(edge))
    }
}

impl<E: GraphEdge> Eq for MultiGraph<E> {}

impl<E: GraphEdge> Extend<E> for MultiGraph<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for edge in iter {
            self.add_edge(edge);
        }
    }
}

/// Collects into an undirected multigraph.
impl<E: GraphEdge> FromIterator<E> for MultiGraph<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut graph = Self::default();
        graph.extend(iter);
        graph
    }
}

fn bucket_len<E: GraphEdge>(bucket: &Bucket<E>) -> usize {
    bucket.values().map(Vec::len).sum()
}

fn same_multiset<E: PartialEq>(ours: &[E], theirs: &[E]) -> bool {
    ours.len() == theirs.len()
        && ours.iter().all(|edge| {
            let count = |edges: &[E]| edges.iter().filter(|e| *e == edge).count();
            count(ours) == count(theirs)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Edge;

    #[test]
    fn test_same_multiset_ignores_order() {
        let a = [Edge::new(1, 2, 5), Edge::new(1, 2, 6), Edge::new(1, 2, 5)];
        let b = [Edge::new(1, 2, 6), Edge::new(1, 2, 5), Edge::new(1, 2, 5)];
        let c = [Edge::new(1, 2, 6), Edge::new(1, 2, 6), Edge::new(1, 2, 5)];
        assert!(same_multiset(&a, &b));
        assert!(!same_multiset(&a, &c));
        assert!(!same_multiset(&a[..2], &a));
    }

    #[test]
    fn test_detach_drops_empty_bucket() {
        let mut graph = MultiGraph::new(true);
        graph.add_edge(Edge::unweighted('a', 'b'));
        graph.detach(&'a', &'b', 0);
        assert!(graph.adjacency[&'a'].is_empty());
        assert!(graph.has_node(&'b'));
    }

    #[test]
    fn test_mirror_keeps_position() {
        let mut graph = MultiGraph::new(false);
        graph.add_edge(Edge::new(1, 2, 10));
        graph.add_edge(Edge::new(1, 2, 20));
        graph.add_edge(Edge::new(2, 1, 30));
        let forward = graph.edges_between(&1, &2);
        let backward = graph.edges_between(&2, &1);
        assert_eq!(forward.len(), backward.len());
        for (f, b) in forward.iter().zip(backward) {
            assert_eq!(f.inverted(), *b);
        }
    }
}
