//! Lazy traversal of nodes, neighbors and edges.
//!
//! Every iterator borrows the multigraph, so the borrow checker rules out
//! mutation while a traversal is open. Calling the producer again starts a
//! fresh pass over the current state.

use std::iter::FusedIterator;
use std::slice;

use indexmap::map;

use crate::types::{GraphEdge, GraphError, GraphResult};

use super::multigraph::{Bucket, MultiGraph};

impl<E: GraphEdge> MultiGraph<E> {
    /// All nodes, in insertion order.
    pub fn nodes(&self) -> Nodes<'_, E> {
        Nodes {
            inner: self.adjacency.keys(),
        }
    }

    /// Nodes joined to `node` by at least one edge leaving it.
    pub fn neighbors(&self, node: &E::Node) -> GraphResult<Neighbors<'_, E>> {
        Ok(Neighbors {
            inner: self.bucket(node)?.keys(),
        })
    }

    /// Every edge leaving `node`, bucket by bucket.
    pub fn out_edges(&self, node: &E::Node) -> GraphResult<OutEdges<'_, E>> {
        Ok(OutEdges::new(self.bucket(node)?))
    }

    /// Every edge entering `node`.
    ///
    /// Undirected graphs yield the node's own edges inverted, so each item
    /// ends at `node`. Directed graphs scan every node's bucket for `node`.
    pub fn in_edges(&self, node: &E::Node) -> GraphResult<InEdges<'_, E>> {
        let (target, bucket) = self
            .adjacency
            .get_key_value(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        if self.directed {
            Ok(InEdges::Directed {
                target,
                sources: self.adjacency.values(),
                current: Default::default(),
            })
        } else {
            Ok(InEdges::Undirected(OutEdges::new(bucket)))
        }
    }

    /// Every distinct edge once.
    ///
    /// Undirected graphs skip the mirrored copy by yielding only buckets
    /// with `source <= target`.
    pub fn edges(&self) -> Edges<'_, E> {
        Edges {
            directed: self.directed,
            sources: self.adjacency.iter(),
            source: None,
            targets: None,
            current: Default::default(),
        }
    }
}

/// Iterator over node keys.
pub struct Nodes<'a, E: GraphEdge> {
    inner: map::Keys<'a, E::Node, Bucket<E>>,
}

impl<'a, E: GraphEdge> Iterator for Nodes<'a, E> {
    type Item = &'a E::Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: GraphEdge> ExactSizeIterator for Nodes<'_, E> {}
impl<E: GraphEdge> FusedIterator for Nodes<'_, E> {}

/// Iterator over the neighbors of one node.
pub struct Neighbors<'a, E: GraphEdge> {
    inner: map::Keys<'a, E::Node, Vec<E>>,
}

impl<'a, E: GraphEdge> Iterator for Neighbors<'a, E> {
    type Item = &'a E::Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: GraphEdge> ExactSizeIterator for Neighbors<'_, E> {}
impl<E: GraphEdge> FusedIterator for Neighbors<'_, E> {}

/// Iterator over the edges stored in one node's buckets.
pub struct OutEdges<'a, E: GraphEdge> {
    buckets: map::Values<'a, E::Node, Vec<E>>,
    current: slice::Iter<'a, E>,
}

impl<'a, E: GraphEdge> OutEdges<'a, E> {
    fn new(bucket: &'a Bucket<E>) -> Self {
        Self {
            buckets: bucket.values(),
            current: Default::default(),
        }
    }
}

impl<'a, E: GraphEdge> Iterator for OutEdges<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edge) = self.current.next() {
                return Some(edge);
            }
            self.current = self.buckets.next()?.iter();
        }
    }
}

impl<E: GraphEdge> FusedIterator for OutEdges<'_, E> {}

/// Iterator over the edges entering one node. Yields owned values because
/// the undirected view inverts stored edges.
pub enum InEdges<'a, E: GraphEdge> {
    /// Scan of `[t][target]` for every node `t`.
    Directed {
        target: &'a E::Node,
        sources: map::Values<'a, E::Node, Bucket<E>>,
        current: slice::Iter<'a, E>,
    },
    /// The node's own buckets, inverted.
    Undirected(OutEdges<'a, E>),
}

impl<E: GraphEdge> Iterator for InEdges<'_, E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        match self {
            InEdges::Directed {
                target,
                sources,
                current,
            } => loop {
                if let Some(edge) = current.next() {
                    return Some(edge.clone());
                }
                let bucket = sources.next()?;
                if let Some(edges) = bucket.get(*target) {
                    *current = edges.iter();
                }
            },
            InEdges::Undirected(out) => out.next().map(|edge| edge.inverted()),
        }
    }
}

impl<E: GraphEdge> FusedIterator for InEdges<'_, E> {}

/// Iterator over every distinct edge of the multigraph.
pub struct Edges<'a, E: GraphEdge> {
    directed: bool,
    sources: map::Iter<'a, E::Node, Bucket<E>>,
    source: Option<&'a E::Node>,
    targets: Option<map::Iter<'a, E::Node, Vec<E>>>,
    current: slice::Iter<'a, E>,
}

impl<'a, E: GraphEdge> Iterator for Edges<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edge) = self.current.next() {
                return Some(edge);
            }
            if let (Some(source), Some(targets)) = (self.source, self.targets.as_mut()) {
                if let Some((target, edges)) = targets.next() {
                    // Loops pass; the mirrored half of a pair does not.
                    if self.directed || source <= target {
                        self.current = edges.iter();
                    }
                    continue;
                }
            }
            let (source, bucket) = self.sources.next()?;
            self.source = Some(source);
            self.targets = Some(bucket.iter());
        }
    }
}

impl<E: GraphEdge> FusedIterator for Edges<'_, E> {}
