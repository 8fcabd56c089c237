//! Iteration engine tests: nodes, neighbors, in/out edges and edge listing.

use multigraph::graph::MultiGraph;
use multigraph::types::edge::Edge;
use multigraph::types::error::GraphError;

fn e(source: u32, target: u32, weight: i64) -> Edge<u32> {
    Edge::new(source, target, weight)
}

// ==================== Node Iteration ====================

#[test]
fn test_nodes_in_insertion_order() {
    let mut graph: MultiGraph<Edge<u32>> = MultiGraph::new(true);
    graph.add_node(3);
    graph.add_edge(e(1, 2, 1));
    graph.add_node(0);
    let nodes: Vec<u32> = graph.nodes().copied().collect();
    assert_eq!(nodes, vec![3, 1, 2, 0]);
    assert_eq!(graph.nodes().len(), 4);
}

#[test]
fn test_neighbors() {
    let mut graph = MultiGraph::new(false);
    graph.add_edge(e(1, 2, 1));
    graph.add_edge(e(1, 2, 1));
    graph.add_edge(e(3, 1, 1));
    graph.add_edge(e(1, 1, 1));
    let mut neighbors: Vec<u32> = graph.neighbors(&1).unwrap().copied().collect();
    neighbors.sort();
    assert_eq!(neighbors, vec![1, 2, 3]);
    assert_eq!(graph.neighbors(&2).unwrap().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_iteration_on_missing_node() {
    let graph: MultiGraph<Edge<u32>> = MultiGraph::new(true);
    assert!(matches!(graph.neighbors(&7), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(graph.out_edges(&7), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(graph.in_edges(&7), Err(GraphError::NodeNotFound(_))));
}

// ==================== Edge Iteration ====================

#[test]
fn test_out_edges_directed() {
    let mut graph = MultiGraph::new(true);
    graph.add_edge(e(1, 2, 5));
    graph.add_edge(e(1, 3, 6));
    graph.add_edge(e(1, 2, 7));
    graph.add_edge(e(2, 1, 8));
    let out: Vec<Edge<u32>> = graph.out_edges(&1).unwrap().cloned().collect();
    assert_eq!(out, vec![e(1, 2, 5), e(1, 2, 7), e(1, 3, 6)]);
}

#[test]
fn test_in_edges_directed() {
    let mut graph = MultiGraph::new(true);
    graph.add_edge(e(1, 2, 5));
    graph.add_edge(e(3, 2, 6));
    graph.add_edge(e(2, 2, 7));
    graph.add_edge(e(2, 1, 8));
    let mut incoming: Vec<Edge<u32>> = graph.in_edges(&2).unwrap().collect();
    incoming.sort();
    assert_eq!(incoming, vec![e(1, 2, 5), e(2, 2, 7), e(3, 2, 6)]);
}

#[test]
fn test_in_edges_undirected_are_inverted() {
    let mut graph = MultiGraph::new(false);
    graph.add_edge(e(1, 2, 5));
    graph.add_edge(e(3, 1, 6));
    graph.add_edge(e(1, 1, 7));
    let mut incoming: Vec<Edge<u32>> = graph.in_edges(&1).unwrap().collect();
    incoming.sort();
    assert_eq!(incoming, vec![e(1, 1, 7), e(2, 1, 5), e(3, 1, 6)]);
    assert!(incoming.iter().all(|edge| edge.target == 1));
}

#[test]
fn test_edges_directed_yields_all() {
    let mut graph = MultiGraph::new(true);
    graph.add_edge(e(1, 2, 1));
    graph.add_edge(e(2, 1, 1));
    graph.add_edge(e(2, 2, 1));
    graph.add_edge(e(2, 2, 1));
    assert_eq!(graph.edges().count(), 4);
    assert_eq!(graph.edges().count(), graph.size());
}

#[test]
fn test_edges_undirected_yields_each_once() {
    let mut graph = MultiGraph::new(false);
    graph.add_edge(e(2, 1, 1));
    graph.add_edge(e(1, 2, 2));
    graph.add_edge(e(3, 3, 3));
    graph.add_edge(e(3, 1, 4));
    let mut edges: Vec<Edge<u32>> = graph.edges().cloned().collect();
    edges.sort();
    assert_eq!(edges, vec![e(1, 2, 1), e(1, 2, 2), e(1, 3, 4), e(3, 3, 3)]);
    assert_eq!(edges.len(), graph.size());
    assert!(edges.iter().all(|edge| edge.source <= edge.target));
}

#[test]
fn test_empty_graph_iterators() {
    let graph: MultiGraph<Edge<u32>> = MultiGraph::default();
    assert_eq!(graph.nodes().count(), 0);
    assert_eq!(graph.edges().count(), 0);
}
