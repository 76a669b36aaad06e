//! Read-only structural contract shared by both graph variants.

use crate::digraph::DiGraph;
use crate::error::GraphError;
use crate::graph::Graph;

/// The structural view consumed by the traversal and matching algorithms.
///
/// Everything here is read-only; an algorithm generic over `Topology` cannot
/// mutate the graph it walks. For undirected graphs `incoming` is the same
/// list as `neighbors`, so directed-only logic can be gated on [`DIRECTED`]
/// without a second trait.
///
/// [`DIRECTED`]: Topology::DIRECTED
pub trait Topology {
    /// Whether edges are ordered pairs.
    const DIRECTED: bool;

    /// Number of nodes.
    fn order(&self) -> usize;

    /// Node ids in insertion order.
    fn nodes(&self) -> Vec<&str>;

    /// Whether the node is present.
    fn has_node(&self, node: &str) -> bool;

    /// Whether the edge is present (either endpoint order for undirected).
    fn has_edge(&self, u: &str, v: &str) -> bool;

    /// Outgoing adjacency in insertion order.
    fn neighbors(&self, node: &str) -> Result<&[String], GraphError>;

    /// Incoming adjacency; identical to [`neighbors`](Topology::neighbors)
    /// for undirected graphs.
    fn incoming(&self, node: &str) -> Result<&[String], GraphError>;

    /// A copy of the graph with every edge flipped (identity copy when
    /// undirected).
    fn reversed(&self) -> Self
    where
        Self: Sized;
}

impl Topology for Graph {
    const DIRECTED: bool = false;

    fn order(&self) -> usize {
        Graph::order(self)
    }

    fn nodes(&self) -> Vec<&str> {
        Graph::nodes(self)
    }

    fn has_node(&self, node: &str) -> bool {
        Graph::has_node(self, node)
    }

    fn has_edge(&self, u: &str, v: &str) -> bool {
        Graph::has_edge(self, u, v)
    }

    fn neighbors(&self, node: &str) -> Result<&[String], GraphError> {
        Graph::neighbors(self, node)
    }

    fn incoming(&self, node: &str) -> Result<&[String], GraphError> {
        Graph::neighbors(self, node)
    }

    fn reversed(&self) -> Self {
        Graph::reversed(self)
    }
}

impl Topology for DiGraph {
    const DIRECTED: bool = true;

    fn order(&self) -> usize {
        DiGraph::order(self)
    }

    fn nodes(&self) -> Vec<&str> {
        DiGraph::nodes(self)
    }

    fn has_node(&self, node: &str) -> bool {
        DiGraph::has_node(self, node)
    }

    fn has_edge(&self, u: &str, v: &str) -> bool {
        DiGraph::has_edge(self, u, v)
    }

    fn neighbors(&self, node: &str) -> Result<&[String], GraphError> {
        DiGraph::neighbors(self, node)
    }

    fn incoming(&self, node: &str) -> Result<&[String], GraphError> {
        DiGraph::reverse_neighbors(self, node)
    }

    fn reversed(&self) -> Self {
        DiGraph::reversed(self)
    }
}
