//! Connectivity checks built on the traversal engine.

use gmorph_core::Topology;
use tracing::trace;

use crate::traverse::{Discipline, bypass};

/// Whether the graph is connected.
///
/// Undirected: one bypass from an arbitrary start must visit every node.
/// Directed: strong connectivity, certified by that bypass plus a bypass of
/// the reversed graph from the same start. The empty graph is vacuously
/// connected.
pub fn is_connected<G: Topology>(graph: &G) -> bool {
    let nodes = graph.nodes();
    let Some(&start) = nodes.first() else {
        return true;
    };
    if !covers_all(graph, start) {
        trace!(start, "forward bypass did not cover the graph");
        return false;
    }
    if G::DIRECTED {
        let reversed = graph.reversed();
        if !covers_all(&reversed, start) {
            trace!(start, "reverse bypass did not cover the graph");
            return false;
        }
    }
    true
}

fn covers_all<G: Topology>(graph: &G, start: &str) -> bool {
    bypass(graph, start, Discipline::BreadthFirst)
        .map(|visited| visited.len() == graph.order())
        .unwrap_or(false)
}
