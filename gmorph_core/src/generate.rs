//! Random graph builders for tests and experiments.
//!
//! Node ids are `"0"` through `"n-1"`; the requested number of edges is drawn
//! by shuffling the full candidate pair list, so every simple graph of the
//! given order and size is reachable. Pass a seeded [`Rng`] for reproducible
//! fixtures.

use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::RangeInclusive;

use crate::attrs::AttrMap;
use crate::digraph::DiGraph;
use crate::error::GraphError;
use crate::graph::Graph;
use tracing::debug;

/// An inverted range like `5..=1` would panic inside `gen_range`; surface it
/// as an error instead.
fn check_weight_range(weight_range: &RangeInclusive<i64>) -> Result<(), GraphError> {
    if weight_range.is_empty() {
        return Err(GraphError::EmptyWeightRange {
            start: *weight_range.start(),
            end: *weight_range.end(),
        });
    }
    Ok(())
}

/// Builds a random undirected graph with the thread-local generator.
pub fn random_graph(
    nodes: usize,
    edges: usize,
    weight_range: RangeInclusive<i64>,
) -> Result<Graph, GraphError> {
    random_graph_with(&mut rand::thread_rng(), nodes, edges, weight_range)
}

/// Builds a random undirected graph of `nodes` vertices and exactly `edges`
/// distinct edges, weights drawn uniformly from `weight_range`.
///
/// Fails before any work: [`GraphError::EmptyWeightRange`] if `weight_range`
/// contains no values, [`GraphError::TooManyEdges`] if `edges` exceeds
/// `n·(n−1)/2`.
pub fn random_graph_with<R: Rng + ?Sized>(
    rng: &mut R,
    nodes: usize,
    edges: usize,
    weight_range: RangeInclusive<i64>,
) -> Result<Graph, GraphError> {
    check_weight_range(&weight_range)?;
    let max = nodes * nodes.saturating_sub(1) / 2;
    if edges > max {
        return Err(GraphError::TooManyEdges {
            requested: edges,
            max,
        });
    }

    let mut graph = Graph::weighted("random-graph");
    for i in 0..nodes {
        graph.add_node(i.to_string())?;
    }

    let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(max);
    for x in 0..nodes {
        for y in 0..x {
            pairs.push((x, y));
        }
    }
    pairs.shuffle(rng);

    for &(x, y) in pairs.iter().take(edges) {
        let weight = rng.gen_range(weight_range.clone());
        graph.add_edge_with(&x.to_string(), &y.to_string(), weight, "", AttrMap::new())?;
    }
    debug!(nodes, edges, "generated random graph");
    Ok(graph)
}

/// Builds a random directed graph with the thread-local generator.
pub fn random_digraph(
    nodes: usize,
    edges: usize,
    weight_range: RangeInclusive<i64>,
) -> Result<DiGraph, GraphError> {
    random_digraph_with(&mut rand::thread_rng(), nodes, edges, weight_range)
}

/// Builds a random directed graph of `nodes` vertices and exactly `edges`
/// distinct directed edges, weights drawn uniformly from `weight_range`.
///
/// Fails before any work: [`GraphError::EmptyWeightRange`] if `weight_range`
/// contains no values, [`GraphError::TooManyEdges`] if `edges` exceeds
/// `n·(n−1)`.
pub fn random_digraph_with<R: Rng + ?Sized>(
    rng: &mut R,
    nodes: usize,
    edges: usize,
    weight_range: RangeInclusive<i64>,
) -> Result<DiGraph, GraphError> {
    check_weight_range(&weight_range)?;
    let max = nodes * nodes.saturating_sub(1);
    if edges > max {
        return Err(GraphError::TooManyEdges {
            requested: edges,
            max,
        });
    }

    let mut graph = DiGraph::weighted("random-digraph");
    for i in 0..nodes {
        graph.add_node(i.to_string())?;
    }

    let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(max);
    for x in 0..nodes {
        for y in 0..nodes {
            if x != y {
                pairs.push((x, y));
            }
        }
    }
    pairs.shuffle(rng);

    for &(x, y) in pairs.iter().take(edges) {
        let weight = rng.gen_range(weight_range.clone());
        graph.add_edge_with(&x.to_string(), &y.to_string(), weight, "", AttrMap::new())?;
    }
    debug!(nodes, edges, "generated random digraph");
    Ok(graph)
}
