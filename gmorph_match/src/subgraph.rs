//! Brute-force subgraph search.
//!
//! Enumerates every host-node combination of pattern order, keeps the ones
//! whose induced subgraph is connected, and tests each against the pattern
//! with the isomorphism engine. Binomial in host order by construction; the
//! underlying problem is NP-hard, so no general polynomial algorithm exists
//! to reach for.

use gmorph_core::Graph;
use itertools::Itertools;
use tracing::{debug, info};

use crate::connectivity::is_connected;
use crate::isomorphism::{Bijection, isomorphism};

/// A successful subgraph search: the matched host region and how it maps
/// onto the pattern.
#[derive(Debug, Clone)]
pub struct SubgraphMatch {
    /// The connected induced subgraph of the host that matched.
    pub witness: Graph,
    /// Bijection from witness nodes onto pattern nodes.
    pub bijection: Bijection,
}

/// Searches the host for a connected induced subgraph isomorphic to the
/// pattern. Both graphs are undirected and simple; attributes are ignored.
///
/// Only proper subgraphs qualify: a pattern whose order is not strictly
/// smaller than the host's is never found. The first combination (in
/// enumeration order) that is connected and isomorphic wins; which witness
/// that is carries no stability guarantee, only that one is found whenever
/// one exists.
pub fn find_subgraph(host: &Graph, pattern: &Graph) -> Option<SubgraphMatch> {
    if pattern.order() >= host.order() {
        debug!(
            host = host.order(),
            pattern = pattern.order(),
            "pattern is not a proper subgraph candidate"
        );
        return None;
    }

    info!(
        host = host.order(),
        pattern = pattern.order(),
        "starting subgraph search"
    );
    let nodes = host.nodes();
    for combination in nodes.iter().copied().combinations(pattern.order()) {
        let induced = host.induced(&combination);
        if !is_connected(&induced) {
            continue;
        }
        if let Some(bijection) = isomorphism(&induced, pattern) {
            debug!(witness = ?combination, "witness found");
            return Some(SubgraphMatch {
                witness: induced,
                bijection,
            });
        }
    }
    debug!("search space exhausted, no witness");
    None
}
