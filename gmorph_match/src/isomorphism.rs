//! Graph isomorphism detection.
//!
//! The engine partitions both node sets by a relabeling-invariant key
//! (degree plus the sorted multiset of neighbor degrees) and then runs a
//! backtracking search group by group, smallest group first. The invariant
//! pruning makes the common case near-linear; the worst case stays
//! exponential, as it must. Attributes are ignored: only topology is
//! matched.

use std::collections::HashMap;

use gmorph_core::Topology;
use indexmap::IndexMap;
use tracing::{debug, trace};

/// A bijection between the node sets of two graphs, with O(1) lookup in both
/// directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bijection {
    forward: HashMap<String, String>,
    inverse: HashMap<String, String>,
}

impl Bijection {
    /// Number of mapped pairs.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether no pair is mapped.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The image of a first-graph node, if mapped.
    pub fn image(&self, node: &str) -> Option<&str> {
        self.forward.get(node).map(String::as_str)
    }

    /// The pre-image of a second-graph node, if mapped.
    pub fn preimage(&self, node: &str) -> Option<&str> {
        self.inverse.get(node).map(String::as_str)
    }

    /// Mapped pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forward.iter().map(|(x, y)| (x.as_str(), y.as_str()))
    }

    fn insert(&mut self, x: &str, y: &str) {
        self.forward.insert(x.to_owned(), y.to_owned());
        self.inverse.insert(y.to_owned(), x.to_owned());
    }

    fn remove(&mut self, x: &str, y: &str) {
        self.forward.remove(x);
        self.inverse.remove(y);
    }
}

/// Invariant key: (degree, sorted neighbor-degree multiset). Preserved under
/// relabeling, so nodes can only map within the same key's group.
type InvariantKey = (usize, Vec<usize>);

fn invariant_key<G: Topology>(graph: &G, node: &str) -> InvariantKey {
    let neighbors = graph.neighbors(node).unwrap_or_default();
    let mut around: Vec<usize> = neighbors
        .iter()
        .map(|n| graph.neighbors(n).unwrap_or_default().len())
        .collect();
    around.sort_unstable();
    (neighbors.len(), around)
}

/// Groups both node sets by invariant key, ordered smallest group first.
/// `None` when any group's sizes disagree — a necessary condition for
/// isomorphism fails.
fn partition<G: Topology>(g1: &G, g2: &G) -> Option<Vec<(Vec<String>, Vec<String>)>> {
    let mut groups: IndexMap<InvariantKey, (Vec<String>, Vec<String>)> = IndexMap::new();
    for node in g1.nodes() {
        groups
            .entry(invariant_key(g1, node))
            .or_default()
            .0
            .push(node.to_owned());
    }
    for node in g2.nodes() {
        groups
            .entry(invariant_key(g2, node))
            .or_default()
            .1
            .push(node.to_owned());
    }
    if groups.values().any(|(a, b)| a.len() != b.len()) {
        debug!("invariant group sizes disagree, graphs cannot be isomorphic");
        return None;
    }
    let mut ordered: Vec<(Vec<String>, Vec<String>)> = groups.into_values().collect();
    // Smallest search space first; the sort is stable, so the order stays
    // deterministic for equal sizes.
    ordered.sort_by_key(|(a, _)| a.len());
    Some(ordered)
}

/// Whether extending the mapping with x -> y keeps every already-mapped
/// adjacency consistent in both graphs. `x`'s image is taken to be `y`
/// during the check, which also covers self-loops.
fn consistent<G: Topology>(g1: &G, g2: &G, mapping: &Bijection, x: &str, y: &str) -> bool {
    for z in g1.neighbors(x).unwrap_or_default() {
        let image = if z.as_str() == x { Some(y) } else { mapping.image(z) };
        if let Some(iz) = image {
            if !g2.has_edge(y, iz) {
                return false;
            }
        }
    }
    for w in g2.neighbors(y).unwrap_or_default() {
        let pre = if w.as_str() == y { Some(x) } else { mapping.preimage(w) };
        if let Some(pw) = pre {
            if !g1.has_edge(x, pw) {
                return false;
            }
        }
    }
    if G::DIRECTED {
        // Forward adjacency only covers out-edges; the mirror checks over
        // incoming adjacency keep in-edges preserved as well.
        for z in g1.incoming(x).unwrap_or_default() {
            let image = if z.as_str() == x { Some(y) } else { mapping.image(z) };
            if let Some(iz) = image {
                if !g2.has_edge(iz, y) {
                    return false;
                }
            }
        }
        for w in g2.incoming(y).unwrap_or_default() {
            let pre = if w.as_str() == y { Some(x) } else { mapping.preimage(w) };
            if let Some(pw) = pre {
                if !g1.has_edge(pw, x) {
                    return false;
                }
            }
        }
    }
    true
}

/// Searches for an adjacency-preserving bijection from `g1`'s node set onto
/// `g2`'s.
///
/// Returns the first complete bijection found, or `None` if the graphs are
/// not isomorphic. The result is deterministic for a fixed pair of build
/// sequences but is not guaranteed to be the lexicographically smallest
/// valid mapping.
pub fn isomorphism<G: Topology>(g1: &G, g2: &G) -> Option<Bijection> {
    if g1.order() != g2.order() {
        debug!(left = g1.order(), right = g2.order(), "order mismatch");
        return None;
    }
    let groups = partition(g1, g2)?;
    debug!(order = g1.order(), groups = groups.len(), "invariant partition built");

    // Flatten the group order into slots: slot k assigns the k-th first-graph
    // node and draws candidates from its group's second-graph side.
    let mut slots: Vec<(String, usize)> = Vec::new();
    for (group_idx, (left, _)) in groups.iter().enumerate() {
        for node in left {
            slots.push((node.clone(), group_idx));
        }
    }

    // Backtracking with an explicit frame stack instead of recursion: each
    // committed slot records the candidate index it took, so backtracking
    // resumes that slot from the next candidate. Bounded by node count, not
    // call depth.
    let mut mapping = Bijection::default();
    let mut frames: Vec<usize> = Vec::new();
    let mut cursor = 0usize;

    loop {
        let slot = frames.len();
        if slot == slots.len() {
            return Some(mapping);
        }
        let (x, group_idx) = &slots[slot];
        let candidates = &groups[*group_idx].1;

        let mut chosen = None;
        while cursor < candidates.len() {
            let y = &candidates[cursor];
            if mapping.preimage(y).is_none() && consistent(g1, g2, &mapping, x, y) {
                chosen = Some(cursor);
                break;
            }
            cursor += 1;
        }

        match chosen {
            Some(candidate_idx) => {
                mapping.insert(x, &candidates[candidate_idx]);
                frames.push(candidate_idx);
                cursor = 0;
            }
            None => {
                // Undo the most recent assignment and resume after it; an
                // empty stack means the search space is exhausted.
                let candidate_idx = frames.pop()?;
                let (px, pgroup) = &slots[frames.len()];
                mapping.remove(px, &groups[*pgroup].1[candidate_idx]);
                trace!(slot = frames.len(), "backtracking");
                cursor = candidate_idx + 1;
            }
        }
    }
}
