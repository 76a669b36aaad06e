//! Frontier-driven traversal primitives.
//!
//! All three operations share one shape: a work list seeded with the start
//! node, popped under a FIFO or LIFO [`Discipline`]. Neighbors are always
//! pushed in the graph's intrinsic adjacency order, never from a re-sorted
//! set, so for a fixed build sequence the output order is fully determined
//! by the discipline.

use std::collections::{HashSet, VecDeque};

use gmorph_core::{GraphError, Topology};

/// Frontier discipline selecting the exploration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Discipline {
    /// FIFO frontier: breadth-first exploration.
    BreadthFirst,
    /// LIFO frontier: depth-first exploration.
    DepthFirst,
}

/// FIFO or LIFO work list over owned items.
enum Frontier<T> {
    Queue(VecDeque<T>),
    Stack(Vec<T>),
}

impl<T> Frontier<T> {
    fn new(discipline: Discipline) -> Self {
        match discipline {
            Discipline::BreadthFirst => Self::Queue(VecDeque::new()),
            Discipline::DepthFirst => Self::Stack(Vec::new()),
        }
    }

    fn push(&mut self, item: T) {
        match self {
            Self::Queue(queue) => queue.push_back(item),
            Self::Stack(stack) => stack.push(item),
        }
    }

    fn pop(&mut self) -> Option<T> {
        match self {
            Self::Queue(queue) => queue.pop_front(),
            Self::Stack(stack) => stack.pop(),
        }
    }
}

/// Walks every node reachable from `start`, returning them in visitation
/// order, each exactly once.
pub fn bypass<G: Topology>(
    graph: &G,
    start: &str,
    discipline: Discipline,
) -> Result<Vec<String>, GraphError> {
    if !graph.has_node(start) {
        return Err(GraphError::MissingNode(start.to_owned()));
    }

    let mut visited: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut frontier = Frontier::new(discipline);
    frontier.push(start.to_owned());

    while let Some(node) = frontier.pop() {
        if !seen.insert(node.clone()) {
            continue;
        }
        for neighbor in graph.neighbors(&node)? {
            if !seen.contains(neighbor) {
                frontier.push(neighbor.clone());
            }
        }
        visited.push(node);
    }
    Ok(visited)
}

/// The first simple path from `start` to `target` discovered under the
/// discipline, inclusive of both endpoints, or `None` if unreachable.
///
/// Under [`Discipline::BreadthFirst`] the returned path has the fewest edges
/// among those the expansion order reaches; under
/// [`Discipline::DepthFirst`] it is merely some path.
pub fn find_path<G: Topology>(
    graph: &G,
    start: &str,
    target: &str,
    discipline: Discipline,
) -> Result<Option<Vec<String>>, GraphError> {
    for endpoint in [start, target] {
        if !graph.has_node(endpoint) {
            return Err(GraphError::MissingNode(endpoint.to_owned()));
        }
    }

    let mut frontier = Frontier::new(discipline);
    frontier.push((start.to_owned(), vec![start.to_owned()]));

    while let Some((node, path)) = frontier.pop() {
        for neighbor in graph.neighbors(&node)? {
            if path.iter().any(|p| p == neighbor) {
                continue;
            }
            let mut next = path.clone();
            next.push(neighbor.clone());
            if neighbor.as_str() == target {
                return Ok(Some(next));
            }
            frontier.push((neighbor.clone(), next));
        }
    }
    Ok(None)
}

/// Every simple path from `start` to `target`, in the order the discipline
/// discovers them.
///
/// Each candidate path carries its own visited set (the path itself), so the
/// enumeration terminates on finite graphs even in the presence of cycles.
pub fn all_simple_paths<G: Topology>(
    graph: &G,
    start: &str,
    target: &str,
    discipline: Discipline,
) -> Result<Vec<Vec<String>>, GraphError> {
    for endpoint in [start, target] {
        if !graph.has_node(endpoint) {
            return Err(GraphError::MissingNode(endpoint.to_owned()));
        }
    }

    let mut found: Vec<Vec<String>> = Vec::new();
    let mut frontier = Frontier::new(discipline);
    frontier.push((start.to_owned(), vec![start.to_owned()]));

    while let Some((node, path)) = frontier.pop() {
        for neighbor in graph.neighbors(&node)? {
            if path.iter().any(|p| p == neighbor) {
                continue;
            }
            let mut next = path.clone();
            next.push(neighbor.clone());
            if neighbor.as_str() == target {
                found.push(next);
            } else {
                frontier.push((neighbor.clone(), next));
            }
        }
    }
    Ok(found)
}
