//! Traversal, connectivity, and structural matching over `gmorph_core`
//! graphs.
//!
//! Everything here takes graphs by shared reference through the
//! [`Topology`](gmorph_core::Topology) contract and never mutates them.
//! Single-threaded by design: a backtracking search is inherently sequential
//! state, so callers wanting parallelism run independent searches on
//! separate graphs.

pub mod connectivity;
pub mod isomorphism;
pub mod subgraph;
pub mod traverse;

pub use connectivity::is_connected;
pub use isomorphism::{Bijection, isomorphism};
pub use subgraph::{SubgraphMatch, find_subgraph};
pub use traverse::{Discipline, all_simple_paths, bypass, find_path};
