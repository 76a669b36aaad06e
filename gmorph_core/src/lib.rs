//! Graph data model: mutable directed and undirected graphs with attributed
//! nodes and edges.
//!
//! This crate owns the stores ([`Graph`], [`DiGraph`]), their attribute
//! layer ([`AttrValue`] records with reserved `weight`/`label` keys), the
//! read-only [`Topology`] contract the matching crate is generic over,
//! document serialization ([`GraphDoc`], JSON in/out, DOT out), and random
//! fixture generation. The traversal and matching algorithms live in
//! `gmorph_match`.
//!
//! Adjacency lists preserve insertion order, so any walk over a graph built
//! by a fixed sequence of calls is reproducible. Stores are single-threaded:
//! no internal locking, callers serialize writes.

pub mod attrs;
pub mod digraph;
pub mod error;
pub mod generate;
pub mod graph;
pub mod readwrite;
pub mod topology;

pub use attrs::{AttrMap, AttrValue, LABEL_KEY, WEIGHT_KEY};
pub use digraph::DiGraph;
pub use error::GraphError;
pub use graph::Graph;
pub use readwrite::{EdgeDoc, FormatError, GraphDoc, NodeDoc};
pub use topology::Topology;
