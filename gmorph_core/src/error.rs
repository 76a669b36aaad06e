//! Error types for the graph store and its attribute layer.

use thiserror::Error;

/// Errors produced by graph store mutation and lookup.
///
/// Every failure is deterministic and local: a failed call leaves the graph
/// in its previous state, with no partial insert to roll back. There is no
/// recoverable-vs-fatal distinction; all variants are caller-visible.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a node that is not in the graph.
    #[error("node '{0}' not found")]
    MissingNode(String),

    /// An operation referenced an edge that is not in the graph.
    #[error("edge ({0}, {1}) not found")]
    MissingEdge(String, String),

    /// A node insert collided with an existing node.
    #[error("node '{0}' is already present")]
    DuplicateNode(String),

    /// An edge insert collided with an existing edge.
    #[error("edge ({0}, {1}) is already present")]
    DuplicateEdge(String, String),

    /// Attribute keys must be non-empty strings.
    #[error("attribute key must be a non-empty string")]
    InvalidAttrKey,

    /// A reserved attribute was written with the wrong value variant.
    #[error("attribute '{key}' must hold a {expected} value")]
    InvalidAttrValue {
        /// The reserved key that was written.
        key: String,
        /// Human-readable name of the required variant.
        expected: &'static str,
    },

    /// Attribute lookup or deletion referenced a key absent from the record.
    #[error("attribute '{0}' not found")]
    MissingAttr(String),

    /// A generation request asked for more edges than the node count supports.
    #[error("{requested} edges requested but at most {max} are possible")]
    TooManyEdges {
        /// Edge count the caller asked for.
        requested: usize,
        /// Largest edge count a simple graph of that order can hold.
        max: usize,
    },

    /// A generation request supplied a weight range containing no values.
    #[error("weight range {start}..={end} is empty")]
    EmptyWeightRange {
        /// Lower bound of the requested range.
        start: i64,
        /// Upper bound of the requested range.
        end: i64,
    },
}
