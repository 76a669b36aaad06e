//! Attribute records for nodes and edges.
//!
//! Every existing node and edge owns one record: an insertion-ordered
//! key/value map seeded with `{weight: 1, label: ""}`. The two reserved keys
//! are variant-checked on every write, so a record can never hold a
//! non-integer weight or a non-string label.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Reserved key holding the node/edge weight.
pub const WEIGHT_KEY: &str = "weight";
/// Reserved key holding the node/edge label.
pub const LABEL_KEY: &str = "label";

/// A single attribute value.
///
/// Values are a closed set of variants rather than an open `Any`, so the
/// reserved `weight`/`label` contract is checked against the variant instead
/// of a runtime type probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Integer value (the variant required for `weight`).
    Int(i64),
    /// String value (the variant required for `label`).
    Str(String),
    /// Boolean flag.
    Bool(bool),
}

impl AttrValue {
    /// The integer payload, if this is an [`AttrValue::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is an [`AttrValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One attribute record: insertion-ordered key/value pairs.
pub type AttrMap = IndexMap<String, AttrValue>;

/// Rejects empty keys and reserved keys carrying the wrong variant.
fn check_entry(key: &str, value: &AttrValue) -> Result<(), GraphError> {
    if key.is_empty() {
        return Err(GraphError::InvalidAttrKey);
    }
    match (key, value) {
        (WEIGHT_KEY, AttrValue::Int(_)) | (LABEL_KEY, AttrValue::Str(_)) => Ok(()),
        (WEIGHT_KEY, _) => Err(GraphError::InvalidAttrValue {
            key: WEIGHT_KEY.to_owned(),
            expected: "integer",
        }),
        (LABEL_KEY, _) => Err(GraphError::InvalidAttrValue {
            key: LABEL_KEY.to_owned(),
            expected: "string",
        }),
        _ => Ok(()),
    }
}

/// Attribute records for one graph instance.
///
/// Owned by the graph through composition. The graph layer maintains the
/// record-exists-iff-adjacency-exists invariant; this store only enforces
/// key and reserved-value constraints. Undirected graphs canonicalize the
/// edge key before calling in, so one record serves both endpoint orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct AttrStore {
    nodes: IndexMap<String, AttrMap>,
    edges: IndexMap<(String, String), AttrMap>,
}

impl AttrStore {
    fn default_record() -> AttrMap {
        let mut record = AttrMap::new();
        record.insert(WEIGHT_KEY.to_owned(), AttrValue::Int(1));
        record.insert(LABEL_KEY.to_owned(), AttrValue::Str(String::new()));
        record
    }

    /// Checks every entry of a caller-supplied record before any mutation.
    pub(crate) fn validate_record(attrs: &AttrMap) -> Result<(), GraphError> {
        for (key, value) in attrs {
            check_entry(key, value)?;
        }
        Ok(())
    }

    pub(crate) fn insert_node_record(&mut self, node: &str) {
        self.nodes.insert(node.to_owned(), Self::default_record());
    }

    pub(crate) fn insert_edge_record(&mut self, key: (String, String)) {
        self.edges.insert(key, Self::default_record());
    }

    pub(crate) fn remove_node_record(&mut self, node: &str) -> Result<(), GraphError> {
        self.nodes
            .shift_remove(node)
            .map(|_| ())
            .ok_or_else(|| GraphError::MissingNode(node.to_owned()))
    }

    pub(crate) fn remove_edge_record(&mut self, u: &str, v: &str) -> Result<(), GraphError> {
        self.edges
            .shift_remove(&(u.to_owned(), v.to_owned()))
            .map(|_| ())
            .ok_or_else(|| GraphError::MissingEdge(u.to_owned(), v.to_owned()))
    }

    pub(crate) fn node_record(&self, node: &str) -> Result<&AttrMap, GraphError> {
        self.nodes
            .get(node)
            .ok_or_else(|| GraphError::MissingNode(node.to_owned()))
    }

    pub(crate) fn edge_record(&self, u: &str, v: &str) -> Result<&AttrMap, GraphError> {
        self.edges
            .get(&(u.to_owned(), v.to_owned()))
            .ok_or_else(|| GraphError::MissingEdge(u.to_owned(), v.to_owned()))
    }

    pub(crate) fn set_node_attr(
        &mut self,
        node: &str,
        key: &str,
        value: AttrValue,
    ) -> Result<(), GraphError> {
        check_entry(key, &value)?;
        let record = self
            .nodes
            .get_mut(node)
            .ok_or_else(|| GraphError::MissingNode(node.to_owned()))?;
        record.insert(key.to_owned(), value);
        Ok(())
    }

    pub(crate) fn set_edge_attr(
        &mut self,
        u: &str,
        v: &str,
        key: &str,
        value: AttrValue,
    ) -> Result<(), GraphError> {
        check_entry(key, &value)?;
        let record = self
            .edges
            .get_mut(&(u.to_owned(), v.to_owned()))
            .ok_or_else(|| GraphError::MissingEdge(u.to_owned(), v.to_owned()))?;
        record.insert(key.to_owned(), value);
        Ok(())
    }

    pub(crate) fn remove_node_attr(
        &mut self,
        node: &str,
        key: &str,
    ) -> Result<AttrValue, GraphError> {
        let record = self
            .nodes
            .get_mut(node)
            .ok_or_else(|| GraphError::MissingNode(node.to_owned()))?;
        record
            .shift_remove(key)
            .ok_or_else(|| GraphError::MissingAttr(key.to_owned()))
    }

    pub(crate) fn remove_edge_attr(
        &mut self,
        u: &str,
        v: &str,
        key: &str,
    ) -> Result<AttrValue, GraphError> {
        let record = self
            .edges
            .get_mut(&(u.to_owned(), v.to_owned()))
            .ok_or_else(|| GraphError::MissingEdge(u.to_owned(), v.to_owned()))?;
        record
            .shift_remove(key)
            .ok_or_else(|| GraphError::MissingAttr(key.to_owned()))
    }

    /// Edge keys in insertion order.
    pub(crate) fn edge_keys(&self) -> impl Iterator<Item = &(String, String)> {
        self.edges.keys()
    }

    /// A store holding clones of the node records and no edge records.
    pub(crate) fn clone_node_records(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            edges: IndexMap::new(),
        }
    }

    /// A store with every edge record re-keyed to the flipped endpoint order.
    pub(crate) fn with_reversed_edges(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            edges: self
                .edges
                .iter()
                .map(|((u, v), record)| ((v.clone(), u.clone()), record.clone()))
                .collect(),
        }
    }
}
