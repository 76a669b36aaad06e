//! Conversion between graphs and portable documents.
//!
//! [`GraphDoc`] is the serde-facing shape: a flat list of nodes and edges
//! with their weight, label, and extra attributes. Import goes strictly
//! through the public `add_node_with`/`add_edge_with` surface, so a
//! deserialized graph obeys the same invariants as a hand-built one. DOT is
//! supported for export only.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attrs::{AttrMap, AttrValue, LABEL_KEY, WEIGHT_KEY};
use crate::digraph::DiGraph;
use crate::error::GraphError;
use crate::graph::Graph;

/// Errors produced while converting graphs to or from documents.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The document text was not valid JSON for [`GraphDoc`].
    #[error("malformed graph document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document's `directed` flag contradicts the target variant.
    #[error("document describes a {found} graph, expected {expected}")]
    VariantMismatch {
        /// Variant of the graph being built.
        expected: &'static str,
        /// Variant the document declared.
        found: &'static str,
    },

    /// The document violated a graph store invariant (duplicate node, ...).
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A serializable description of one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDoc {
    /// Graph name.
    pub name: String,
    /// Whether edges are ordered pairs.
    pub directed: bool,
    /// Whether edge weights are meaningful.
    #[serde(default)]
    pub weighted: bool,
    /// Node list.
    #[serde(default)]
    pub nodes: Vec<NodeDoc>,
    /// Edge list. Endpoints missing from `nodes` are created with defaults
    /// on import.
    #[serde(default)]
    pub edges: Vec<EdgeDoc>,
}

/// One node entry of a [`GraphDoc`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDoc {
    /// Node id, unique within the document.
    pub id: String,
    /// Node weight, defaulting to 1.
    #[serde(default = "default_weight")]
    pub weight: i64,
    /// Node label, defaulting to empty.
    #[serde(default)]
    pub label: String,
    /// Extra attributes beyond weight and label.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: AttrMap,
}

/// One edge entry of a [`GraphDoc`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDoc {
    /// Source endpoint (either endpoint for undirected documents).
    pub from: String,
    /// Target endpoint.
    pub to: String,
    /// Edge weight, defaulting to 1.
    #[serde(default = "default_weight")]
    pub weight: i64,
    /// Edge label, defaulting to empty.
    #[serde(default)]
    pub label: String,
    /// Extra attributes beyond weight and label.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: AttrMap,
}

fn default_weight() -> i64 {
    1
}

/// Splits a record into (weight, label, extra attributes).
fn split_record(record: Option<&AttrMap>) -> (i64, String, AttrMap) {
    let weight = record
        .and_then(|r| r.get(WEIGHT_KEY))
        .and_then(AttrValue::as_int)
        .unwrap_or(1);
    let label = record
        .and_then(|r| r.get(LABEL_KEY))
        .and_then(AttrValue::as_str)
        .unwrap_or_default()
        .to_owned();
    let extra: AttrMap = record
        .map(|r| {
            r.iter()
                .filter(|(k, _)| k.as_str() != WEIGHT_KEY && k.as_str() != LABEL_KEY)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
        .unwrap_or_default();
    (weight, label, extra)
}

impl Graph {
    /// The document form of this graph.
    pub fn to_doc(&self) -> GraphDoc {
        GraphDoc {
            name: self.name().to_owned(),
            directed: false,
            weighted: self.is_weighted(),
            nodes: self
                .nodes()
                .iter()
                .map(|n| {
                    let (weight, label, attrs) = split_record(self.node_attrs(n).ok());
                    NodeDoc {
                        id: (*n).to_owned(),
                        weight,
                        label,
                        attrs,
                    }
                })
                .collect(),
            edges: self
                .edges()
                .iter()
                .map(|(u, v)| {
                    let (weight, label, attrs) = split_record(self.edge_attrs(u, v).ok());
                    EdgeDoc {
                        from: (*u).to_owned(),
                        to: (*v).to_owned(),
                        weight,
                        label,
                        attrs,
                    }
                })
                .collect(),
        }
    }

    /// Rebuilds an undirected graph from its document form.
    pub fn from_doc(doc: &GraphDoc) -> Result<Self, FormatError> {
        if doc.directed {
            return Err(FormatError::VariantMismatch {
                expected: "undirected",
                found: "directed",
            });
        }
        let mut graph = if doc.weighted {
            Self::weighted(&doc.name)
        } else {
            Self::new(&doc.name)
        };
        for node in &doc.nodes {
            graph.add_node_with(&node.id, node.weight, &node.label, node.attrs.clone())?;
        }
        for edge in &doc.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !graph.has_node(endpoint) {
                    graph.add_node(endpoint.as_str())?;
                }
            }
            graph.add_edge_with(&edge.from, &edge.to, edge.weight, &edge.label, edge.attrs.clone())?;
        }
        Ok(graph)
    }

    /// Serializes the graph as a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(&self.to_doc())?)
    }

    /// Reads an undirected graph from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, FormatError> {
        Self::from_doc(&serde_json::from_str(text)?)
    }

    /// Renders the graph in DOT syntax.
    pub fn to_dot(&self) -> String {
        render_dot(&self.to_doc())
    }
}

impl DiGraph {
    /// The document form of this graph.
    pub fn to_doc(&self) -> GraphDoc {
        GraphDoc {
            name: self.name().to_owned(),
            directed: true,
            weighted: self.is_weighted(),
            nodes: self
                .nodes()
                .iter()
                .map(|n| {
                    let (weight, label, attrs) = split_record(self.node_attrs(n).ok());
                    NodeDoc {
                        id: (*n).to_owned(),
                        weight,
                        label,
                        attrs,
                    }
                })
                .collect(),
            edges: self
                .edges()
                .iter()
                .map(|(u, v)| {
                    let (weight, label, attrs) = split_record(self.edge_attrs(u, v).ok());
                    EdgeDoc {
                        from: (*u).to_owned(),
                        to: (*v).to_owned(),
                        weight,
                        label,
                        attrs,
                    }
                })
                .collect(),
        }
    }

    /// Rebuilds a directed graph from its document form.
    pub fn from_doc(doc: &GraphDoc) -> Result<Self, FormatError> {
        if !doc.directed {
            return Err(FormatError::VariantMismatch {
                expected: "directed",
                found: "undirected",
            });
        }
        let mut graph = if doc.weighted {
            Self::weighted(&doc.name)
        } else {
            Self::new(&doc.name)
        };
        for node in &doc.nodes {
            graph.add_node_with(&node.id, node.weight, &node.label, node.attrs.clone())?;
        }
        for edge in &doc.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !graph.has_node(endpoint) {
                    graph.add_node(endpoint.as_str())?;
                }
            }
            graph.add_edge_with(&edge.from, &edge.to, edge.weight, &edge.label, edge.attrs.clone())?;
        }
        Ok(graph)
    }

    /// Serializes the graph as a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(&self.to_doc())?)
    }

    /// Reads a directed graph from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, FormatError> {
        Self::from_doc(&serde_json::from_str(text)?)
    }

    /// Renders the graph in DOT syntax.
    pub fn to_dot(&self) -> String {
        render_dot(&self.to_doc())
    }
}

fn dot_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn dot_value(value: &AttrValue) -> String {
    match value {
        AttrValue::Int(n) => n.to_string(),
        AttrValue::Str(s) => format!("\"{}\"", dot_escape(s)),
        AttrValue::Bool(b) => b.to_string(),
    }
}

/// DOT attribute list for one node or edge. The weight attribute is emitted
/// only for weighted graphs, matching the import convention that a weight
/// attribute marks a weighted graph.
fn dot_attr_list(weight: i64, label: &str, attrs: &AttrMap, weighted: bool) -> String {
    let mut parts = vec![format!("label=\"{}\"", dot_escape(label))];
    if weighted {
        parts.push(format!("weight={weight}"));
    }
    for (key, value) in attrs {
        parts.push(format!("{key}={}", dot_value(value)));
    }
    format!(" [{}]", parts.join(", "))
}

fn render_dot(doc: &GraphDoc) -> String {
    let (keyword, op) = if doc.directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };
    let mut out = String::new();
    out.push_str(&format!("{keyword} \"{}\" {{\n", dot_escape(&doc.name)));
    for node in &doc.nodes {
        out.push_str(&format!(
            "    \"{}\"{};\n",
            dot_escape(&node.id),
            dot_attr_list(node.weight, &node.label, &node.attrs, doc.weighted)
        ));
    }
    for edge in &doc.edges {
        out.push_str(&format!(
            "    \"{}\" {op} \"{}\"{};\n",
            dot_escape(&edge.from),
            dot_escape(&edge.to),
            dot_attr_list(edge.weight, &edge.label, &edge.attrs, doc.weighted)
        ));
    }
    out.push_str("}\n");
    out
}
