//! Directed graph store.

use indexmap::IndexMap;

use crate::attrs::{AttrMap, AttrStore, AttrValue, LABEL_KEY, WEIGHT_KEY};
use crate::error::GraphError;
use crate::graph::remove_entry;

/// A mutable directed graph with attributed nodes and edges.
///
/// Alongside forward adjacency, every node carries a reverse-adjacency list
/// (who points at me) kept in lockstep with every insert and removal, so
/// incoming edges are enumerable without a full scan. Simple graph: at most
/// one edge per ordered pair, self-loops allowed.
#[derive(Debug, Clone)]
pub struct DiGraph {
    name: String,
    weighted: bool,
    forward: IndexMap<String, Vec<String>>,
    reverse: IndexMap<String, Vec<String>>,
    attrs: AttrStore,
}

impl DiGraph {
    /// Creates an empty unweighted directed graph.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weighted: false,
            forward: IndexMap::new(),
            reverse: IndexMap::new(),
            attrs: AttrStore::default(),
        }
    }

    /// Creates an empty weighted directed graph.
    pub fn weighted(name: impl Into<String>) -> Self {
        Self {
            weighted: true,
            ..Self::new(name)
        }
    }

    /// The graph's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether edge weights are considered meaningful.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.forward.len()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> Vec<&str> {
        self.forward.keys().map(String::as_str).collect()
    }

    /// Directed edges (u, v) in insertion order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.attrs
            .edge_keys()
            .map(|(u, v)| (u.as_str(), v.as_str()))
            .collect()
    }

    /// Whether the node is present.
    pub fn has_node(&self, node: &str) -> bool {
        self.forward.contains_key(node)
    }

    /// Whether the directed edge (u, v) is present.
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.forward
            .get(u)
            .is_some_and(|list| list.iter().any(|n| n == v))
    }

    /// Outgoing neighbors of `node` in insertion order.
    pub fn neighbors(&self, node: &str) -> Result<&[String], GraphError> {
        self.forward
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::MissingNode(node.to_owned()))
    }

    /// Nodes with an edge into `node`, in insertion order.
    pub fn reverse_neighbors(&self, node: &str) -> Result<&[String], GraphError> {
        self.reverse
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::MissingNode(node.to_owned()))
    }

    /// Adds a node with default attributes (`weight: 1`, `label: ""`).
    pub fn add_node(&mut self, node: impl Into<String>) -> Result<(), GraphError> {
        self.add_node_with(node, 1, "", AttrMap::new())
    }

    /// Adds a node with the given weight, label, and extra attributes.
    pub fn add_node_with(
        &mut self,
        node: impl Into<String>,
        weight: i64,
        label: &str,
        attrs: AttrMap,
    ) -> Result<(), GraphError> {
        let node = node.into();
        if self.forward.contains_key(&node) {
            return Err(GraphError::DuplicateNode(node));
        }
        AttrStore::validate_record(&attrs)?;

        self.forward.insert(node.clone(), Vec::new());
        self.reverse.insert(node.clone(), Vec::new());
        self.attrs.insert_node_record(&node);
        self.attrs
            .set_node_attr(&node, WEIGHT_KEY, AttrValue::Int(weight))?;
        self.attrs
            .set_node_attr(&node, LABEL_KEY, AttrValue::Str(label.to_owned()))?;
        for (key, value) in attrs {
            self.attrs.set_node_attr(&node, &key, value)?;
        }
        Ok(())
    }

    /// Adds the directed edge (u, v) with default attributes.
    pub fn add_edge(&mut self, u: &str, v: &str) -> Result<(), GraphError> {
        self.add_edge_with(u, v, 1, "", AttrMap::new())
    }

    /// Adds the directed edge (u, v) with the given weight, label, and extra
    /// attributes. (u, v) and (v, u) are distinct edges.
    pub fn add_edge_with(
        &mut self,
        u: &str,
        v: &str,
        weight: i64,
        label: &str,
        attrs: AttrMap,
    ) -> Result<(), GraphError> {
        for endpoint in [u, v] {
            if !self.forward.contains_key(endpoint) {
                return Err(GraphError::MissingNode(endpoint.to_owned()));
            }
        }
        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge(u.to_owned(), v.to_owned()));
        }
        AttrStore::validate_record(&attrs)?;

        self.push_adjacency(u, v);
        self.attrs.insert_edge_record((u.to_owned(), v.to_owned()));
        self.attrs
            .set_edge_attr(u, v, WEIGHT_KEY, AttrValue::Int(weight))?;
        self.attrs
            .set_edge_attr(u, v, LABEL_KEY, AttrValue::Str(label.to_owned()))?;
        for (key, value) in attrs {
            self.attrs.set_edge_attr(u, v, &key, value)?;
        }
        Ok(())
    }

    /// Forward and reverse adjacency inserts, always in lockstep.
    fn push_adjacency(&mut self, u: &str, v: &str) {
        if let Some(list) = self.forward.get_mut(u) {
            list.push(v.to_owned());
        }
        if let Some(list) = self.reverse.get_mut(v) {
            list.push(u.to_owned());
        }
    }

    /// Removes the directed edge (u, v).
    pub fn remove_edge(&mut self, u: &str, v: &str) -> Result<(), GraphError> {
        if !self.has_edge(u, v) {
            return Err(GraphError::MissingEdge(u.to_owned(), v.to_owned()));
        }
        remove_entry(&mut self.forward, u, v);
        remove_entry(&mut self.reverse, v, u);
        self.attrs.remove_edge_record(u, v)
    }

    /// Removes the node and, first, every incident edge in either direction.
    pub fn remove_node(&mut self, node: &str) -> Result<(), GraphError> {
        let incoming = self
            .reverse
            .get(node)
            .cloned()
            .ok_or_else(|| GraphError::MissingNode(node.to_owned()))?;
        for source in incoming {
            self.remove_edge(&source, node)?;
        }
        // Refetched after the incoming pass so a self-loop is not removed twice.
        let outgoing = self.forward.get(node).cloned().unwrap_or_default();
        for target in outgoing {
            self.remove_edge(node, &target)?;
        }
        self.forward.shift_remove(node);
        self.reverse.shift_remove(node);
        self.attrs.remove_node_record(node)
    }

    /// Completes the graph: adds every missing edge between distinct ordered
    /// pairs. Mutates the receiver.
    pub fn complete(&mut self) {
        let nodes: Vec<String> = self.forward.keys().cloned().collect();
        for u in &nodes {
            for v in &nodes {
                if u != v && !self.has_edge(u, v) {
                    self.push_adjacency(u, v);
                    self.attrs.insert_edge_record((u.clone(), v.clone()));
                }
            }
        }
    }

    /// The complement graph: same node set (attributes preserved), holding
    /// exactly the distinct ordered pairs not connected here.
    pub fn complement(&self) -> Self {
        let mut out = Self {
            name: self.name.clone(),
            weighted: self.weighted,
            forward: self.forward.keys().map(|n| (n.clone(), Vec::new())).collect(),
            reverse: self.forward.keys().map(|n| (n.clone(), Vec::new())).collect(),
            attrs: self.attrs.clone_node_records(),
        };
        let nodes: Vec<String> = self.forward.keys().cloned().collect();
        for u in &nodes {
            for v in &nodes {
                if u != v && !self.has_edge(u, v) {
                    out.push_adjacency(u, v);
                    out.attrs.insert_edge_record((u.clone(), v.clone()));
                }
            }
        }
        out
    }

    /// A new graph with every edge's endpoints swapped, preserving node and
    /// edge attributes. The forward and reverse indexes trade places, so this
    /// is a pair of map clones plus an edge-record re-key.
    pub fn reversed(&self) -> Self {
        Self {
            name: self.name.clone(),
            weighted: self.weighted,
            forward: self.reverse.clone(),
            reverse: self.forward.clone(),
            attrs: self.attrs.with_reversed_edges(),
        }
    }

    /// The induced subgraph on `subset`: every directed edge of this graph
    /// with both endpoints in the subset. Attributes are not carried over.
    pub fn induced(&self, subset: &[&str]) -> Self {
        let mut out = Self::new("induced");
        for &node in subset {
            if self.has_node(node) && !out.has_node(node) {
                out.forward.insert(node.to_owned(), Vec::new());
                out.reverse.insert(node.to_owned(), Vec::new());
                out.attrs.insert_node_record(node);
            }
        }
        for &u in subset {
            for &v in subset {
                if self.has_edge(u, v) && !out.has_edge(u, v) {
                    out.push_adjacency(u, v);
                    out.attrs.insert_edge_record((u.to_owned(), v.to_owned()));
                }
            }
        }
        out
    }

    // ### Attribute accessors ###

    /// The node's weight.
    pub fn node_weight(&self, node: &str) -> Result<i64, GraphError> {
        self.attrs
            .node_record(node)?
            .get(WEIGHT_KEY)
            .and_then(AttrValue::as_int)
            .ok_or_else(|| GraphError::MissingAttr(WEIGHT_KEY.to_owned()))
    }

    /// Sets the node's weight.
    pub fn set_node_weight(&mut self, node: &str, weight: i64) -> Result<(), GraphError> {
        self.attrs.set_node_attr(node, WEIGHT_KEY, AttrValue::Int(weight))
    }

    /// The node's label.
    pub fn node_label(&self, node: &str) -> Result<&str, GraphError> {
        self.attrs
            .node_record(node)?
            .get(LABEL_KEY)
            .and_then(AttrValue::as_str)
            .ok_or_else(|| GraphError::MissingAttr(LABEL_KEY.to_owned()))
    }

    /// Sets the node's label.
    pub fn set_node_label(&mut self, node: &str, label: &str) -> Result<(), GraphError> {
        self.attrs
            .set_node_attr(node, LABEL_KEY, AttrValue::Str(label.to_owned()))
    }

    /// The node's full attribute record.
    pub fn node_attrs(&self, node: &str) -> Result<&AttrMap, GraphError> {
        self.attrs.node_record(node)
    }

    /// Upserts one node attribute.
    pub fn set_node_attr(
        &mut self,
        node: &str,
        key: &str,
        value: AttrValue,
    ) -> Result<(), GraphError> {
        self.attrs.set_node_attr(node, key, value)
    }

    /// Deletes one node attribute; fails if the key is absent.
    pub fn remove_node_attr(&mut self, node: &str, key: &str) -> Result<AttrValue, GraphError> {
        self.attrs.remove_node_attr(node, key)
    }

    /// The edge's weight.
    pub fn edge_weight(&self, u: &str, v: &str) -> Result<i64, GraphError> {
        self.attrs
            .edge_record(u, v)?
            .get(WEIGHT_KEY)
            .and_then(AttrValue::as_int)
            .ok_or_else(|| GraphError::MissingAttr(WEIGHT_KEY.to_owned()))
    }

    /// Sets the edge's weight.
    pub fn set_edge_weight(&mut self, u: &str, v: &str, weight: i64) -> Result<(), GraphError> {
        self.attrs.set_edge_attr(u, v, WEIGHT_KEY, AttrValue::Int(weight))
    }

    /// The edge's label.
    pub fn edge_label(&self, u: &str, v: &str) -> Result<&str, GraphError> {
        self.attrs
            .edge_record(u, v)?
            .get(LABEL_KEY)
            .and_then(AttrValue::as_str)
            .ok_or_else(|| GraphError::MissingAttr(LABEL_KEY.to_owned()))
    }

    /// Sets the edge's label.
    pub fn set_edge_label(&mut self, u: &str, v: &str, label: &str) -> Result<(), GraphError> {
        self.attrs
            .set_edge_attr(u, v, LABEL_KEY, AttrValue::Str(label.to_owned()))
    }

    /// The edge's full attribute record.
    pub fn edge_attrs(&self, u: &str, v: &str) -> Result<&AttrMap, GraphError> {
        self.attrs.edge_record(u, v)
    }

    /// Upserts one edge attribute.
    pub fn set_edge_attr(
        &mut self,
        u: &str,
        v: &str,
        key: &str,
        value: AttrValue,
    ) -> Result<(), GraphError> {
        self.attrs.set_edge_attr(u, v, key, value)
    }

    /// Deletes one edge attribute; fails if the key is absent.
    pub fn remove_edge_attr(
        &mut self,
        u: &str,
        v: &str,
        key: &str,
    ) -> Result<AttrValue, GraphError> {
        self.attrs.remove_edge_attr(u, v, key)
    }
}

/// Structural equality, same contract as the undirected variant: node sets,
/// directed edge sets, and attribute records, checked both ways.
impl PartialEq for DiGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().iter().all(|n| other.has_node(n))
            && other.nodes().iter().all(|n| self.has_node(n))
            && self.edges().iter().all(|(u, v)| other.has_edge(u, v))
            && other.edges().iter().all(|(u, v)| self.has_edge(u, v))
            && self.attrs == other.attrs
    }
}
