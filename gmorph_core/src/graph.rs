//! Undirected graph store.

use indexmap::IndexMap;

use crate::attrs::{AttrMap, AttrStore, AttrValue, LABEL_KEY, WEIGHT_KEY};
use crate::error::GraphError;

/// Canonical key order for an undirected edge: one record serves (u,v) and (v,u).
fn edge_key<'a>(u: &'a str, v: &'a str) -> (&'a str, &'a str) {
    if u <= v { (u, v) } else { (v, u) }
}

/// A mutable undirected graph with attributed nodes and edges.
///
/// Simple graph: at most one edge per unordered pair, self-loops allowed.
/// Adjacency lists keep insertion order, so traversal output is reproducible
/// for a fixed build sequence. The attribute store is owned by composition
/// and kept in lockstep with adjacency: a record exists iff the node or edge
/// exists.
#[derive(Debug, Clone)]
pub struct Graph {
    name: String,
    weighted: bool,
    adjacency: IndexMap<String, Vec<String>>,
    attrs: AttrStore,
}

impl Graph {
    /// Creates an empty unweighted graph.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weighted: false,
            adjacency: IndexMap::new(),
            attrs: AttrStore::default(),
        }
    }

    /// Creates an empty weighted graph.
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
        self.adjacency.len()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> Vec<&str> {
        self.adjacency.keys().map(String::as_str).collect()
    }

    /// Edges in insertion order, one entry per logical edge in canonical
    /// endpoint order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.attrs
            .edge_keys()
            .map(|(u, v)| (u.as_str(), v.as_str()))
            .collect()
    }

    /// Whether the node is present.
    pub fn has_node(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Whether the edge is present, in either endpoint order.
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|list| list.iter().any(|n| n == v))
    }

    /// Neighbors of `node` in insertion order.
    pub fn neighbors(&self, node: &str) -> Result<&[String], GraphError> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::MissingNode(node.to_owned()))
    }

    /// Adds a node with default attributes (`weight: 1`, `label: ""`).
    pub fn add_node(&mut self, node: impl Into<String>) -> Result<(), GraphError> {
        self.add_node_with(node, 1, "", AttrMap::new())
    }

    /// Adds a node with the given weight, label, and extra attributes.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if the id is taken; invalid
    /// attribute entries are rejected before any mutation. Entries in
    /// `attrs` win over the `weight`/`label` arguments.
    pub fn add_node_with(
        &mut self,
        node: impl Into<String>,
        weight: i64,
        label: &str,
        attrs: AttrMap,
    ) -> Result<(), GraphError> {
        let node = node.into();
        if self.adjacency.contains_key(&node) {
            return Err(GraphError::DuplicateNode(node));
        }
        AttrStore::validate_record(&attrs)?;

        self.adjacency.insert(node.clone(), Vec::new());
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

    /// Adds an edge with default attributes.
    pub fn add_edge(&mut self, u: &str, v: &str) -> Result<(), GraphError> {
        self.add_edge_with(u, v, 1, "", AttrMap::new())
    }

    /// Adds the edge (u, v) with the given weight, label, and extra attributes.
    ///
    /// Fails with [`GraphError::MissingNode`] if an endpoint is absent and
    /// [`GraphError::DuplicateEdge`] if the edge exists in either order.
    /// A self-loop stores a single adjacency entry.
    pub fn add_edge_with(
        &mut self,
        u: &str,
        v: &str,
        weight: i64,
        label: &str,
        attrs: AttrMap,
    ) -> Result<(), GraphError> {
        for endpoint in [u, v] {
            if !self.adjacency.contains_key(endpoint) {
                return Err(GraphError::MissingNode(endpoint.to_owned()));
            }
        }
        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge(u.to_owned(), v.to_owned()));
        }
        AttrStore::validate_record(&attrs)?;

        self.push_adjacency(u, v);
        let (cu, cv) = edge_key(u, v);
        self.attrs.insert_edge_record((cu.to_owned(), cv.to_owned()));
        let (cu, cv) = (cu.to_owned(), cv.to_owned());
        self.attrs
            .set_edge_attr(&cu, &cv, WEIGHT_KEY, AttrValue::Int(weight))?;
        self.attrs
            .set_edge_attr(&cu, &cv, LABEL_KEY, AttrValue::Str(label.to_owned()))?;
        for (key, value) in attrs {
            self.attrs.set_edge_attr(&cu, &cv, &key, value)?;
        }
        Ok(())
    }

    /// Symmetric adjacency insert; a self-loop gets one entry, not two.
    fn push_adjacency(&mut self, u: &str, v: &str) {
        if let Some(list) = self.adjacency.get_mut(u) {
            list.push(v.to_owned());
        }
        if u != v {
            if let Some(list) = self.adjacency.get_mut(v) {
                list.push(u.to_owned());
            }
        }
    }

    /// Removes the edge (u, v), accepted in either endpoint order.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> Result<(), GraphError> {
        if !self.has_edge(u, v) {
            return Err(GraphError::MissingEdge(u.to_owned(), v.to_owned()));
        }
        remove_entry(&mut self.adjacency, u, v);
        if u != v {
            remove_entry(&mut self.adjacency, v, u);
        }
        let (cu, cv) = edge_key(u, v);
        self.attrs.remove_edge_record(cu, cv)
    }

    /// Removes the node and, first, every edge incident to it.
    pub fn remove_node(&mut self, node: &str) -> Result<(), GraphError> {
        let incident = self
            .adjacency
            .get(node)
            .cloned()
            .ok_or_else(|| GraphError::MissingNode(node.to_owned()))?;
        for neighbor in incident {
            self.remove_edge(node, &neighbor)?;
        }
        self.adjacency.shift_remove(node);
        self.attrs.remove_node_record(node)
    }

    /// Completes the graph: adds every missing edge between distinct nodes.
    /// Mutates the receiver.
    pub fn complete(&mut self) {
        let nodes: Vec<String> = self.adjacency.keys().cloned().collect();
        for (i, u) in nodes.iter().enumerate() {
            for v in &nodes[i + 1..] {
                if !self.has_edge(u, v) {
                    self.push_adjacency(u, v);
                    let (cu, cv) = edge_key(u, v);
                    self.attrs.insert_edge_record((cu.to_owned(), cv.to_owned()));
                }
            }
        }
    }

    /// The complement graph: same node set (attributes preserved), holding
    /// exactly the distinct pairs not connected here. The receiver is
    /// untouched.
    pub fn complement(&self) -> Self {
        let mut out = Self {
            name: self.name.clone(),
            weighted: self.weighted,
            adjacency: self.adjacency.keys().map(|n| (n.clone(), Vec::new())).collect(),
            attrs: self.attrs.clone_node_records(),
        };
        let nodes: Vec<String> = self.adjacency.keys().cloned().collect();
        for (i, u) in nodes.iter().enumerate() {
            for v in &nodes[i + 1..] {
                if !self.has_edge(u, v) {
                    out.push_adjacency(u, v);
                    let (cu, cv) = edge_key(u, v);
                    out.attrs.insert_edge_record((cu.to_owned(), cv.to_owned()));
                }
            }
        }
        out
    }

    /// Identity copy; edge direction is meaningless for undirected graphs.
    pub fn reversed(&self) -> Self {
        self.clone()
    }

    /// The induced subgraph on `subset`: every edge of this graph with both
    /// endpoints in the subset. Node and edge attributes are not carried
    /// over; the result is structural evidence, not a data copy.
    pub fn induced(&self, subset: &[&str]) -> Self {
        let mut out = Self::new("induced");
        for &node in subset {
            if self.has_node(node) && !out.has_node(node) {
                out.adjacency.insert(node.to_owned(), Vec::new());
                out.attrs.insert_node_record(node);
            }
        }
        for (i, &u) in subset.iter().enumerate() {
            for &v in &subset[i..] {
                if self.has_edge(u, v) && !out.has_edge(u, v) {
                    out.push_adjacency(u, v);
                    let (cu, cv) = edge_key(u, v);
                    out.attrs.insert_edge_record((cu.to_owned(), cv.to_owned()));
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

    /// The edge's weight, addressable from either endpoint order.
    pub fn edge_weight(&self, u: &str, v: &str) -> Result<i64, GraphError> {
        let (cu, cv) = edge_key(u, v);
        self.attrs
            .edge_record(cu, cv)?
            .get(WEIGHT_KEY)
            .and_then(AttrValue::as_int)
            .ok_or_else(|| GraphError::MissingAttr(WEIGHT_KEY.to_owned()))
    }

    /// Sets the edge's weight.
    pub fn set_edge_weight(&mut self, u: &str, v: &str, weight: i64) -> Result<(), GraphError> {
        let (cu, cv) = edge_key(u, v);
        self.attrs.set_edge_attr(cu, cv, WEIGHT_KEY, AttrValue::Int(weight))
    }

    /// The edge's label.
    pub fn edge_label(&self, u: &str, v: &str) -> Result<&str, GraphError> {
        let (cu, cv) = edge_key(u, v);
        self.attrs
            .edge_record(cu, cv)?
            .get(LABEL_KEY)
            .and_then(AttrValue::as_str)
            .ok_or_else(|| GraphError::MissingAttr(LABEL_KEY.to_owned()))
    }

    /// Sets the edge's label.
    pub fn set_edge_label(&mut self, u: &str, v: &str, label: &str) -> Result<(), GraphError> {
        let (cu, cv) = edge_key(u, v);
        self.attrs
            .set_edge_attr(cu, cv, LABEL_KEY, AttrValue::Str(label.to_owned()))
    }

    /// The edge's full attribute record (shared between both endpoint orders).
    pub fn edge_attrs(&self, u: &str, v: &str) -> Result<&AttrMap, GraphError> {
        let (cu, cv) = edge_key(u, v);
        self.attrs.edge_record(cu, cv)
    }

    /// Upserts one edge attribute.
    pub fn set_edge_attr(
        &mut self,
        u: &str,
        v: &str,
        key: &str,
        value: AttrValue,
    ) -> Result<(), GraphError> {
        let (cu, cv) = edge_key(u, v);
        self.attrs.set_edge_attr(cu, cv, key, value)
    }

    /// Deletes one edge attribute; fails if the key is absent.
    pub fn remove_edge_attr(
        &mut self,
        u: &str,
        v: &str,
        key: &str,
    ) -> Result<AttrValue, GraphError> {
        let (cu, cv) = edge_key(u, v);
        self.attrs.remove_edge_attr(cu, cv, key)
    }
}

/// Drops `target` from `node`'s adjacency list, preserving the order of the
/// remaining entries.
pub(crate) fn remove_entry(
    adjacency: &mut IndexMap<String, Vec<String>>,
    node: &str,
    target: &str,
) {
    if let Some(list) = adjacency.get_mut(node) {
        if let Some(pos) = list.iter().position(|n| n == target) {
            list.remove(pos);
        }
    }
}

/// Structural equality: node sets, edge sets, and attribute records must all
/// match (checked symmetrically); `name` and the weighted flag are ignored,
/// as is adjacency list order.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().iter().all(|n| other.has_node(n))
            && other.nodes().iter().all(|n| self.has_node(n))
            && self.edges().iter().all(|(u, v)| other.has_edge(u, v))
            && other.edges().iter().all(|(u, v)| self.has_edge(u, v))
            && self.attrs == other.attrs
    }
}
