use gmorph_core::{AttrMap, AttrValue, Graph, GraphError};

fn triangle() -> Graph {
    let mut g = Graph::new("triangle");
    for n in ["1", "2", "3"] {
        g.add_node(n).unwrap();
    }
    g.add_edge("1", "2").unwrap();
    g.add_edge("2", "3").unwrap();
    g.add_edge("1", "3").unwrap();
    g
}

fn as_strs(list: &[String]) -> Vec<&str> {
    list.iter().map(String::as_str).collect()
}

#[test]
fn adjacency_is_symmetric() {
    let g = triangle();
    assert_eq!(as_strs(g.neighbors("1").unwrap()), vec!["2", "3"]);
    assert_eq!(as_strs(g.neighbors("3").unwrap()), vec!["2", "1"]);
    for (u, v) in g.edges() {
        assert!(g.has_edge(u, v));
        assert!(g.has_edge(v, u));
    }
}

#[test]
fn edge_record_is_shared_between_orders() {
    let mut g = triangle();
    g.set_edge_attr("2", "1", "color", AttrValue::from("red")).unwrap();
    assert_eq!(
        g.edge_attrs("1", "2").unwrap().get("color"),
        Some(&AttrValue::Str("red".to_owned()))
    );
    g.set_edge_weight("1", "2", 9).unwrap();
    assert_eq!(g.edge_weight("2", "1").unwrap(), 9);
    assert_eq!(g.edge_attrs("1", "2").unwrap(), g.edge_attrs("2", "1").unwrap());
}

#[test]
fn self_loop_stores_a_single_entry() {
    let mut g = Graph::new("loop");
    g.add_node("1").unwrap();
    g.add_edge("1", "1").unwrap();
    assert_eq!(as_strs(g.neighbors("1").unwrap()), vec!["1"]);
    assert!(g.has_edge("1", "1"));

    g.remove_edge("1", "1").unwrap();
    assert!(g.neighbors("1").unwrap().is_empty());
    assert!(!g.has_edge("1", "1"));
}

#[test]
fn duplicate_node_is_rejected_without_mutation() {
    let mut g = triangle();
    let before = g.clone();
    assert_eq!(
        g.add_node("1"),
        Err(GraphError::DuplicateNode("1".to_owned()))
    );
    assert_eq!(g, before);
}

#[test]
fn duplicate_edge_is_rejected_in_either_order() {
    let mut g = triangle();
    assert_eq!(
        g.add_edge("2", "1"),
        Err(GraphError::DuplicateEdge("2".to_owned(), "1".to_owned()))
    );
}

#[test]
fn edge_endpoints_must_exist() {
    let mut g = triangle();
    assert_eq!(
        g.add_edge("1", "9"),
        Err(GraphError::MissingNode("9".to_owned()))
    );
}

#[test]
fn removing_a_missing_edge_fails() {
    let mut g = triangle();
    g.remove_edge("1", "2").unwrap();
    assert_eq!(
        g.remove_edge("1", "2"),
        Err(GraphError::MissingEdge("1".to_owned(), "2".to_owned()))
    );
}

#[test]
fn remove_node_cascades_to_incident_edges() {
    let mut g = triangle();
    g.remove_node("2").unwrap();
    assert!(!g.has_node("2"));
    assert!(!g.has_edge("1", "2"));
    assert!(!g.has_edge("2", "3"));
    assert!(g.has_edge("1", "3"));
    assert_eq!(
        g.node_attrs("2"),
        Err(GraphError::MissingNode("2".to_owned()))
    );
    assert_eq!(
        g.edge_attrs("1", "2"),
        Err(GraphError::MissingEdge("1".to_owned(), "2".to_owned()))
    );
}

#[test]
fn remove_node_handles_self_loops() {
    let mut g = Graph::new("loop");
    g.add_node("1").unwrap();
    g.add_node("2").unwrap();
    g.add_edge("1", "1").unwrap();
    g.add_edge("1", "2").unwrap();
    g.remove_node("1").unwrap();
    assert!(!g.has_node("1"));
    assert!(g.neighbors("2").unwrap().is_empty());
}

#[test]
fn fresh_entities_carry_default_attributes() {
    let g = triangle();
    assert_eq!(g.node_weight("1").unwrap(), 1);
    assert_eq!(g.node_label("1").unwrap(), "");
    assert_eq!(g.edge_weight("1", "2").unwrap(), 1);
    assert_eq!(g.edge_label("1", "2").unwrap(), "");
}

#[test]
fn extra_attributes_survive_insertion() {
    let mut g = Graph::new("attrs");
    let attrs = AttrMap::from([("seen".to_owned(), AttrValue::from(true))]);
    g.add_node_with("a", 7, "alpha", attrs).unwrap();
    assert_eq!(g.node_weight("a").unwrap(), 7);
    assert_eq!(g.node_label("a").unwrap(), "alpha");
    assert_eq!(g.node_attrs("a").unwrap().get("seen"), Some(&AttrValue::Bool(true)));
}

#[test]
fn invalid_attribute_entries_block_the_whole_insert() {
    let mut g = Graph::new("attrs");
    let bad = AttrMap::from([(String::new(), AttrValue::from(true))]);
    assert_eq!(
        g.add_node_with("a", 1, "", bad),
        Err(GraphError::InvalidAttrKey)
    );
    assert!(!g.has_node("a"));
}

#[test]
fn reserved_attributes_are_type_checked() {
    let mut g = triangle();
    assert!(matches!(
        g.set_node_attr("1", "weight", AttrValue::from("heavy")),
        Err(GraphError::InvalidAttrValue { .. })
    ));
    assert!(matches!(
        g.set_edge_attr("1", "2", "label", AttrValue::from(4)),
        Err(GraphError::InvalidAttrValue { .. })
    ));
}

#[test]
fn deleting_an_absent_attribute_fails() {
    let mut g = triangle();
    assert_eq!(
        g.remove_node_attr("1", "color"),
        Err(GraphError::MissingAttr("color".to_owned()))
    );
    g.set_node_attr("1", "color", AttrValue::from("blue")).unwrap();
    assert_eq!(
        g.remove_node_attr("1", "color").unwrap(),
        AttrValue::Str("blue".to_owned())
    );
}

#[test]
fn complement_of_a_triangle_is_edgeless() {
    let g = triangle();
    let inv = g.complement();
    assert_eq!(inv.order(), 3);
    assert!(inv.edges().is_empty());
    // The receiver is untouched.
    assert_eq!(g.edges().len(), 3);
}

#[test]
fn complement_of_a_path_is_the_chord() {
    let mut g = Graph::new("path");
    for n in ["1", "2", "3"] {
        g.add_node(n).unwrap();
    }
    g.add_edge("1", "2").unwrap();
    g.add_edge("2", "3").unwrap();
    let inv = g.complement();
    assert_eq!(inv.edges().len(), 1);
    assert!(inv.has_edge("1", "3"));
}

#[test]
fn complement_preserves_node_attributes() {
    let mut g = Graph::new("attrs");
    g.add_node_with("a", 5, "tag", AttrMap::new()).unwrap();
    g.add_node("b").unwrap();
    let inv = g.complement();
    assert_eq!(inv.node_weight("a").unwrap(), 5);
    assert_eq!(inv.node_label("a").unwrap(), "tag");
}

#[test]
fn complete_fills_every_pair() {
    let mut g = Graph::new("k4");
    for n in ["1", "2", "3", "4"] {
        g.add_node(n).unwrap();
    }
    g.add_edge("1", "2").unwrap();
    g.complete();
    assert_eq!(g.edges().len(), 6);
    for (i, u) in ["1", "2", "3", "4"].iter().enumerate() {
        for v in &["1", "2", "3", "4"][i + 1..] {
            assert!(g.has_edge(u, v));
        }
    }
}

#[test]
fn reversed_is_an_identity_copy() {
    let g = triangle();
    assert_eq!(g.reversed(), g);
}

#[test]
fn equality_ignores_insertion_order() {
    let mut a = Graph::new("a");
    for n in ["1", "2", "3"] {
        a.add_node(n).unwrap();
    }
    a.add_edge("1", "2").unwrap();
    a.add_edge("2", "3").unwrap();

    let mut b = Graph::new("b");
    for n in ["3", "1", "2"] {
        b.add_node(n).unwrap();
    }
    b.add_edge("3", "2").unwrap();
    b.add_edge("2", "1").unwrap();

    assert_eq!(a, b);

    b.set_node_weight("1", 2).unwrap();
    assert_ne!(a, b);
}

#[test]
fn induced_subgraph_keeps_internal_edges_only() {
    let mut g = triangle();
    g.add_node("4").unwrap();
    g.add_edge("3", "4").unwrap();
    let sub = g.induced(&["1", "3", "4"]);
    assert_eq!(sub.order(), 3);
    assert!(sub.has_edge("1", "3"));
    assert!(sub.has_edge("3", "4"));
    assert!(!sub.has_node("2"));
    assert_eq!(sub.edges().len(), 2);
}
