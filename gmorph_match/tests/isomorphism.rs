use std::sync::OnceLock;

use gmorph_core::{DiGraph, Graph, Topology};
use gmorph_match::{Bijection, isomorphism};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Asserts that `mapping` is a total adjacency-preserving bijection between
/// the two node sets. Every ordered pair is cross-checked, which also covers
/// the directed case.
fn assert_valid<G: Topology>(g1: &G, g2: &G, mapping: &Bijection) {
    assert_eq!(mapping.len(), g1.order());
    for node in g1.nodes() {
        let image = mapping.image(node).unwrap();
        assert!(g2.has_node(image));
        assert_eq!(mapping.preimage(image), Some(node));
    }
    for u in g1.nodes() {
        for v in g1.nodes() {
            let iu = mapping.image(u).unwrap();
            let iv = mapping.image(v).unwrap();
            assert_eq!(g1.has_edge(u, v), g2.has_edge(iu, iv), "pair ({u}, {v})");
        }
    }
}

fn cycle(name: &str, nodes: &[&str]) -> Graph {
    let mut g = Graph::new(name);
    for n in nodes {
        g.add_node(*n).unwrap();
    }
    for i in 0..nodes.len() {
        g.add_edge(nodes[i], nodes[(i + 1) % nodes.len()]).unwrap();
    }
    g
}

#[test]
fn every_graph_is_isomorphic_to_itself() {
    init_logging();
    let g = cycle("c5", &["1", "2", "3", "4", "5"]);
    let mapping = isomorphism(&g, &g).unwrap();
    assert_valid(&g, &g, &mapping);
}

#[test]
fn empty_graphs_are_isomorphic() {
    init_logging();
    let mapping = isomorphism(&Graph::new("a"), &Graph::new("b")).unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn order_mismatch_is_rejected() {
    init_logging();
    let a = cycle("c3", &["1", "2", "3"]);
    let b = cycle("c4", &["1", "2", "3", "4"]);
    assert!(isomorphism(&a, &b).is_none());
}

#[test]
fn degree_profiles_prune_the_path_versus_the_star() {
    init_logging();
    let mut path = Graph::new("p4");
    for n in ["1", "2", "3", "4"] {
        path.add_node(n).unwrap();
    }
    path.add_edge("1", "2").unwrap();
    path.add_edge("2", "3").unwrap();
    path.add_edge("3", "4").unwrap();

    let mut star = Graph::new("k13");
    for n in ["c", "x", "y", "z"] {
        star.add_node(n).unwrap();
    }
    star.add_edge("c", "x").unwrap();
    star.add_edge("c", "y").unwrap();
    star.add_edge("c", "z").unwrap();

    assert!(isomorphism(&path, &star).is_none());
}

#[test]
fn backtracking_separates_a_hexagon_from_two_triangles() {
    init_logging();
    // Both graphs are 2-regular, so the invariant partition cannot tell
    // them apart; only the exhaustive search can.
    let hexagon = cycle("c6", &["1", "2", "3", "4", "5", "6"]);
    let mut triangles = Graph::new("2c3");
    for n in ["a", "b", "c", "d", "e", "f"] {
        triangles.add_node(n).unwrap();
    }
    for (u, v) in [("a", "b"), ("b", "c"), ("c", "a"), ("d", "e"), ("e", "f"), ("f", "d")] {
        triangles.add_edge(u, v).unwrap();
    }
    assert!(isomorphism(&hexagon, &triangles).is_none());
}

#[test]
fn self_loops_must_map_to_self_loops() {
    init_logging();
    let mut a = Graph::new("a");
    a.add_node("1").unwrap();
    a.add_node("2").unwrap();
    a.add_edge("1", "2").unwrap();
    a.add_edge("1", "1").unwrap();

    let mut b = Graph::new("b");
    b.add_node("x").unwrap();
    b.add_node("y").unwrap();
    b.add_edge("x", "y").unwrap();
    b.add_edge("y", "y").unwrap();

    let mapping = isomorphism(&a, &b).unwrap();
    assert_valid(&a, &b, &mapping);
    assert_eq!(mapping.image("1"), Some("y"));
}

#[test]
fn two_loops_are_not_one_edge() {
    init_logging();
    // Every node has degree one in both graphs, so the invariant partition
    // passes; only the adjacency check can tell a loop from an edge.
    let mut loops = Graph::new("loops");
    loops.add_node("1").unwrap();
    loops.add_node("2").unwrap();
    loops.add_edge("1", "1").unwrap();
    loops.add_edge("2", "2").unwrap();

    let mut pair = Graph::new("pair");
    pair.add_node("x").unwrap();
    pair.add_node("y").unwrap();
    pair.add_edge("x", "y").unwrap();

    assert!(isomorphism(&loops, &pair).is_none());
}

#[test]
fn relabeled_random_graph_is_recognized() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(1729);
    let n = 24usize;
    let ids: Vec<String> = (0..n).map(|i| i.to_string()).collect();
    let mut relabel = ids.clone();
    relabel.shuffle(&mut rng);

    let mut g1 = Graph::new("original");
    let mut g2 = Graph::new("relabeled");
    for i in 0..n {
        g1.add_node(ids[i].clone()).unwrap();
        g2.add_node(relabel[i].clone()).unwrap();
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(0.3) {
                g1.add_edge(&ids[i], &ids[j]).unwrap();
                g2.add_edge(&relabel[i], &relabel[j]).unwrap();
            }
        }
    }

    let mapping = isomorphism(&g1, &g2).unwrap();
    assert_valid(&g1, &g2, &mapping);
}

#[test]
fn relabeled_random_digraph_is_recognized() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(99);
    let n = 16usize;
    let ids: Vec<String> = (0..n).map(|i| i.to_string()).collect();
    let mut relabel = ids.clone();
    relabel.shuffle(&mut rng);

    let mut g1 = DiGraph::new("original");
    let mut g2 = DiGraph::new("relabeled");
    for i in 0..n {
        g1.add_node(ids[i].clone()).unwrap();
        g2.add_node(relabel[i].clone()).unwrap();
    }
    for i in 0..n {
        for j in 0..n {
            if i != j && rng.gen_bool(0.2) {
                g1.add_edge(&ids[i], &ids[j]).unwrap();
                g2.add_edge(&relabel[i], &relabel[j]).unwrap();
            }
        }
    }

    let mapping = isomorphism(&g1, &g2).unwrap();
    assert_valid(&g1, &g2, &mapping);
}

#[test]
fn orientation_is_not_ignored() {
    init_logging();
    // Every node has out-degree one in both graphs, so the out-adjacency
    // invariant cannot separate them; the in-edge checks have to.
    let mut forward = DiGraph::new("cycle");
    for n in ["1", "2", "3"] {
        forward.add_node(n).unwrap();
    }
    forward.add_edge("1", "2").unwrap();
    forward.add_edge("2", "3").unwrap();
    forward.add_edge("3", "1").unwrap();

    let mut bent = DiGraph::new("bent");
    for n in ["x", "y", "z"] {
        bent.add_node(n).unwrap();
    }
    bent.add_edge("x", "y").unwrap();
    bent.add_edge("y", "z").unwrap();
    bent.add_edge("z", "y").unwrap();

    assert!(isomorphism(&forward, &bent).is_none());
}
