//! Structural guarantees of the network manager
//!
//! Exercises the public API end to end: symmetric edges, deterministic
//! traversal, idempotent connections, removal consistency and
//! friend-of-friend exclusion.

mod common;

use common::assert_consistent;
use friendgraph::{EdgeRecord, NetworkManager, Profile, TraversalOrder, UndirectedGraph};

fn network(names: &[&str]) -> NetworkManager {
    let mut net = NetworkManager::new();
    for name in names {
        assert!(net.add_profile(Profile::new(*name)));
    }
    net
}

#[test]
fn edges_are_symmetric_with_equal_weight() {
    let mut g = UndirectedGraph::new();
    g.add_edge("a", "b", 5);
    g.add_edge("b", "c", 0);

    for (x, y, w) in [("a", "b", 5), ("b", "c", 0)] {
        assert_eq!(g.get_vertex(x).unwrap().weight_to(y), Some(w));
        assert_eq!(g.get_vertex(y).unwrap().weight_to(x), Some(w));
    }
}

#[test]
fn traversal_order_is_deterministic() {
    let mut g = UndirectedGraph::new();
    g.add_edge("A", "B", 0);
    g.add_edge("A", "C", 0);
    g.add_edge("B", "D", 0);

    assert_eq!(g.bfs("A"), vec!["A", "B", "C", "D"]);
    assert_eq!(g.dfs("A"), vec!["A", "B", "D", "C"]);

    // Repeated runs give identical output
    for _ in 0..10 {
        assert_eq!(g.bfs("A"), g.bfs("A"));
        assert_eq!(g.dfs("A"), vec!["A", "B", "D", "C"]);
    }
}

#[test]
fn traversal_from_missing_start_is_empty() {
    let net = network(&["A"]);
    assert!(net.graph().bfs("nonexistent").is_empty());
    assert!(net.graph().dfs("nonexistent").is_empty());
    assert!(net
        .display_profiles_by(TraversalOrder::Dfs, "nonexistent")
        .is_empty());
}

#[test]
fn connecting_twice_keeps_one_edge() {
    let mut net = network(&["x", "y"]);
    net.connect_profiles("x", "y", 0);
    net.connect_profiles("x", "y", 0);

    assert_eq!(net.edges(), vec![EdgeRecord::new("x", "y", 0)]);
    assert_eq!(net.get_profile("x").unwrap().friends(), &["y"]);
    assert_eq!(net.get_profile("y").unwrap().friends(), &["x"]);
    assert_consistent(&net);
}

#[test]
fn removal_leaves_no_trace() {
    let mut net = network(&["a", "b", "c", "d", "e"]);
    net.connect_profiles("a", "b", 0);
    net.connect_profiles("b", "c", 2);
    net.connect_profiles("c", "a", 0);
    net.connect_profiles("c", "d", 0);
    net.connect_profiles("d", "e", 1);

    assert!(net.remove_profile("c"));

    assert!(net.get_profile("c").is_none());
    assert!(!net.graph().contains("c"));
    for edge in net.edges() {
        assert!(!edge.touches("c"), "edge {:?} still references c", edge);
    }
    for profile in net.profiles() {
        assert!(!profile.has_friend("c"));
    }
    assert_eq!(
        net.edges(),
        vec![EdgeRecord::new("a", "b", 0), EdgeRecord::new("d", "e", 1)]
    );
    assert_consistent(&net);
}

#[test]
fn removed_name_can_be_added_again() {
    let mut net = network(&["a", "b"]);
    net.connect_profiles("a", "b", 0);
    net.remove_profile("a");

    assert!(net.add_profile(Profile::new("a").with_age(12)));
    assert!(net.get_friends("a").is_empty());
    assert!(net.get_profile("b").unwrap().friends().is_empty());
    assert_consistent(&net);
}

#[test]
fn friends_of_friends_excludes_self_and_direct_friends() {
    let mut net = network(&["A", "B", "C", "D"]);
    net.connect_profiles("A", "B", 0);
    net.connect_profiles("B", "C", 0);
    net.connect_profiles("A", "D", 0);

    assert_eq!(net.get_friends_of_friends("A"), vec!["C"]);
    assert_eq!(net.get_friends_of_friends("C"), vec!["A"]);
    assert_eq!(net.get_friends_of_friends("D"), vec!["B"]);
}

#[test]
fn friends_of_friends_is_sorted() {
    let mut net = network(&["hub", "spoke", "zed", "amy", "max"]);
    net.connect_profiles("hub", "spoke", 0);
    net.connect_profiles("spoke", "zed", 0);
    net.connect_profiles("spoke", "amy", 0);
    net.connect_profiles("spoke", "max", 0);

    assert_eq!(net.get_friends_of_friends("hub"), vec!["amy", "max", "zed"]);
}

#[test]
fn independent_networks_do_not_share_state() {
    let mut first = network(&["a", "b"]);
    let second = network(&["a"]);
    first.connect_profiles("a", "b", 0);

    assert_eq!(first.edges().len(), 1);
    assert!(second.edges().is_empty());
    assert!(second.get_profile("b").is_none());
}

#[test]
fn mixed_operations_stay_consistent() {
    let mut net = network(&["p0", "p1", "p2", "p3", "p4", "p5"]);
    let pairs = [
        ("p0", "p1"),
        ("p1", "p2"),
        ("p2", "p3"),
        ("p3", "p4"),
        ("p4", "p5"),
        ("p5", "p0"),
        ("p0", "p3"),
    ];
    for (i, (a, b)) in pairs.iter().enumerate() {
        net.connect_profiles(a, b, i as i64);
        assert_consistent(&net);
    }

    net.remove_profile("p3");
    assert_consistent(&net);
    net.add_profile(Profile::new("p6"));
    net.connect_profiles("p6", "p2", 0);
    net.connect_profiles("p6", "ghost", 0);
    assert_consistent(&net);
    net.remove_profile("p0");
    assert_consistent(&net);

    assert_eq!(net.display_profiles(), vec!["p1", "p2", "p4", "p5", "p6"]);
    assert_eq!(net.edges().len(), 3);
}
