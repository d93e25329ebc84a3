//! Common test utilities for network integration tests
//!
//! Provides CSV fixtures written to temporary directories and a checker
//! for the profile/graph consistency invariants.

pub mod corpus;

pub use corpus::{CsvCorpus, CSV_HEADER};

use friendgraph::NetworkManager;
use std::collections::HashSet;

/// Assert the invariants every mutating call must preserve:
/// - profile names and vertex keys are the same set
/// - every edge is stored on both endpoints with the same weight
/// - every cached friend is an actual graph neighbor
pub fn assert_consistent(net: &NetworkManager) {
    let graph = net.graph();

    let profile_names: HashSet<&str> = net.profiles().map(|p| p.name()).collect();
    let vertex_keys: HashSet<&str> = graph.vertices().iter().map(String::as_str).collect();
    assert_eq!(profile_names, vertex_keys, "profile store and graph diverged");

    for key in graph.vertices() {
        let vertex = graph.get_vertex(key).expect("listed vertex must exist");
        for conn in vertex.connections() {
            let back = graph
                .get_vertex(&conn.neighbor)
                .unwrap_or_else(|| panic!("{} -> {} points at a missing vertex", key, conn.neighbor));
            assert_eq!(
                back.weight_to(key),
                Some(conn.weight),
                "edge {} -- {} is not symmetric",
                key,
                conn.neighbor
            );
        }
    }

    for profile in net.profiles() {
        let vertex = graph.get_vertex(profile.name()).expect("profile has a vertex");
        for friend in profile.friends() {
            assert!(
                vertex.is_connected_to(friend),
                "{} caches friend {} without an edge",
                profile.name(),
                friend
            );
        }
    }
}
