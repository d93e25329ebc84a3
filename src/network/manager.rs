//! NetworkManager: the single entry point for the social network
//!
//! Owns a [`ProfileStore`] and an [`UndirectedGraph`] and keeps them in
//! lockstep: every profile name is a vertex key and every vertex key is a
//! profile name.

use super::error::NetworkResult;
use crate::export::{export_subgraph, ExportOutcome, GraphRenderer, NeighborhoodQuery};
use crate::graph::{EdgeRecord, TraversalOrder, UndirectedGraph, Weight};
use crate::profile::{Profile, ProfileStore};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// A social network of profiles and undirected friendships
#[derive(Debug, Clone, Default)]
pub struct NetworkManager {
    profiles: ProfileStore,
    graph: UndirectedGraph,
}

impl NetworkManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile and its vertex.
    ///
    /// Returns `false` without touching either store if the name is already
    /// known to the profile store or the graph.
    pub fn add_profile(&mut self, profile: Profile) -> bool {
        let name = profile.name().to_string();
        if self.profiles.contains(&name) || self.graph.contains(&name) {
            return false;
        }
        // Friend caches only ever come from connect_profiles
        let mut profile = profile;
        profile.clear_friends();

        self.profiles.add(profile);
        self.graph.add_vertex(&name);
        true
    }

    pub fn get_profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Replace a profile's status line. Returns `false` if absent.
    pub fn update_status(&mut self, name: &str, status: impl Into<String>) -> bool {
        match self.profiles.get_mut(name) {
            Some(profile) => {
                profile.set_status(status);
                true
            }
            None => false,
        }
    }

    /// Befriend two existing profiles.
    ///
    /// Returns `false` if either is absent. Connecting an already connected
    /// pair overwrites the edge weight and leaves friend lists unchanged.
    pub fn connect_profiles(&mut self, a: &str, b: &str, weight: Weight) -> bool {
        if !self.profiles.contains(a) || !self.profiles.contains(b) {
            return false;
        }

        self.graph.add_edge(a, b, weight);
        if let Some(p) = self.profiles.get_mut(a) {
            p.add_friend(b);
        }
        if let Some(p) = self.profiles.get_mut(b) {
            p.add_friend(a);
        }
        true
    }

    /// Remove a profile and every friendship it was part of.
    ///
    /// The graph is rebuilt from the surviving profiles and edges, so the
    /// symmetry invariant never depends on a partial edit.
    pub fn remove_profile(&mut self, name: &str) -> bool {
        if self.profiles.remove(name).is_none() {
            return false;
        }

        let old_edges = self.graph.edges();
        let remaining: HashSet<&str> = self.profiles.keys().iter().map(String::as_str).collect();

        self.graph.clear();
        for key in self.profiles.keys() {
            self.graph.add_vertex(key);
        }

        let mut kept = 0usize;
        for edge in &old_edges {
            if edge.touches(name) {
                continue;
            }
            if remaining.contains(edge.from.as_str()) && remaining.contains(edge.to.as_str()) {
                self.graph.add_edge(&edge.from, &edge.to, edge.weight);
                kept += 1;
            }
        }

        for profile in self.profiles.values_mut() {
            profile.remove_friend(name);
        }

        tracing::debug!(
            removed = name,
            vertices = self.graph.size(),
            edges_kept = kept,
            edges_dropped = old_edges.len() - kept,
            "rebuilt graph after profile removal"
        );
        true
    }

    /// All profile names in insertion order
    pub fn display_profiles(&self) -> Vec<String> {
        self.profiles.keys().to_vec()
    }

    /// Profile names in traversal order from `start`.
    ///
    /// `TraversalOrder::Insertion` ignores `start`; BFS and DFS return an
    /// empty list when `start` is unknown.
    pub fn display_profiles_by(&self, order: TraversalOrder, start: &str) -> Vec<String> {
        match order {
            TraversalOrder::Insertion => self.display_profiles(),
            _ => self.graph.traverse(order, start),
        }
    }

    /// Direct friends of `name` in the order the friendships were made
    pub fn get_friends(&self, name: &str) -> Vec<String> {
        self.graph
            .neighbors(name)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Vertices exactly two hops from `name`, sorted.
    ///
    /// Excludes `name` and its direct friends; empty if `name` is unknown.
    pub fn get_friends_of_friends(&self, name: &str) -> Vec<String> {
        let Some(vertex) = self.graph.get_vertex(name) else {
            return Vec::new();
        };

        let direct: HashSet<&str> = vertex.neighbor_keys().collect();
        let mut fof: BTreeSet<&str> = BTreeSet::new();

        for &friend in &direct {
            if let Some(friend_vertex) = self.graph.get_vertex(friend) {
                fof.extend(friend_vertex.neighbor_keys());
            }
        }

        fof.into_iter()
            .filter(|k| *k != name && !direct.contains(k))
            .map(str::to_string)
            .collect()
    }

    /// Every friendship exactly once
    pub fn edges(&self) -> Vec<EdgeRecord> {
        self.graph.edges()
    }

    /// Read-only view of the friendship graph
    pub fn graph(&self) -> &UndirectedGraph {
        &self.graph
    }

    /// Profiles in insertion order
    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Export the neighborhood within `depth` hops of `name`.
    ///
    /// Returns `Ok(None)` if `name` is not in the graph. A depth of 0 is
    /// raised to 1. Renderer failures fall back to a DOT file; only a failed
    /// fallback write is an error.
    pub fn create_user_graph(
        &self,
        name: &str,
        depth: usize,
        renderer: &dyn GraphRenderer,
        base_path: &Path,
    ) -> NetworkResult<Option<ExportOutcome>> {
        let depth = if depth == 0 {
            tracing::warn!(name, "export depth 0 requested, using 1");
            1
        } else {
            depth
        };

        let Some(subgraph) = NeighborhoodQuery::from(name).depth(depth).execute(&self.graph) else {
            tracing::info!(name, "cannot export network: profile not found");
            return Ok(None);
        };

        tracing::debug!(
            name,
            depth,
            nodes = subgraph.node_count(),
            edges = subgraph.edge_count(),
            "computed export neighborhood"
        );

        let outcome = export_subgraph(&subgraph, renderer, base_path)?;
        Ok(Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::MockRenderer;

    fn network(names: &[&str]) -> NetworkManager {
        let mut net = NetworkManager::new();
        for name in names {
            assert!(net.add_profile(Profile::new(*name)));
        }
        net
    }

    #[test]
    fn test_add_profile_creates_vertex() {
        let net = network(&["alice"]);
        assert!(net.get_profile("alice").is_some());
        assert!(net.graph().contains("alice"));
        assert!(net.graph().neighbors("alice").is_empty());
    }

    #[test]
    fn test_add_duplicate_profile_fails() {
        let mut net = network(&["alice"]);
        assert!(!net.add_profile(Profile::new("alice").with_age(50)));
        assert_eq!(net.profile_count(), 1);
        assert_eq!(net.get_profile("alice").unwrap().age, 0);
    }

    #[test]
    fn test_connect_requires_both_profiles() {
        let mut net = network(&["alice"]);
        assert!(!net.connect_profiles("alice", "ghost", 0));
        assert!(!net.connect_profiles("ghost", "alice", 0));
        assert!(!net.graph().contains("ghost"));
        assert!(net.edges().is_empty());
    }

    #[test]
    fn test_connect_twice_is_idempotent() {
        let mut net = network(&["x", "y"]);
        assert!(net.connect_profiles("x", "y", 0));
        assert!(net.connect_profiles("x", "y", 0));

        assert_eq!(net.edges(), vec![EdgeRecord::new("x", "y", 0)]);
        assert_eq!(net.get_profile("x").unwrap().friends(), &["y"]);
        assert_eq!(net.get_profile("y").unwrap().friends(), &["x"]);
    }

    #[test]
    fn test_reconnect_overwrites_weight() {
        let mut net = network(&["x", "y"]);
        net.connect_profiles("x", "y", 0);
        net.connect_profiles("y", "x", 1);
        assert_eq!(net.edges(), vec![EdgeRecord::new("x", "y", 1)]);
    }

    #[test]
    fn test_remove_profile_rebuilds_graph() {
        let mut net = network(&["a", "b", "c", "d"]);
        net.connect_profiles("a", "b", 1);
        net.connect_profiles("b", "c", 0);
        net.connect_profiles("c", "d", 2);
        net.connect_profiles("a", "c", 0);

        assert!(net.remove_profile("c"));

        assert!(!net.graph().contains("c"));
        assert_eq!(net.graph().size(), 3);
        assert_eq!(net.edges(), vec![EdgeRecord::new("a", "b", 1)]);
        for profile in net.profiles() {
            assert!(!profile.has_friend("c"), "{} still lists c", profile.name());
        }
        assert!(net.get_profile("d").unwrap().friends().is_empty());
    }

    #[test]
    fn test_remove_missing_profile_fails() {
        let mut net = network(&["a"]);
        assert!(!net.remove_profile("ghost"));
        assert_eq!(net.profile_count(), 1);
    }

    #[test]
    fn test_remove_keeps_isolated_vertices() {
        let mut net = network(&["a", "b", "c"]);
        net.connect_profiles("a", "b", 0);
        net.remove_profile("a");

        assert_eq!(net.graph().vertices(), &["b", "c"]);
        assert!(net.edges().is_empty());
    }

    #[test]
    fn test_friends_of_friends_excludes_self_and_direct() {
        let mut net = network(&["A", "B", "C", "D"]);
        net.connect_profiles("A", "B", 0);
        net.connect_profiles("B", "C", 0);
        net.connect_profiles("A", "D", 0);

        assert_eq!(net.get_friends_of_friends("A"), vec!["C"]);
    }

    #[test]
    fn test_friends_of_friends_drops_triangle_members() {
        let mut net = network(&["A", "B", "C", "E", "F"]);
        net.connect_profiles("A", "B", 0);
        net.connect_profiles("A", "C", 0);
        net.connect_profiles("B", "C", 0);
        net.connect_profiles("C", "F", 0);
        net.connect_profiles("B", "E", 0);

        assert_eq!(net.get_friends_of_friends("A"), vec!["E", "F"]);
    }

    #[test]
    fn test_friends_of_friends_unknown_is_empty() {
        let net = network(&["A"]);
        assert!(net.get_friends_of_friends("ghost").is_empty());
        assert!(net.get_friends_of_friends("A").is_empty());
    }

    #[test]
    fn test_display_profiles_orders() {
        let mut net = network(&["D", "A", "C", "B"]);
        net.connect_profiles("A", "B", 0);
        net.connect_profiles("A", "C", 0);
        net.connect_profiles("B", "D", 0);

        assert_eq!(net.display_profiles(), vec!["D", "A", "C", "B"]);
        assert_eq!(
            net.display_profiles_by(TraversalOrder::Bfs, "A"),
            vec!["A", "B", "C", "D"]
        );
        assert_eq!(
            net.display_profiles_by(TraversalOrder::Dfs, "A"),
            vec!["A", "B", "D", "C"]
        );
        assert!(net.display_profiles_by(TraversalOrder::Bfs, "ghost").is_empty());
    }

    #[test]
    fn test_update_status() {
        let mut net = network(&["alice"]);
        assert!(net.update_status("alice", "away"));
        assert_eq!(net.get_profile("alice").unwrap().status, "away");
        assert!(!net.update_status("ghost", "away"));
    }

    #[test]
    fn test_get_friends_in_connection_order() {
        let mut net = network(&["a", "b", "c"]);
        net.connect_profiles("a", "c", 0);
        net.connect_profiles("a", "b", 0);
        assert_eq!(net.get_friends("a"), vec!["c", "b"]);
        assert!(net.get_friends("ghost").is_empty());
    }

    #[test]
    fn test_create_user_graph_unknown_name() {
        let net = network(&["a"]);
        let mock = MockRenderer::available();
        let result = net
            .create_user_graph("ghost", 1, &mock, Path::new("ghost"))
            .unwrap();
        assert!(result.is_none());
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn test_create_user_graph_depth_zero_becomes_one() {
        let mut net = network(&["a", "b", "c"]);
        net.connect_profiles("a", "b", 0);
        net.connect_profiles("b", "c", 0);

        let mock = MockRenderer::available();
        let outcome = net
            .create_user_graph("a", 0, &mock, Path::new("a"))
            .unwrap();
        assert!(matches!(outcome, Some(ExportOutcome::Rendered { .. })));

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].depth, 1);
        assert_eq!(calls[0].nodes, vec!["a", "b"]);
    }
}
