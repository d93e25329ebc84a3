//! UndirectedGraph: adjacency-map storage for friendships

use super::vertex::{Vertex, Weight};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One undirected edge as reported by [`UndirectedGraph::edges`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Whether this edge joins `a` and `b`, in either orientation
    pub fn joins(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    pub fn touches(&self, key: &str) -> bool {
        self.from == key || self.to == key
    }
}

/// Undirected, weighted graph keyed by vertex name
///
/// Every edge is stored on both endpoints with the same weight. Vertices
/// are never removed individually; callers rebuild via [`clear`](Self::clear).
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    vertices: HashMap<String, Vertex>,
    /// Vertex keys in insertion order
    order: Vec<String>,
}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex if absent and return it
    pub fn add_vertex(&mut self, key: &str) -> &Vertex {
        if !self.vertices.contains_key(key) {
            self.order.push(key.to_string());
            self.vertices.insert(key.to_string(), Vertex::new(key));
        }
        &self.vertices[key]
    }

    /// Add an undirected edge, creating missing endpoints.
    ///
    /// A repeated call for the same pair overwrites the weight. Self-loops
    /// are accepted.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) {
        self.add_vertex(from);
        self.add_vertex(to);

        if let Some(v) = self.vertices.get_mut(from) {
            v.add_neighbor(to, weight);
        }
        if let Some(v) = self.vertices.get_mut(to) {
            v.add_neighbor(from, weight);
        }
    }

    pub fn get_vertex(&self, key: &str) -> Option<&Vertex> {
        self.vertices.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vertices.contains_key(key)
    }

    /// Neighbor keys of `key` in insertion order (empty if absent)
    pub fn neighbors(&self, key: &str) -> Vec<&str> {
        self.vertices
            .get(key)
            .map(|v| v.neighbor_keys().collect())
            .unwrap_or_default()
    }

    /// Vertex keys in insertion order
    pub fn vertices(&self) -> &[String] {
        &self.order
    }

    /// Every undirected edge exactly once.
    ///
    /// Scans vertices in insertion order, then each vertex's neighbors in
    /// insertion order; the first direction seen for a pair wins.
    pub fn edges(&self) -> Vec<EdgeRecord> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut edges = Vec::new();

        for from in &self.order {
            let Some(vertex) = self.vertices.get(from) else {
                continue;
            };
            for conn in vertex.connections() {
                let to = conn.neighbor.as_str();
                let pair = if from.as_str() <= to {
                    (from.as_str(), to)
                } else {
                    (to, from.as_str())
                };
                if seen.insert(pair) {
                    edges.push(EdgeRecord::new(from.clone(), to, conn.weight));
                }
            }
        }

        edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.order.clear();
    }

    pub fn size(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
