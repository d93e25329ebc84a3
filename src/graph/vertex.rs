//! Vertex representation in the friendship graph

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Edge weight between two vertices (0 = plain friendship)
pub type Weight = i64;

/// A neighbor entry in a vertex's adjacency list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Key of the neighboring vertex
    pub neighbor: String,
    /// Weight of the edge to that neighbor
    pub weight: Weight,
}

/// A named vertex and its neighbors
///
/// Neighbors keep the order in which they were first connected. Re-adding
/// an existing neighbor overwrites its weight in place, so traversal order
/// never depends on weight updates.
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    key: String,
    connections: Vec<Connection>,
    /// neighbor key -> position in `connections`
    index: HashMap<String, usize>,
}

impl Vertex {
    /// Create a vertex with no neighbors
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            connections: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The vertex key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add or re-weight a neighbor.
    pub(crate) fn add_neighbor(&mut self, neighbor: &str, weight: Weight) {
        match self.index.get(neighbor) {
            Some(&pos) => self.connections[pos].weight = weight,
            None => {
                self.index.insert(neighbor.to_string(), self.connections.len());
                self.connections.push(Connection {
                    neighbor: neighbor.to_string(),
                    weight,
                });
            }
        }
    }

    /// Neighbors in insertion order
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Neighbor keys in insertion order
    pub fn neighbor_keys(&self) -> impl Iterator<Item = &str> {
        self.connections.iter().map(|c| c.neighbor.as_str())
    }

    /// Weight of the edge to `neighbor`, if connected
    pub fn weight_to(&self, neighbor: &str) -> Option<Weight> {
        self.index
            .get(neighbor)
            .map(|&pos| self.connections[pos].weight)
    }

    pub fn is_connected_to(&self, neighbor: &str) -> bool {
        self.index.contains_key(neighbor)
    }

    pub fn degree(&self) -> usize {
        self.connections.len()
    }
}
