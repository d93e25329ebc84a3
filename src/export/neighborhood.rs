//! Bounded-hop neighborhood extraction

use crate::graph::{EdgeRecord, UndirectedGraph};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Query for the subgraph within `depth` hops of a focal vertex
#[derive(Debug, Clone)]
pub struct NeighborhoodQuery {
    /// Focal vertex key
    pub focal: String,
    /// Number of expansion rounds (1 = direct friends)
    pub depth: usize,
}

impl NeighborhoodQuery {
    /// Create a depth-1 query around `focal`
    pub fn from(focal: impl Into<String>) -> Self {
        Self {
            focal: focal.into(),
            depth: 1,
        }
    }

    /// Set the number of expansion rounds
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Execute against a graph.
    ///
    /// Returns `None` if the focal vertex is absent. Each round expands every
    /// vertex of the current frontier; a newly discovered neighbor joins the
    /// node set and the next frontier, and the edge that reached it is
    /// recorded. Edges between already-discovered vertices are not recorded.
    pub fn execute(&self, graph: &UndirectedGraph) -> Option<Subgraph> {
        if !graph.contains(&self.focal) {
            return None;
        }

        let all_edges = graph.edges();
        let index = EdgeIndex::build(&all_edges);

        let mut result = Subgraph::new(self.focal.clone(), self.depth);
        let mut visited: HashSet<&str> = HashSet::new();
        let mut frontier: Vec<&str> = vec![self.focal.as_str()];
        visited.insert(self.focal.as_str());
        result.nodes.push(self.focal.clone());

        for _round in 0..self.depth {
            if frontier.is_empty() {
                break;
            }

            let mut next: Vec<&str> = Vec::new();
            for &current in &frontier {
                let Some(vertex) = graph.get_vertex(current) else {
                    continue;
                };
                for nbr in vertex.neighbor_keys() {
                    if !visited.insert(nbr) {
                        continue;
                    }
                    next.push(nbr);
                    result.nodes.push(nbr.to_string());
                    if let Some(edge) = index.get(current, nbr) {
                        result.edges.push(edge.clone());
                    }
                }
            }
            frontier = next;
        }

        Some(result)
    }
}

/// A depth-bounded slice of the network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subgraph {
    pub focal: String,
    pub depth: usize,
    /// Vertex keys in discovery order, focal first
    pub nodes: Vec<String>,
    /// Edges that reached each newly discovered vertex
    pub edges: Vec<EdgeRecord>,
}

impl Subgraph {
    pub fn new(focal: impl Into<String>, depth: usize) -> Self {
        Self {
            focal: focal.into(),
            depth,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Canonical-pair lookup into the full edge list
struct EdgeIndex<'a> {
    by_pair: HashMap<(&'a str, &'a str), &'a EdgeRecord>,
}

impl<'a> EdgeIndex<'a> {
    fn build(edges: &'a [EdgeRecord]) -> Self {
        let by_pair = edges
            .iter()
            .map(|e| (canonical(&e.from, &e.to), e))
            .collect();
        Self { by_pair }
    }

    fn get(&self, a: &'a str, b: &'a str) -> Option<&'a EdgeRecord> {
        self.by_pair.get(&canonical(a, b)).copied()
    }
}

fn canonical<'s>(a: &'s str, b: &'s str) -> (&'s str, &'s str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
