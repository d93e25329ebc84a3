//! Breadth-first and depth-first visitation order

use super::undirected::UndirectedGraph;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Order in which profile names are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Order in which profiles were added
    #[default]
    Insertion,
    /// Breadth-first from a start vertex
    Bfs,
    /// Depth-first from a start vertex
    Dfs,
}

impl UndirectedGraph {
    /// Breadth-first visitation order from `start`.
    ///
    /// Neighbors are enqueued in insertion order. An absent start yields
    /// an empty list.
    pub fn bfs(&self, start: &str) -> Vec<String> {
        if !self.contains(start) {
            return Vec::new();
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut order = Vec::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current.to_string());

            let Some(vertex) = self.get_vertex(current) else {
                continue;
            };
            for nbr in vertex.neighbor_keys() {
                if visited.insert(nbr) {
                    queue.push_back(nbr);
                }
            }
        }

        order
    }

    /// Iterative depth-first visitation order from `start`.
    ///
    /// Neighbors are pushed in descending key order so siblings pop in
    /// ascending order. An absent start yields an empty list.
    pub fn dfs(&self, start: &str) -> Vec<String> {
        if !self.contains(start) {
            return Vec::new();
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut order = Vec::new();
        let mut stack: Vec<&str> = vec![start];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            order.push(current.to_string());

            let Some(vertex) = self.get_vertex(current) else {
                continue;
            };
            let mut neighbors: Vec<&str> = vertex.neighbor_keys().collect();
            neighbors.sort_unstable_by(|a, b| b.cmp(a));
            stack.extend(neighbors.into_iter().filter(|n| !visited.contains(n)));
        }

        order
    }

    /// Visitation order for `order`; `start` is ignored for insertion order.
    pub fn traverse(&self, order: TraversalOrder, start: &str) -> Vec<String> {
        match order {
            TraversalOrder::Insertion => self.vertices().to_vec(),
            TraversalOrder::Bfs => self.bfs(start),
            TraversalOrder::Dfs => self.dfs(start),
        }
    }
}
