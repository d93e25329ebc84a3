//! friendgraph: Social Network Engine
//!
//! Maintains user profiles and the undirected friendships between them,
//! and answers structural queries over that network.
//!
//! # Core Concepts
//!
//! - **Profiles**: user records keyed by name
//! - **Friendships**: symmetric, weighted edges between profiles
//! - **NetworkManager**: keeps the profile store and the friendship graph
//!   consistent across inserts, removals and CSV imports
//! - **Export**: bounded-depth neighborhoods rendered with Graphviz, or
//!   written as DOT when no renderer is available
//!
//! # Example
//!
//! ```
//! use friendgraph::{NetworkManager, Profile};
//!
//! let mut net = NetworkManager::new();
//! net.add_profile(Profile::new("alice"));
//! net.add_profile(Profile::new("bob"));
//! net.add_profile(Profile::new("carol"));
//! net.connect_profiles("alice", "bob", 0);
//! net.connect_profiles("bob", "carol", 0);
//!
//! assert_eq!(net.get_friends_of_friends("alice"), vec!["carol"]);
//! ```

pub mod config;
pub mod export;
mod graph;
mod network;
mod profile;

pub use config::{Config, ConfigError, ExportConfig};
pub use export::{
    ExportOutcome, GraphRenderer, GraphvizRenderer, MockRenderer, NeighborhoodQuery, RenderError,
    Subgraph,
};
pub use graph::{Connection, EdgeRecord, TraversalOrder, UndirectedGraph, Vertex, Weight};
pub use network::{ImportSummary, NetworkError, NetworkManager, NetworkResult, FRIEND_SEPARATOR};
pub use profile::{Profile, ProfileStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
