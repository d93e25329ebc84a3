//! Core graph data structures

mod traversal;
mod undirected;
mod vertex;


pub use traversal::TraversalOrder;
pub use undirected::{EdgeRecord, UndirectedGraph};
pub use vertex::{Connection, Vertex, Weight};
