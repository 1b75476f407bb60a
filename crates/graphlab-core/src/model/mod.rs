//! Graph data model
//!
//! An undirected, weighted simple graph:
//! - `Node`: identity plus descriptive attributes the algorithms never read
//! - `Edge`: a resolved, order-insensitive endpoint pair with a weight
//! - `Graph`: insertion-ordered node arena, edge list and id lookup

pub mod graph;
pub mod node;

pub use graph::{Edge, Graph};
pub use node::{Node, NodeId};
