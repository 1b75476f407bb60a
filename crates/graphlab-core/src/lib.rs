//! Graphlab Core Library
//!
//! Graph model, adjacency construction and the graph algorithms engine:
//! BFS, DFS, Dijkstra, A*, connected components, degree centrality and
//! Welsh-Powell coloring.

pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod model;
pub mod weight;
