//! Graph algorithm implementations
//!
//! - `bfs` / `dfs`: visit-order traversal from a start node
//! - `dijkstra`: weighted shortest path with cost
//! - `astar`: heuristic shortest path
//! - `components`: connected-component partition
//! - `centrality`: degree centrality top-K
//! - `coloring`: Welsh-Powell greedy coloring
//! - `frontier`: ordered priority frontier shared by Dijkstra and A*
//! - `shared`: path reconstruction and costing

pub mod astar;
pub mod bfs;
pub mod centrality;
pub mod coloring;
pub mod components;
pub mod dfs;
pub mod dijkstra;
pub mod frontier;
pub mod shared;

pub use astar::{astar, astar_with_cost};
pub use bfs::bfs;
pub use centrality::degree_centrality_top_k;
pub use coloring::{color_count, welsh_powell};
pub use components::connected_components;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use frontier::{Frontier, FrontierEntry};
pub use shared::{path_cost, reconstruct_path};
