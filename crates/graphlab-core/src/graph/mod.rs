//! Graph algorithms over the undirected, weighted [`Graph`](crate::model::Graph)
//!
//! - `adjacency`: derived neighbor views (weighted, and simple/sorted)
//! - `algos`: BFS, DFS, Dijkstra, A*, components, degree centrality, coloring
//! - `heuristic`: pluggable A* estimates
//! - `run`: name-based dispatch with timing, used by hosts
//!
//! Every algorithm is a pure function of the graph snapshot: it builds its
//! own adjacency view, never mutates the graph, and returns owned data.
//! Absent start/goal ids yield empty results rather than errors.

pub mod adjacency;
pub mod algos;
pub mod heuristic;
pub mod run;
pub mod types;

pub use adjacency::{Adjacency, WeightedAdjacency};
pub use algos::{
    astar, astar_with_cost, bfs, color_count, connected_components, degree_centrality_top_k,
    dfs, dijkstra, path_cost, welsh_powell,
};
pub use heuristic::{circular_layout, EuclideanHeuristic, Heuristic, Position, ZeroHeuristic};
pub use run::{run, Algorithm, AlgorithmOutput, Run};
pub use types::{Coloring, Components, DegreeEntry, PathResult};
