//! Algorithm selection and timed execution
//!
//! Hosts pick an [`Algorithm`] (usually from user input), hand over the
//! currently loaded graph, and get plain-data output back. Passing no graph
//! is a hard error; absent start/goal ids are not (they produce empty
//! output, as with the direct algorithm calls).

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::error::{GraphError, Result};
use crate::graph::algos::{
    astar_with_cost, bfs, connected_components, degree_centrality_top_k, dfs, dijkstra,
    welsh_powell,
};
use crate::graph::heuristic::Heuristic;
use crate::graph::types::{Coloring, Components, DegreeEntry, PathResult};
use crate::model::{Graph, NodeId};

/// An algorithm together with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Algorithm {
    Bfs { start: NodeId },
    Dfs { start: NodeId },
    Dijkstra { start: NodeId, goal: NodeId },
    #[serde(rename = "astar")]
    AStar { start: NodeId, goal: NodeId },
    Components,
    Centrality { k: usize },
    Coloring,
}

impl Algorithm {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs { .. } => "BFS",
            Algorithm::Dfs { .. } => "DFS",
            Algorithm::Dijkstra { .. } => "Dijkstra",
            Algorithm::AStar { .. } => "A*",
            Algorithm::Components => "Connected Components",
            Algorithm::Centrality { .. } => "Degree Centrality",
            Algorithm::Coloring => "Welsh-Powell",
        }
    }

    /// Short command-style identifier
    pub fn slug(&self) -> &'static str {
        match self {
            Algorithm::Bfs { .. } => "bfs",
            Algorithm::Dfs { .. } => "dfs",
            Algorithm::Dijkstra { .. } => "dijkstra",
            Algorithm::AStar { .. } => "astar",
            Algorithm::Components => "components",
            Algorithm::Centrality { .. } => "centrality",
            Algorithm::Coloring => "coloring",
        }
    }

    /// Node ids the algorithm is anchored on (start, then goal)
    pub fn endpoints(&self) -> Vec<NodeId> {
        match *self {
            Algorithm::Bfs { start } | Algorithm::Dfs { start } => vec![start],
            Algorithm::Dijkstra { start, goal } | Algorithm::AStar { start, goal } => {
                vec![start, goal]
            }
            Algorithm::Components | Algorithm::Centrality { .. } | Algorithm::Coloring => {
                Vec::new()
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of an algorithm run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum AlgorithmOutput {
    /// BFS/DFS visit order
    Order(Vec<NodeId>),
    /// Dijkstra/A* path and cost
    Path(PathResult),
    Components(Components),
    Centrality(Vec<DegreeEntry>),
    Coloring(Coloring),
}

impl AlgorithmOutput {
    /// True when the algorithm produced nothing (absent node, no path,
    /// empty graph)
    pub fn is_empty(&self) -> bool {
        match self {
            AlgorithmOutput::Order(order) => order.is_empty(),
            AlgorithmOutput::Path(result) => !result.found(),
            AlgorithmOutput::Components(components) => components.is_empty(),
            AlgorithmOutput::Centrality(entries) => entries.is_empty(),
            AlgorithmOutput::Coloring(colors) => colors.is_empty(),
        }
    }
}

/// A completed, timed algorithm run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub algorithm: Algorithm,
    pub output: AlgorithmOutput,
    #[serde(serialize_with = "serialize_millis", rename = "elapsed_ms")]
    pub elapsed: Duration,
}

fn serialize_millis<S: serde::Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

/// Run `algorithm` over `graph`
///
/// `heuristic` is only consulted by A*; `None` means the zero heuristic.
/// Fails with [`GraphError::NoGraph`] when no graph is loaded.
pub fn run(
    graph: Option<&Graph>,
    algorithm: &Algorithm,
    heuristic: Option<&dyn Heuristic>,
) -> Result<Run> {
    let graph = graph.ok_or(GraphError::NoGraph)?;
    let start = Instant::now();

    let output = match *algorithm {
        Algorithm::Bfs { start } => AlgorithmOutput::Order(bfs(graph, start)),
        Algorithm::Dfs { start } => AlgorithmOutput::Order(dfs(graph, start)),
        Algorithm::Dijkstra { start, goal } => AlgorithmOutput::Path(dijkstra(graph, start, goal)),
        Algorithm::AStar { start, goal } => {
            AlgorithmOutput::Path(astar_with_cost(graph, start, goal, heuristic))
        }
        Algorithm::Components => AlgorithmOutput::Components(connected_components(graph)),
        Algorithm::Centrality { k } => {
            AlgorithmOutput::Centrality(degree_centrality_top_k(graph, k))
        }
        Algorithm::Coloring => AlgorithmOutput::Coloring(welsh_powell(graph)),
    };

    let elapsed = start.elapsed();
    crate::trace_time!(start, "algorithm_run", algorithm = algorithm.name());
    info!(
        algorithm = algorithm.name(),
        empty = output.is_empty(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "algorithm finished"
    );

    Ok(Run {
        algorithm: *algorithm,
        output,
        elapsed,
    })
}
