use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::graph::adjacency::WeightedAdjacency;
use crate::graph::algos::frontier::Frontier;
use crate::graph::algos::shared::{path_cost, reconstruct_path};
use crate::graph::heuristic::{Heuristic, ZeroHeuristic};
use crate::graph::types::PathResult;
use crate::model::{Graph, NodeId};

/// Heuristic shortest path from `start` to `goal`
///
/// The frontier is ordered by `g + h(node, goal)`, ties broken by insertion
/// sequence and then node id. Improved neighbors are pushed again instead of
/// updated in place; entries for already-closed nodes are skipped on pop.
/// Without a heuristic (`None`) the zero heuristic is used, and the path
/// costs the same as the one [`dijkstra`](super::dijkstra) finds.
///
/// `start == goal` returns `[start]` without inspecting the graph. An empty
/// path means an endpoint is absent or `goal` is unreachable.
#[tracing::instrument(skip(graph, heuristic), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn astar(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    heuristic: Option<&dyn Heuristic>,
) -> Vec<NodeId> {
    if start == goal {
        return vec![start];
    }
    if !graph.contains(start) || !graph.contains(goal) {
        debug!("start or goal absent");
        return Vec::new();
    }

    let heuristic = heuristic.unwrap_or(&ZeroHeuristic);
    let adj = WeightedAdjacency::build(graph);

    let mut came_from: HashMap<NodeId, NodeId> = HashMap::new();
    let mut g_score: HashMap<NodeId, f64> = HashMap::new();
    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut open = Frontier::new();

    g_score.insert(start, 0.0);
    open.push(start, heuristic.estimate(start, goal));

    while let Some(entry) = open.pop() {
        let current = entry.node;
        if current == goal {
            let path = reconstruct_path(&came_from, current);
            debug!(hops = path.len() - 1, expanded = closed.len(), "path found");
            return path;
        }
        if !closed.insert(current) {
            continue;
        }

        let base = g_score.get(&current).copied().unwrap_or(f64::INFINITY);
        for &(neighbor, weight) in adj.neighbors(current) {
            if closed.contains(&neighbor) {
                continue;
            }
            let tentative = base + weight;
            let known = g_score.get(&neighbor).copied().unwrap_or(f64::INFINITY);
            if tentative < known {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative);
                open.push(neighbor, tentative + heuristic.estimate(neighbor, goal));
            }
        }
    }

    debug!(expanded = closed.len(), "goal unreachable");
    Vec::new()
}

/// [`astar`] plus the summed edge weight of the returned path
pub fn astar_with_cost(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    heuristic: Option<&dyn Heuristic>,
) -> PathResult {
    let path = astar(graph, start, goal, heuristic);
    if path.is_empty() {
        return PathResult::not_found();
    }
    let cost = path_cost(graph, &path).unwrap_or_default();
    PathResult { path, cost }
}
