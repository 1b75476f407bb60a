use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::graph::adjacency::WeightedAdjacency;
use crate::graph::algos::frontier::Frontier;
use crate::graph::algos::shared::reconstruct_path;
use crate::graph::types::PathResult;
use crate::model::{Graph, NodeId};

/// Search state for a single Dijkstra run
struct DijkstraState {
    distance: HashMap<NodeId, f64>,
    came_from: HashMap<NodeId, NodeId>,
    settled: HashSet<NodeId>,
    frontier: Frontier,
}

impl DijkstraState {
    fn new(start: NodeId) -> Self {
        let mut state = Self {
            distance: HashMap::new(),
            came_from: HashMap::new(),
            settled: HashSet::new(),
            frontier: Frontier::new(),
        };
        state.distance.insert(start, 0.0);
        state.frontier.push(start, 0.0);
        state
    }

    /// Relax every edge out of `current`, pushing improved neighbors
    fn relax(&mut self, current: NodeId, adj: &WeightedAdjacency) {
        let base = self.distance.get(&current).copied().unwrap_or(f64::INFINITY);
        for &(neighbor, weight) in adj.neighbors(current) {
            if self.settled.contains(&neighbor) {
                continue;
            }
            let candidate = base + weight;
            let known = self.distance.get(&neighbor).copied().unwrap_or(f64::INFINITY);
            if candidate < known {
                self.distance.insert(neighbor, candidate);
                self.came_from.insert(neighbor, current);
                self.frontier.push(neighbor, candidate);
            }
        }
    }
}

/// Minimum-cost path from `start` to `goal` and its cost
///
/// Edge weights must be non-negative; this is not re-checked here (the
/// graph's edit operations reject negative weights). Frontier ties break
/// by insertion sequence, then node id. Stale frontier entries are skipped
/// when popped rather than updated in place.
///
/// Returns [`PathResult::not_found`] if either id is absent or `goal` is
/// unreachable.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn dijkstra(graph: &Graph, start: NodeId, goal: NodeId) -> PathResult {
    if !graph.contains(start) || !graph.contains(goal) {
        debug!("start or goal absent");
        return PathResult::not_found();
    }

    let adj = WeightedAdjacency::build(graph);
    let mut state = DijkstraState::new(start);

    while let Some(entry) = state.frontier.pop() {
        let current = entry.node;
        if !state.settled.insert(current) {
            continue;
        }
        if current == goal {
            break;
        }
        state.relax(current, &adj);
    }

    match state.distance.get(&goal) {
        Some(&cost) if state.settled.contains(&goal) => {
            let path = reconstruct_path(&state.came_from, goal);
            debug!(hops = path.len().saturating_sub(1), cost, "path found");
            PathResult { path, cost }
        }
        _ => {
            debug!(settled = state.settled.len(), "goal unreachable");
            PathResult::not_found()
        }
    }
}
