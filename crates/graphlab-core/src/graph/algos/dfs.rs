use std::collections::HashSet;

use tracing::debug;

use crate::graph::adjacency::Adjacency;
use crate::model::{Graph, NodeId};

/// Depth-first (pre-order) visit order from `start`
///
/// Uses an explicit stack. Neighbors are pushed in descending id order so
/// the smallest unvisited neighbor is explored first, matching a recursive
/// walk over ascending neighbor lists.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn dfs(graph: &Graph, start: NodeId) -> Vec<NodeId> {
    if !graph.contains(start) {
        debug!(start, "start node absent");
        return Vec::new();
    }

    let adj = Adjacency::build(graph);
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);
        for &neighbor in adj.neighbors(current).iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    debug!(visited = order.len(), "dfs complete");
    order
}
