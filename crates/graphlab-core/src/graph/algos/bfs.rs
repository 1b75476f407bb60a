use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::graph::adjacency::Adjacency;
use crate::model::{Graph, NodeId};

/// Breadth-first visit order from `start`
///
/// Neighbors are discovered in ascending id order. Only the component
/// containing `start` is visited; an absent `start` yields an empty order.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn bfs(graph: &Graph, start: NodeId) -> Vec<NodeId> {
    if !graph.contains(start) {
        debug!(start, "start node absent");
        return Vec::new();
    }

    let adj = Adjacency::build(graph);
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &neighbor in adj.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    debug!(visited = order.len(), "bfs complete");
    order
}
