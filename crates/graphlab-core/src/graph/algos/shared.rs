use std::collections::HashMap;

use crate::model::{Graph, NodeId};

/// Walk predecessors from `goal` back to the search origin and reverse
pub fn reconstruct_path(came_from: &HashMap<NodeId, NodeId>, goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&parent) = came_from.get(&current) {
        current = parent;
        path.push(current);
    }
    path.reverse();
    path
}

/// Sum of edge weights along `path`
///
/// Returns `None` if two consecutive ids are not joined by an edge. A
/// single-node or empty path costs 0.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> Option<f64> {
    path.windows(2).try_fold(0.0, |total, pair| {
        graph
            .find_edge(pair[0], pair[1])
            .map(|edge| total + edge.weight)
    })
}
