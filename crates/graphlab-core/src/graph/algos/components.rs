use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::graph::adjacency::Adjacency;
use crate::graph::types::Components;
use crate::model::{Graph, NodeId};

/// Partition every node into maximal connected groups
///
/// Ids are scanned in ascending order and each unvisited id seeds a
/// breadth-first flood fill, so components come out ordered by their
/// smallest member. Each component is sorted ascending. An empty graph
/// yields no components.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn connected_components(graph: &Graph) -> Components {
    let adj = Adjacency::build(graph);
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut components = Vec::new();

    for seed in adj.ids() {
        if !visited.insert(seed) {
            continue;
        }

        let mut component = Vec::new();
        let mut queue = VecDeque::from([seed]);
        while let Some(current) = queue.pop_front() {
            component.push(current);
            for &neighbor in adj.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    debug!(components = components.len(), "components found");
    components
}
