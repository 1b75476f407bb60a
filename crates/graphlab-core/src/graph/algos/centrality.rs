use std::collections::HashMap;

use tracing::debug;

use crate::graph::types::DegreeEntry;
use crate::model::{Graph, NodeId};

/// The `k` nodes with the most incident edges
///
/// Sorted by degree descending, ties by id ascending. Isolated nodes have
/// degree 0 and still rank. Returns `min(k, node_count)` entries; `k == 0`
/// yields none.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn degree_centrality_top_k(graph: &Graph, k: usize) -> Vec<DegreeEntry> {
    if k == 0 {
        return Vec::new();
    }

    let mut degree: HashMap<NodeId, usize> = graph.node_ids().map(|id| (id, 0)).collect();
    for edge in graph.edges() {
        if edge.from == edge.to {
            continue;
        }
        *degree.entry(edge.from).or_default() += 1;
        *degree.entry(edge.to).or_default() += 1;
    }

    let mut ranked: Vec<DegreeEntry> = degree.into_iter().map(DegreeEntry::from).collect();
    ranked.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.node.cmp(&b.node)));
    ranked.truncate(k);

    debug!(returned = ranked.len(), "degree centrality ranked");
    ranked
}
