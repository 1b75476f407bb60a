use std::collections::HashSet;

use tracing::debug;

use crate::graph::adjacency::Adjacency;
use crate::graph::types::Coloring;
use crate::model::{Graph, NodeId};

/// Welsh-Powell greedy coloring
///
/// Nodes are colored in order of degree descending (ties by id ascending);
/// each takes the smallest color index not already used by a colored
/// neighbor. Adjacent nodes never share a color. The number of colors is
/// not guaranteed minimal.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn welsh_powell(graph: &Graph) -> Coloring {
    let adj = Adjacency::build(graph);

    let mut order: Vec<NodeId> = adj.ids().collect();
    order.sort_by(|a, b| adj.degree(*b).cmp(&adj.degree(*a)).then_with(|| a.cmp(b)));

    let mut colors = Coloring::new();
    for node in order {
        let used: HashSet<usize> = adj
            .neighbors(node)
            .iter()
            .filter_map(|neighbor| colors.get(neighbor).copied())
            .collect();
        let color = (0..).find(|c| !used.contains(c)).unwrap_or_default();
        colors.insert(node, color);
    }

    debug!(colors = color_count(&colors), "coloring complete");
    colors
}

/// Number of distinct colors in a coloring (`max index + 1`)
pub fn color_count(colors: &Coloring) -> usize {
    colors.values().max().map_or(0, |max| max + 1)
}
