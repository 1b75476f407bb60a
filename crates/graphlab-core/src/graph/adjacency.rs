//! Adjacency views derived from a graph's edge list
//!
//! Edges are stored once per unordered pair; both views list each edge
//! under both of its endpoints.

use std::collections::{BTreeMap, HashMap};

use crate::model::{Graph, NodeId};

/// Weighted neighbor lists in edge insertion order
///
/// Used by the cost-driven searches (Dijkstra, A*).
#[derive(Debug, Clone, Default)]
pub struct WeightedAdjacency {
    neighbors: HashMap<NodeId, Vec<(NodeId, f64)>>,
}

impl WeightedAdjacency {
    pub fn build(graph: &Graph) -> Self {
        let mut neighbors: HashMap<NodeId, Vec<(NodeId, f64)>> = HashMap::new();
        for edge in graph.edges() {
            neighbors
                .entry(edge.from)
                .or_default()
                .push((edge.to, edge.weight));
            neighbors
                .entry(edge.to)
                .or_default()
                .push((edge.from, edge.weight));
        }
        Self { neighbors }
    }

    pub fn neighbors(&self, id: NodeId) -> &[(NodeId, f64)] {
        self.neighbors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Unweighted neighbor lists: every node present, self-loops ignored,
/// neighbors deduplicated and sorted ascending
///
/// Keys iterate in ascending id order, which gives traversal, component
/// and coloring passes their deterministic order.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    neighbors: BTreeMap<NodeId, Vec<NodeId>>,
}

impl Adjacency {
    pub fn build(graph: &Graph) -> Self {
        let mut neighbors: BTreeMap<NodeId, Vec<NodeId>> =
            graph.node_ids().map(|id| (id, Vec::new())).collect();

        for edge in graph.edges() {
            if edge.from == edge.to {
                continue;
            }
            neighbors.entry(edge.from).or_default().push(edge.to);
            neighbors.entry(edge.to).or_default().push(edge.from);
        }

        for list in neighbors.values_mut() {
            list.sort_unstable();
            list.dedup();
        }

        Self { neighbors }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.neighbors.contains_key(&id)
    }

    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.neighbors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    /// Node ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph::from_edge_list([4, 1, 3, 2, 9], [(4, 1, 1.0), (1, 3, 2.0), (2, 1, 0.5)]).unwrap()
    }

    #[test]
    fn test_weighted_adjacency_is_symmetric() {
        let adj = WeightedAdjacency::build(&sample());
        assert_eq!(adj.neighbors(1), &[(4, 1.0), (3, 2.0), (2, 0.5)]);
        assert_eq!(adj.neighbors(4), &[(1, 1.0)]);
        assert!(adj.neighbors(9).is_empty());
        assert!(adj.neighbors(42).is_empty());
    }

    #[test]
    fn test_simple_adjacency_sorted_with_isolated_nodes() {
        let adj = Adjacency::build(&sample());
        assert_eq!(adj.ids().collect::<Vec<_>>(), vec![1, 2, 3, 4, 9]);
        assert_eq!(adj.neighbors(1), &[2, 3, 4]);
        assert_eq!(adj.degree(1), 3);
        assert_eq!(adj.degree(9), 0);
        assert!(adj.contains(9));
        assert!(!adj.contains(42));
        assert_eq!(adj.len(), 5);
    }

    #[test]
    fn test_adjacency_of_empty_graph() {
        let adj = Adjacency::build(&Graph::new());
        assert!(adj.is_empty());
    }
}
