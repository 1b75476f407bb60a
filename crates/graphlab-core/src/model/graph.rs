use std::collections::HashMap;

use serde::Serialize;

use super::node::{Node, NodeId};
use crate::error::{GraphError, Result};

/// Position of a node in the dense node arena
///
/// Edges are stored as slot pairs, so they follow a node through renames.
/// Removing a node shifts every later slot down by one and remaps edges and
/// the id index with it, keeping the arena free of holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeIndex(usize);

#[derive(Debug, Clone)]
struct EdgeSlot {
    from: NodeIndex,
    to: NodeIndex,
    weight: f64,
}

/// A resolved edge: endpoint ids as of the moment it was read
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl Edge {
    /// True if this edge joins `a` and `b` in either direction
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Undirected, weighted simple graph
///
/// Nodes and edges keep insertion order. Every edge endpoint is guaranteed
/// to exist, there are no self-loops, and at most one edge joins any
/// unordered pair of nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    slots: Vec<Node>,
    edges: Vec<EdgeSlot>,
    index: HashMap<NodeId, NodeIndex>,
}

fn check_weight(weight: f64) -> Result<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidWeight { weight })
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from node ids and `(from, to, weight)` triples
    ///
    /// Applies the same validation as [`Graph::add_node`] and
    /// [`Graph::add_edge`].
    pub fn from_edge_list(
        nodes: impl IntoIterator<Item = NodeId>,
        edges: impl IntoIterator<Item = (NodeId, NodeId, f64)>,
    ) -> Result<Self> {
        let mut graph = Graph::from_nodes(nodes)?;
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Build an edgeless graph from node ids
    pub fn from_nodes(nodes: impl IntoIterator<Item = NodeId>) -> Result<Self> {
        let mut graph = Graph::new();
        for id in nodes {
            graph.add_node(Node::new(id))?;
        }
        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index
            .get(&id)
            .and_then(|slot| self.slots.get(slot.0))
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.slots.iter()
    }

    /// Node ids in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().map(|node| node.id)
    }

    /// Edges in insertion order, resolved to current endpoint ids
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(|slot| self.resolve(slot))
    }

    /// Find the edge joining `a` and `b`, in either direction
    pub fn find_edge(&self, a: NodeId, b: NodeId) -> Option<Edge> {
        self.edge_position(a, b)
            .map(|pos| self.resolve(&self.edges[pos]))
    }

    /// Add a node; its id must not already be present
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.contains(node.id) {
            return Err(GraphError::DuplicateNode { id: node.id });
        }
        let slot = NodeIndex(self.slots.len());
        self.index.insert(node.id, slot);
        self.slots.push(node);
        Ok(())
    }

    /// Remove a node together with every edge touching it
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node> {
        let slot = self
            .index
            .remove(&id)
            .ok_or(GraphError::NodeNotFound { id })?;
        self.edges.retain(|edge| edge.from != slot && edge.to != slot);
        let node = self.slots.remove(slot.0);

        let shift = |ix: &mut NodeIndex| {
            if ix.0 > slot.0 {
                ix.0 -= 1;
            }
        };
        for edge in &mut self.edges {
            shift(&mut edge.from);
            shift(&mut edge.to);
        }
        self.index.values_mut().for_each(shift);
        Ok(node)
    }

    /// Change a node's id; incident edges follow automatically
    pub fn rename_node(&mut self, old: NodeId, new: NodeId) -> Result<()> {
        if old == new {
            return Err(GraphError::invalid_value(
                "rename",
                format!("new id {new} equals old id"),
            ));
        }
        let slot = *self
            .index
            .get(&old)
            .ok_or(GraphError::NodeNotFound { id: old })?;
        if self.contains(new) {
            return Err(GraphError::DuplicateNode { id: new });
        }
        if let Some(node) = self.slots.get_mut(slot.0) {
            node.id = new;
        }
        self.index.remove(&old);
        self.index.insert(new, slot);
        Ok(())
    }

    /// Add an undirected edge between two existing, distinct nodes
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<()> {
        if from == to {
            return Err(GraphError::SelfLoop { id: from });
        }
        let from_slot = self.slot_of(from)?;
        let to_slot = self.slot_of(to)?;
        if self.edge_position(from, to).is_some() {
            return Err(GraphError::DuplicateEdge { from, to });
        }
        check_weight(weight)?;
        self.edges.push(EdgeSlot {
            from: from_slot,
            to: to_slot,
            weight,
        });
        Ok(())
    }

    /// Remove the edge joining `a` and `b`
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Result<Edge> {
        if a == b {
            return Err(GraphError::SelfLoop { id: a });
        }
        let pos = self
            .edge_position(a, b)
            .ok_or(GraphError::EdgeNotFound { from: a, to: b })?;
        let slot = self.edges.remove(pos);
        Ok(self.resolve(&slot))
    }

    /// Replace the weight of the edge joining `a` and `b`
    pub fn update_edge_weight(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<()> {
        if a == b {
            return Err(GraphError::SelfLoop { id: a });
        }
        let pos = self
            .edge_position(a, b)
            .ok_or(GraphError::EdgeNotFound { from: a, to: b })?;
        check_weight(weight)?;
        self.edges[pos].weight = weight;
        Ok(())
    }

    /// Append an edge between known-distinct, known-present nodes without
    /// the duplicate scan; the adjacency builder dedupes pairs itself.
    pub(crate) fn push_edge_unchecked(&mut self, from: NodeId, to: NodeId, weight: f64) {
        if let (Some(&from), Some(&to)) = (self.index.get(&from), self.index.get(&to)) {
            self.edges.push(EdgeSlot { from, to, weight });
        }
    }

    fn slot_of(&self, id: NodeId) -> Result<NodeIndex> {
        self.index
            .get(&id)
            .copied()
            .ok_or(GraphError::NodeNotFound { id })
    }

    fn edge_position(&self, a: NodeId, b: NodeId) -> Option<usize> {
        let a = *self.index.get(&a)?;
        let b = *self.index.get(&b)?;
        self.edges
            .iter()
            .position(|e| (e.from == a && e.to == b) || (e.from == b && e.to == a))
    }

    fn resolve(&self, slot: &EdgeSlot) -> Edge {
        Edge {
            from: self.id_at(slot.from),
            to: self.id_at(slot.to),
            weight: slot.weight,
        }
    }

    fn id_at(&self, slot: NodeIndex) -> NodeId {
        self.slots.get(slot.0).map(|node| node.id).unwrap_or_default()
    }
}
