//! Adjacency builder: node records to [`Graph`]
//!
//! Each record lists its neighbors as a loosely formatted string
//! (`"2,3"`, `"[2; 3]"`, `"2 3"`). Pairs mentioned from either side collapse
//! into a single undirected edge; references to unknown ids and
//! self-references are dropped.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{GraphError, Result};
use crate::model::{Graph, Node, NodeId};
use crate::weight::WeightFn;

/// A raw node row as supplied by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    /// Delimited neighbor id list
    #[serde(default)]
    pub neighbors: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_count: Option<u32>,
}

impl NodeRecord {
    pub fn new(id: NodeId, neighbors: impl Into<String>) -> Self {
        Self {
            id,
            neighbors: neighbors.into(),
            activity: None,
            interaction: None,
            connection_count: None,
        }
    }

    fn to_node(&self) -> Node {
        Node {
            id: self.id,
            activity: self.activity,
            interaction: self.interaction,
            connection_count: self.connection_count,
        }
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, ',' | ';' | '[' | ']' | '"') || c.is_whitespace()
}

/// Parse a delimited neighbor list into ids, in order
///
/// Separators are comma, semicolon, square brackets, double quotes and
/// whitespace. Tokens that are not integers are skipped.
pub fn parse_neighbors(raw: &str) -> Vec<NodeId> {
    raw.split(is_separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<NodeId>() {
            Ok(id) => Some(id),
            Err(_) => {
                trace!(token, "skipping malformed neighbor token");
                None
            }
        })
        .collect()
}

/// Build a graph from node records
///
/// Nodes keep record order; a record repeating an earlier id is dropped.
/// Edges appear in the order their pair is first discovered and are
/// weighted by `weights` with the smaller id as the first endpoint.
#[tracing::instrument(skip(records, weights), fields(records = records.len()))]
pub fn build_graph(records: &[NodeRecord], weights: &dyn WeightFn) -> Result<Graph> {
    let mut graph = Graph::new();
    for record in records {
        if graph.contains(record.id) {
            warn!(id = record.id, "duplicate node record ignored");
            continue;
        }
        graph.add_node(record.to_node())?;
    }

    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
    for record in records {
        for neighbor in parse_neighbors(&record.neighbors) {
            if neighbor == record.id || !graph.contains(neighbor) {
                continue;
            }
            let pair = (record.id.min(neighbor), record.id.max(neighbor));
            if !seen.insert(pair) {
                continue;
            }
            let weight = match (graph.node(pair.0), graph.node(pair.1)) {
                (Some(a), Some(b)) => weights.weight(a, b),
                _ => continue,
            };
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(GraphError::InvalidWeight { weight });
            }
            graph.push_edge_unchecked(pair.0, pair.1, weight);
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );
    Ok(graph)
}
