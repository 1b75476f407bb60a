//! Dataset file handling
//!
//! A dataset is a JSON document holding node records and an optional list
//! of edge weights:
//!
//! ```json
//! { "nodes": [ { "id": 1, "neighbors": "2,3" } ],
//!   "edges": [ { "from": 1, "to": 2, "weight": 1.5 } ] }
//! ```
//!
//! Edges come from the neighbor lists; `edges` only overrides weights of
//! pairs that exist. Saving regenerates both sections from the graph.

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use graphlab_core::builder::{build_graph, NodeRecord};
use graphlab_core::error::{GraphError, Result};
use graphlab_core::format::join_ids;
use graphlab_core::graph::Adjacency;
use graphlab_core::model::{Graph, NodeId};
use graphlab_core::trace_time;
use graphlab_core::weight::ConstantWeight;

/// Explicit weight for one undirected edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeWeight {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// On-disk dataset layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeWeight>,
}

impl Dataset {
    /// Read a dataset file
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read dataset", path.display(), e))?;
        serde_json::from_str(&content).map_err(|e| GraphError::invalid_dataset(path, e))
    }

    /// Write the dataset as pretty JSON
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(path, content)
            .map_err(|e| GraphError::io_operation("write dataset", path.display(), e))
    }

    /// Build the graph, weighting edges with `default_weight` before
    /// applying the explicit weights
    pub fn to_graph(&self, default_weight: f64) -> Result<Graph> {
        let mut graph = build_graph(&self.nodes, &ConstantWeight(default_weight))?;
        for edge in &self.edges {
            if graph.find_edge(edge.from, edge.to).is_some() {
                graph.update_edge_weight(edge.from, edge.to, edge.weight)?;
            } else {
                trace!(from = edge.from, to = edge.to, "weight for unknown edge ignored");
            }
        }
        Ok(graph)
    }

    /// Snapshot a graph: neighbor lists ascending, every edge weight listed
    pub fn from_graph(graph: &Graph) -> Self {
        let adjacency = Adjacency::build(graph);
        let nodes = graph
            .nodes()
            .map(|node| NodeRecord {
                id: node.id,
                neighbors: join_ids(adjacency.neighbors(node.id), ","),
                activity: node.activity,
                interaction: node.interaction,
                connection_count: node.connection_count,
            })
            .collect();
        let edges = graph
            .edges()
            .map(|edge| EdgeWeight {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            })
            .collect();
        Self { nodes, edges }
    }
}

/// Load the graph stored at `path`
///
/// A missing file means no graph is loaded (`Ok(None)`).
pub fn load(path: &Path, default_weight: f64) -> Result<Option<Graph>> {
    if !path.exists() {
        debug!(path = %path.display(), "dataset file not found");
        return Ok(None);
    }
    let start = Instant::now();
    let graph = Dataset::read(path)?.to_graph(default_weight)?;
    trace_time!(start, "load_dataset", nodes = graph.node_count());
    Ok(Some(graph))
}

/// Persist `graph` to `path`
pub fn save(path: &Path, graph: &Graph) -> Result<()> {
    Dataset::from_graph(graph).write(path)?;
    debug!(path = %path.display(), nodes = graph.node_count(), "dataset saved");
    Ok(())
}
