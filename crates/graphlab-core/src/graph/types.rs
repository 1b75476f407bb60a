use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::NodeId;

/// Node id to 0-based color index
pub type Coloring = BTreeMap<NodeId, usize>;

/// Connected components, each sorted ascending, ordered by smallest member
pub type Components = Vec<Vec<NodeId>>;

/// Result of a shortest-path search
///
/// An empty `path` means "no path": either an endpoint is absent or the
/// goal is unreachable. `cost` is 0 in that case.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PathResult {
    pub path: Vec<NodeId>,
    pub cost: f64,
}

impl PathResult {
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A node with its degree, as ranked by degree centrality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DegreeEntry {
    pub node: NodeId,
    pub degree: usize,
}

impl From<(NodeId, usize)> for DegreeEntry {
    fn from((node, degree): (NodeId, usize)) -> Self {
        Self { node, degree }
    }
}
