use serde::{Deserialize, Serialize};

/// Integer node identifier, unique within a [`Graph`](super::Graph)
pub type NodeId = i64;

/// A graph node
///
/// Only `id` matters to the algorithms. The remaining fields describe the
/// node for the host (and for weight functions that derive edge costs from
/// node attributes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_count: Option<u32>,
}

impl Node {
    /// Create a node carrying only an id
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            activity: None,
            interaction: None,
            connection_count: None,
        }
    }

    pub fn with_activity(mut self, activity: f64) -> Self {
        self.activity = Some(activity);
        self
    }

    pub fn with_interaction(mut self, interaction: f64) -> Self {
        self.interaction = Some(interaction);
        self
    }

    pub fn with_connection_count(mut self, count: u32) -> Self {
        self.connection_count = Some(count);
        self
    }
}

impl From<NodeId> for Node {
    fn from(id: NodeId) -> Self {
        Node::new(id)
    }
}
