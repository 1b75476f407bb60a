//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Default number of entries reported by degree centrality
pub const DEFAULT_TOP_K: usize = 5;

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// How many nodes `centrality` reports when `--k` is not given
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Weight for built edges and for edge edits without an explicit weight
    #[serde(default = "default_weight")]
    pub default_weight: f64,

    /// Heuristic A* uses when none is requested
    #[serde(default)]
    pub heuristic: HeuristicKind,

    /// Radius of the circular layout behind the euclidean heuristic
    #[serde(default = "default_layout_radius")]
    pub layout_radius: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            default_weight: default_weight(),
            heuristic: HeuristicKind::default(),
            layout_radius: default_layout_radius(),
        }
    }
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_weight() -> f64 {
    1.0
}

fn default_layout_radius() -> f64 {
    1.0
}

/// Built-in A* heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    /// Always 0
    #[default]
    Zero,
    /// Straight-line distance on a circular layout
    Euclidean,
}

impl FromStr for HeuristicKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(HeuristicKind::Zero),
            "euclidean" => Ok(HeuristicKind::Euclidean),
            other => Err(GraphError::invalid_value(
                "heuristic",
                format!("{other} (expected: zero or euclidean)"),
            )),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicKind::Zero => write!(f, "zero"),
            HeuristicKind::Euclidean => write!(f, "euclidean"),
        }
    }
}
