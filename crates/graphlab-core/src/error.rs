//! Error types and exit codes for graphlab
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, duplicate edge, unreadable dataset, etc.)
//!
//! Algorithms never fail on absent nodes or unreachable goals; they return
//! empty results. Errors are reserved for structural edits, I/O, and the
//! "no graph loaded" condition.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::model::NodeId;

/// Exit codes for the graphlab CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, invalid edit, unreadable dataset (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphlab operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("no graph loaded")]
    NoGraph,

    #[error("node not found: {id}")]
    NodeNotFound { id: NodeId },

    #[error("node already exists: {id}")]
    DuplicateNode { id: NodeId },

    #[error("edge not found: {from} - {to}")]
    EdgeNotFound { from: NodeId, to: NodeId },

    #[error("edge already exists: {from} - {to}")]
    DuplicateEdge { from: NodeId, to: NodeId },

    #[error("self-loop not allowed: {id} - {id}")]
    SelfLoop { id: NodeId },

    #[error("invalid edge weight: {weight} (must be finite and non-negative)")]
    InvalidWeight { weight: f64 },

    #[error("invalid dataset {path:?}: {reason}")]
    InvalidDataset { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a dataset that could not be interpreted
    pub fn invalid_dataset(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidDataset {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::NoGraph
            | GraphError::NodeNotFound { .. }
            | GraphError::DuplicateNode { .. }
            | GraphError::EdgeNotFound { .. }
            | GraphError::DuplicateEdge { .. }
            | GraphError::SelfLoop { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::InvalidDataset { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::FailedOperationWithTarget { .. }
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::NoGraph => "no_graph",
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::DuplicateNode { .. } => "duplicate_node",
            GraphError::EdgeNotFound { .. } => "edge_not_found",
            GraphError::DuplicateEdge { .. } => "duplicate_edge",
            GraphError::SelfLoop { .. } => "self_loop",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::InvalidDataset { .. } => "invalid_dataset",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphlab operations
pub type Result<T> = std::result::Result<T, GraphError>;
