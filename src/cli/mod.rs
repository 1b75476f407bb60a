//! CLI argument parsing for graphlab
//!
//! Global flags: --dataset, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use graphlab_core::config::HeuristicKind;
pub use graphlab_core::format::OutputFormat;
use graphlab_core::model::NodeId;
use parse::{parse_format, parse_heuristic};

/// Graphlab - run classic graph algorithms over a node dataset
#[derive(Parser, Debug)]
#[command(name = "graphlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Dataset file (JSON node records plus edge weights)
    #[arg(long, short = 'd', global = true, env = "GRAPHLAB_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Analysis config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: human, json or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first visit order from a start node
    Bfs {
        /// Start node id
        start: NodeId,
    },

    /// Depth-first visit order from a start node
    Dfs {
        /// Start node id
        start: NodeId,
    },

    /// Cheapest path between two nodes (Dijkstra)
    Dijkstra {
        /// Start node id
        start: NodeId,
        /// Goal node id
        goal: NodeId,
    },

    /// Cheapest path between two nodes (A*)
    Astar {
        /// Start node id
        start: NodeId,
        /// Goal node id
        goal: NodeId,
        /// Heuristic: zero or euclidean (defaults to the configured one)
        #[arg(long, value_parser = parse_heuristic)]
        heuristic: Option<HeuristicKind>,
    },

    /// Connected components
    Components,

    /// Top-K nodes by degree
    Centrality {
        /// Number of nodes to report (defaults to the configured top_k;
        /// zero or negative reports nothing)
        #[arg(long, short, allow_negative_numbers = true)]
        k: Option<i64>,
    },

    /// Welsh-Powell graph coloring
    Color,

    /// Show dataset node and edge counts
    Info,

    /// Add, remove or rename nodes
    Node {
        #[command(subcommand)]
        command: NodeCommands,
    },

    /// Add, remove or reweight edges
    Edge {
        #[command(subcommand)]
        command: EdgeCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum NodeCommands {
    /// Add a node
    Add(NodeAddArgs),

    /// Remove a node and its edges
    Remove {
        /// Node id
        id: NodeId,
    },

    /// Change a node's id
    Rename {
        /// Current id
        old: NodeId,
        /// New id
        new: NodeId,
    },
}

#[derive(Args, Debug)]
pub struct NodeAddArgs {
    /// Node id
    pub id: NodeId,

    /// Activity score
    #[arg(long)]
    pub activity: Option<f64>,

    /// Interaction score
    #[arg(long)]
    pub interaction: Option<f64>,

    /// Connection count
    #[arg(long)]
    pub connection_count: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum EdgeCommands {
    /// Add an edge
    Add {
        /// First endpoint
        a: NodeId,
        /// Second endpoint
        b: NodeId,
        /// Edge weight (defaults to the configured default_weight)
        #[arg(long, short)]
        weight: Option<f64>,
    },

    /// Remove an edge
    Remove {
        /// First endpoint
        a: NodeId,
        /// Second endpoint
        b: NodeId,
    },

    /// Replace an edge's weight
    Update {
        /// First endpoint
        a: NodeId,
        /// Second endpoint
        b: NodeId,
        /// New weight
        #[arg(long, short)]
        weight: f64,
    },
}
