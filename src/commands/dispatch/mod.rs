//! Command dispatch logic for graphlab

use std::time::Instant;

use graphlab_core::config::AnalysisConfig;
use graphlab_core::error::Result;
use graphlab_core::graph::Algorithm;
use tracing::debug;

mod command;
pub(crate) mod macros;

pub use command::{Command, CommandContext, NoCommand};

use crate::cli::{Cli, Commands};
use crate::commands::{algorithm, edit, info};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::discover()?,
    };

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Bfs { start } => {
                algorithm::execute(ctx, Algorithm::Bfs { start: *start }, None)
            }
            Commands::Dfs { start } => {
                algorithm::execute(ctx, Algorithm::Dfs { start: *start }, None)
            }
            Commands::Dijkstra { start, goal } => algorithm::execute(
                ctx,
                Algorithm::Dijkstra {
                    start: *start,
                    goal: *goal,
                },
                None,
            ),
            Commands::Astar {
                start,
                goal,
                heuristic,
            } => algorithm::execute(
                ctx,
                Algorithm::AStar {
                    start: *start,
                    goal: *goal,
                },
                *heuristic,
            ),
            Commands::Components => algorithm::execute(ctx, Algorithm::Components, None),
            Commands::Centrality { k } => algorithm::execute(
                ctx,
                Algorithm::Centrality {
                    k: centrality_k(*k, ctx.config.top_k),
                },
                None,
            ),
            Commands::Color => algorithm::execute(ctx, Algorithm::Coloring, None),
            Commands::Info => info::execute(ctx),
            Commands::Node { command } => edit::execute_node(ctx, command),
            Commands::Edge { command } => edit::execute_edge(ctx, command),
        }
    }
}

/// Resolve `--k` against the configured default; non-positive counts report nothing
fn centrality_k(requested: Option<i64>, top_k: usize) -> usize {
    match requested {
        None => top_k,
        Some(k) => usize::try_from(k).unwrap_or(0),
    }
}
