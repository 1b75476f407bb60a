//! Algorithm commands: bfs, dfs, dijkstra, astar, components, centrality, color

mod human;
mod json;
mod records;

use graphlab_core::config::HeuristicKind;
use graphlab_core::error::{GraphError, Result};
use graphlab_core::graph::{run, Algorithm};

use crate::cli::OutputFormat;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;

/// Run `algorithm` over the dataset and print the result
///
/// Start and goal ids must name existing nodes.
pub fn execute(
    ctx: &CommandContext,
    algorithm: Algorithm,
    heuristic: Option<HeuristicKind>,
) -> Result<()> {
    let graph = ctx.load_graph()?;

    if let Some(graph) = &graph {
        if let Some(id) = algorithm
            .endpoints()
            .into_iter()
            .find(|id| !graph.contains(*id))
        {
            return Err(GraphError::NodeNotFound { id });
        }
    }

    let heuristic = match (&graph, algorithm) {
        (Some(graph), Algorithm::AStar { .. }) => {
            Some(ctx.config.heuristic_for(graph, heuristic))
        }
        _ => None,
    };

    let result = run(graph.as_ref(), &algorithm, heuristic.as_deref())?;
    trace_command!(ctx.cli, ctx.start, "run_algorithm");

    match ctx.cli.format {
        OutputFormat::Human => human::output(ctx.cli, &result),
        OutputFormat::Json => json::output(&result)?,
        OutputFormat::Records => records::output(ctx, &result)?,
    }

    Ok(())
}
