//! `info` command: dataset summary

use serde_json::json;

use graphlab_core::error::{GraphError, Result};
use graphlab_core::graph::Adjacency;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?.ok_or(GraphError::NoGraph)?;
    let path = ctx.dataset_path()?;

    let adjacency = Adjacency::build(&graph);
    let max_degree = adjacency
        .ids()
        .map(|id| adjacency.degree(id))
        .max()
        .unwrap_or(0);

    match ctx.cli.format {
        OutputFormat::Human => {
            println!("Dataset: {}", path.display());
            println!("Nodes: {}", graph.node_count());
            println!("Edges: {}", graph.edge_count());
            println!("Max degree: {}", max_degree);
        }
        OutputFormat::Json => {
            let value = json!({
                "dataset": path.display().to_string(),
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "max_degree": max_degree,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Records => {
            println!(
                "H graphlab=1 records=1 dataset={} mode=info nodes={} edges={} max_degree={}",
                path.display(),
                graph.node_count(),
                graph.edge_count(),
                max_degree
            );
        }
    }

    Ok(())
}
