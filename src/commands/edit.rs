//! Structural edit commands: `node add|remove|rename`, `edge add|remove|update`
//!
//! Each edit loads the dataset (an absent file starts an empty graph),
//! applies one change and writes the dataset back.

use serde_json::json;
use tracing::info;

use graphlab_core::error::Result;
use graphlab_core::format::format_cost;
use graphlab_core::model::{Graph, Node, NodeId};

use crate::cli::{EdgeCommands, NodeCommands, OutputFormat};
use crate::commands::dispatch::CommandContext;

/// Outcome of one edit, reported in every output format
struct EditReport {
    action: &'static str,
    message: String,
    fields: Vec<(&'static str, String)>,
}

pub fn execute_node(ctx: &CommandContext, command: &NodeCommands) -> Result<()> {
    let mut graph = ctx.load_graph()?.unwrap_or_default();

    let report = match command {
        NodeCommands::Add(args) => {
            let node = Node {
                id: args.id,
                activity: args.activity,
                interaction: args.interaction,
                connection_count: args.connection_count,
            };
            graph.add_node(node)?;
            EditReport {
                action: "node.add",
                message: format!("Added node {}", args.id),
                fields: vec![("id", args.id.to_string())],
            }
        }
        NodeCommands::Remove { id } => {
            let edges_before = graph.edge_count();
            graph.remove_node(*id)?;
            let dropped = edges_before - graph.edge_count();
            EditReport {
                action: "node.remove",
                message: format!("Removed node {} and {} edge(s)", id, dropped),
                fields: vec![("id", id.to_string()), ("edges_removed", dropped.to_string())],
            }
        }
        NodeCommands::Rename { old, new } => {
            graph.rename_node(*old, *new)?;
            EditReport {
                action: "node.rename",
                message: format!("Renamed node {} to {}", old, new),
                fields: vec![("old", old.to_string()), ("new", new.to_string())],
            }
        }
    };

    commit(ctx, &graph, report)
}

pub fn execute_edge(ctx: &CommandContext, command: &EdgeCommands) -> Result<()> {
    let mut graph = ctx.load_graph()?.unwrap_or_default();

    let report = match command {
        EdgeCommands::Add { a, b, weight } => {
            let weight = weight.unwrap_or(ctx.config.default_weight);
            graph.add_edge(*a, *b, weight)?;
            edge_report("edge.add", format!("Added edge {} - {}", a, b), *a, *b, Some(weight))
        }
        EdgeCommands::Remove { a, b } => {
            graph.remove_edge(*a, *b)?;
            edge_report("edge.remove", format!("Removed edge {} - {}", a, b), *a, *b, None)
        }
        EdgeCommands::Update { a, b, weight } => {
            graph.update_edge_weight(*a, *b, *weight)?;
            edge_report(
                "edge.update",
                format!("Updated edge {} - {}", a, b),
                *a,
                *b,
                Some(*weight),
            )
        }
    };

    commit(ctx, &graph, report)
}

fn edge_report(
    action: &'static str,
    message: String,
    a: NodeId,
    b: NodeId,
    weight: Option<f64>,
) -> EditReport {
    let mut fields = vec![("from", a.to_string()), ("to", b.to_string())];
    if let Some(weight) = weight {
        fields.push(("weight", format_cost(weight)));
    }
    let message = match weight {
        Some(weight) => format!("{} (weight {})", message, format_cost(weight)),
        None => message,
    };
    EditReport {
        action,
        message,
        fields,
    }
}

fn commit(ctx: &CommandContext, graph: &Graph, report: EditReport) -> Result<()> {
    ctx.save_graph(graph)?;
    info!(action = report.action, "edit saved");

    match ctx.cli.format {
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{}", report.message);
            }
        }
        OutputFormat::Json => {
            let mut value = json!({
                "status": "ok",
                "action": report.action,
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
            });
            if let Some(object) = value.as_object_mut() {
                for (key, field) in &report.fields {
                    object.insert((*key).to_string(), json!(field));
                }
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Records => {
            let fields: String = report
                .fields
                .iter()
                .map(|(key, value)| format!(" {}={}", key, value))
                .collect();
            println!(
                "H graphlab=1 records=1 dataset={} mode={} status=ok{} nodes={} edges={}",
                ctx.dataset_path()?.display(),
                report.action,
                fields,
                graph.node_count(),
                graph.edge_count()
            );
        }
    }

    Ok(())
}
