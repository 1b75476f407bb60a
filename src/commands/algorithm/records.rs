use graphlab_core::error::Result;
use graphlab_core::format::{format_cost, join_ids};
use graphlab_core::graph::{color_count, AlgorithmOutput, Run};

use crate::commands::dispatch::CommandContext;

/// Output in records format
///
/// One `H` header line, then one line per result item:
/// `V` visit, `P` path step, `C` component, `D` degree, `K` color.
pub fn output(ctx: &CommandContext, result: &Run) -> Result<()> {
    let dataset = ctx.dataset_path()?.display();
    let mode = result.algorithm.slug();

    match &result.output {
        AlgorithmOutput::Order(order) => {
            println!(
                "H graphlab=1 records=1 dataset={} mode={} visited={}",
                dataset,
                mode,
                order.len()
            );
            for (i, id) in order.iter().enumerate() {
                println!("V {} {}", i, id);
            }
        }
        AlgorithmOutput::Path(path) => {
            println!(
                "H graphlab=1 records=1 dataset={} mode={} found={} cost={} hops={}",
                dataset,
                mode,
                path.found(),
                format_cost(path.cost),
                path.hops()
            );
            for (i, id) in path.path.iter().enumerate() {
                println!("P {} {}", i, id);
            }
        }
        AlgorithmOutput::Components(components) => {
            println!(
                "H graphlab=1 records=1 dataset={} mode={} components={}",
                dataset,
                mode,
                components.len()
            );
            for (i, component) in components.iter().enumerate() {
                println!(
                    "C {} size={} nodes={}",
                    i,
                    component.len(),
                    join_ids(component, ",")
                );
            }
        }
        AlgorithmOutput::Centrality(entries) => {
            println!(
                "H graphlab=1 records=1 dataset={} mode={} k={}",
                dataset,
                mode,
                entries.len()
            );
            for (rank, entry) in entries.iter().enumerate() {
                println!("D {} {} degree={}", rank + 1, entry.node, entry.degree);
            }
        }
        AlgorithmOutput::Coloring(colors) => {
            println!(
                "H graphlab=1 records=1 dataset={} mode={} colors={}",
                dataset,
                mode,
                color_count(colors)
            );
            for (node, color) in colors {
                println!("K {} color={}", node, color);
            }
        }
    }

    Ok(())
}
