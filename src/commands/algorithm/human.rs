use graphlab_core::format::{format_cost, join_ids};
use graphlab_core::graph::{color_count, Algorithm, AlgorithmOutput, Run};

use crate::cli::Cli;

/// Output in human-readable format
pub fn output(cli: &Cli, result: &Run) {
    match &result.output {
        AlgorithmOutput::Order(order) => {
            if order.is_empty() {
                println!("No nodes visited");
            } else {
                println!("{}", join_ids(order, " -> "));
            }
        }
        AlgorithmOutput::Path(path) => {
            if path.found() {
                println!("Path: {}", join_ids(&path.path, " -> "));
                println!("Cost: {}", format_cost(path.cost));
            } else if let Algorithm::Dijkstra { start, goal } | Algorithm::AStar { start, goal } =
                result.algorithm
            {
                println!("No path from {} to {}", start, goal);
            }
        }
        AlgorithmOutput::Components(components) => {
            for (i, component) in components.iter().enumerate() {
                println!("Component {}: {}", i + 1, join_ids(component, ", "));
            }
            if !cli.quiet {
                println!("{} component(s)", components.len());
            }
        }
        AlgorithmOutput::Centrality(entries) => {
            for (rank, entry) in entries.iter().enumerate() {
                println!("{}. {} (degree {})", rank + 1, entry.node, entry.degree);
            }
        }
        AlgorithmOutput::Coloring(colors) => {
            for (node, color) in colors {
                println!("{}: color {}", node, color);
            }
            if !cli.quiet {
                println!("{} color(s)", color_count(colors));
            }
        }
    }

    if !cli.quiet {
        println!(
            "{} finished in {:.3} ms",
            result.algorithm,
            result.elapsed.as_secs_f64() * 1000.0
        );
    }
}
