//! Graphlab - graph algorithms CLI
//!
//! Loads a node dataset, applies structural edits, and runs BFS, DFS,
//! Dijkstra, A*, connected components, degree centrality and
//! Welsh-Powell coloring over it.

mod cli;
mod commands;
mod dataset;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use graphlab_core::error::{ExitCode as GraphExitCode, GraphError};
use graphlab_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let args: Vec<String> = env::args().collect();

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if wants_json(args.get(1..).unwrap_or_default()) => match parse_failure(&err) {
            Some(graph_error) => {
                eprintln!("{}", graph_error.to_json());
                return ExitCode::from(graph_error.exit_code() as u8);
            }
            None => err.exit(),
        },
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// Whether the arguments select `--format json`
fn wants_json(args: &[String]) -> bool {
    args.iter().enumerate().any(|(i, arg)| match arg.strip_prefix("--format") {
        Some("=json") => true,
        Some("") => args.get(i + 1).is_some_and(|value| value == "json"),
        _ => false,
    })
}

/// The error to report for a failed parse; `None` for help and version output
fn parse_failure(err: &clap::Error) -> Option<GraphError> {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::Io | ErrorKind::Format => Some(GraphError::Other(err.to_string())),
        _ => Some(GraphError::UsageError(err.to_string())),
    }
}
