//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use graphlab_core::config::AnalysisConfig;
use graphlab_core::bail_usage;
use graphlab_core::error::Result;
use graphlab_core::model::Graph;

use crate::cli::Cli;
use crate::commands::dispatch::macros::trace_command;
use crate::dataset;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: AnalysisConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: AnalysisConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// The `--dataset` path, required by every command that touches a graph
    pub fn dataset_path(&self) -> Result<&'a Path> {
        let Some(path) = self.cli.dataset.as_deref() else {
            bail_usage!("no dataset given (use --dataset PATH)");
        };
        Ok(path)
    }

    /// The loaded graph, or `None` when the dataset file does not exist yet
    pub fn load_graph(&self) -> Result<Option<Graph>> {
        let path = self.dataset_path()?;
        let graph = dataset::load(path, self.config.default_weight)?;
        trace_command!(self.cli, self.start, "load_dataset");
        Ok(graph)
    }

    /// Write `graph` back to the dataset file
    pub fn save_graph(&self, graph: &Graph) -> Result<()> {
        dataset::save(self.dataset_path()?, graph)?;
        trace_command!(self.cli, self.start, "save_dataset");
        Ok(())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphlab {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Graph algorithms over a node dataset.");
        println!();
        println!("Run `graphlab --help` for usage information.");
        Ok(())
    }
}
