//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use widepath_core::config::WidepathConfig;
use widepath_core::error::{Result, WidepathError};
use widepath_core::graph::{load_graph, Graph};
use widepath_core::{trace_time, Algorithm};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: WidepathConfig,
    /// `--format` if given, else the configured default
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = WidepathConfig::resolve(cli.config.as_deref())?;
        let format = cli.format.unwrap_or(config.format);
        tracing::debug!(elapsed = ?start.elapsed(), %format, "resolve_config");
        Ok(Self {
            cli,
            config,
            format,
            start,
        })
    }

    /// Load the graph named by `--graph`
    pub fn load_graph(&self) -> Result<Graph> {
        let path = self.cli.graph.as_deref().ok_or_else(|| {
            WidepathError::UsageError(
                "no graph file given (use --graph or WIDEPATH_GRAPH)".to_string(),
            )
        })?;
        let load_start = Instant::now();
        let graph = load_graph(path)?;
        trace_time!(
            load_start,
            "load_graph",
            vertices = graph.vertex_count(),
            edges = graph.edge_count()
        );
        Ok(graph)
    }

    /// `--algorithm` if given, else the configured default
    pub fn algorithm(&self, flag: Option<Algorithm>) -> Algorithm {
        flag.unwrap_or(self.config.default_algorithm)
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
        println!("widepath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Maximum-bandwidth paths in weighted undirected graphs.");
        println!();
        println!("Run `widepath --help` for usage information.");
        Ok(())
    }
}
