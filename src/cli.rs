//! CLI argument parsing for widepath
//!
//! Global flags: --graph, --format, --config, --quiet, --verbose,
//! --log-level, --log-json

pub mod format;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use widepath_core::format::OutputFormat;
use widepath_core::Algorithm;

/// Widepath - maximum-bandwidth paths in weighted undirected graphs
#[derive(Parser, Debug)]
#[command(name = "widepath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file (.json, .toml, .yaml or .yml)
    #[arg(long, short = 'g', global = true, env = "WIDEPATH_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format [default: from config, else human]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Config file (overrides the default lookup)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `widepath_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the widest path between two vertices
    Path(QueryArgs),

    /// Print only the bandwidth between two vertices
    Bandwidth(QueryArgs),

    /// Print the maximum spanning forest
    Tree,

    /// Cross-check all three algorithms against each other
    Verify(VerifyArgs),

    /// Print graph statistics
    Info,
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Source vertex
    pub source: usize,

    /// Target vertex
    pub target: usize,

    /// Solver: scan, heap or kruskal [default: from config, else heap]
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,
}

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Only check paths starting at this vertex
    #[arg(long, short)]
    pub source: Option<usize>,

    /// Stop after this many sources (all-sources mode)
    #[arg(long, conflicts_with = "source")]
    pub max_sources: Option<usize>,
}

/// Parse output format from string
fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm name from string
fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}
