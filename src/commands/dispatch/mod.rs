//! Command dispatch logic for widepath

use tracing::debug;

use crate::cli::Commands;
use crate::commands;
use widepath_core::error::Result;

mod command;

pub use command::{Command, CommandContext, NoCommand};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => commands::path::execute_path(ctx, args),
            Commands::Bandwidth(args) => commands::path::execute_bandwidth(ctx, args),
            Commands::Tree => commands::tree::execute(ctx),
            Commands::Verify(args) => commands::verify::execute(ctx, args),
            Commands::Info => commands::info::execute(ctx),
        }
    }
}

pub fn run(ctx: &CommandContext) -> Result<()> {
    let result = match &ctx.cli.command {
        None => NoCommand.execute(ctx),
        Some(cmd) => cmd.execute(ctx),
    };
    debug!(elapsed = ?ctx.start.elapsed(), ok = result.is_ok(), "dispatch");
    result
}
