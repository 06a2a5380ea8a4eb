//! Widepath - maximum-bandwidth path CLI
//!
//! Loads a weighted undirected graph and answers widest-path queries with
//! any of three solvers, or cross-checks them against each other.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use commands::dispatch::CommandContext;
use widepath_core::error::{ExitCode as WidepathExitCode, WidepathError};
use widepath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is global, but clap may fail before we can read it.
            // If the user asked for JSON, emit a structured error envelope.
            if argv_format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        WidepathError::UsageError(err.to_string())
                    }
                    clap::error::ErrorKind::ArgumentConflict
                        if err.to_string().contains("--format") =>
                    {
                        WidepathError::DuplicateFormat
                    }
                    clap::error::ErrorKind::ArgumentConflict => {
                        WidepathError::UsageError(err.to_string())
                    }
                    _ => WidepathError::Other(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let ctx = match CommandContext::new(&cli, start) {
        Ok(ctx) => ctx,
        Err(e) => return report_error(&e, cli.format.unwrap_or_default(), cli.quiet),
    };

    match commands::dispatch::run(&ctx) {
        Ok(()) => ExitCode::from(WidepathExitCode::Success as u8),
        Err(e) => report_error(&e, ctx.format, cli.quiet),
    }
}

fn report_error(e: &WidepathError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !quiet {
        eprintln!("error: {}", e);
    }

    ExitCode::from(e.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
