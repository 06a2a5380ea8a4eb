//! `widepath verify` - cross-check the three solvers

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::dispatch::CommandContext;
use super::print_json;
use crate::cli::VerifyArgs;
use widepath_core::error::{Result, WidepathError};
use widepath_core::format::records_header;
use widepath_core::verify::{verify_sources, VerifyReport};

#[derive(Serialize)]
struct VerifyOutput<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<usize>,
    #[serde(flatten)]
    report: &'a VerifyReport,
}

/// Execute the verify command
pub fn execute(ctx: &CommandContext, args: &VerifyArgs) -> Result<()> {
    let graph = ctx.load_graph()?;

    let sources: Vec<usize> = match args.source {
        Some(source) => {
            graph.check_vertex(source)?;
            vec![source]
        }
        None => {
            let limit = args
                .max_sources
                .or(ctx.config.verify.max_sources)
                .unwrap_or(graph.vertex_count());
            (0..graph.vertex_count()).take(limit).collect()
        }
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    if let Err(e) = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    }) {
        warn!(error = %e, "failed to install Ctrl-C handler");
    }

    let report = verify_sources(&graph, sources, || interrupted.load(Ordering::SeqCst))?;
    debug!(
        sources = report.sources_checked,
        pairs = report.pairs_checked,
        elapsed = ?ctx.start.elapsed(),
        "verify"
    );

    if !report.forest_valid {
        return Err(WidepathError::Other(
            "maximum spanning forest failed validation".to_string(),
        ));
    }

    crate::output_by_format!(ctx.format,
        json => {
            print_json(&VerifyOutput {
                status: "ok",
                source: args.source,
                report: &report,
            })?;
        },
        human => {
            if !ctx.cli.quiet {
                println!(
                    "ok: {} sources, {} pairs agree ({} unreachable)",
                    report.sources_checked, report.pairs_checked, report.unreachable_pairs
                );
            }
        },
        records => {
            println!("{}", records_header("verify", &[("status", "ok".to_string())]));
            println!(
                "R sources={} pairs={} unreachable={} forest_valid={}",
                report.sources_checked,
                report.pairs_checked,
                report.unreachable_pairs,
                report.forest_valid
            );
        }
    );

    Ok(())
}
