//! `widepath path` and `widepath bandwidth`

use serde::Serialize;
use tracing::debug;

use super::print_json;
use super::dispatch::CommandContext;
use crate::cli::QueryArgs;
use widepath_core::error::{Result, WidepathError};
use widepath_core::format::records_header;
use widepath_core::path::{format_bandwidth, serialize_bandwidth};
use widepath_core::{Algorithm, WidestPath};

#[derive(Serialize)]
struct PathOutput<'a> {
    algorithm: Algorithm,
    source: usize,
    target: usize,
    hops: usize,
    #[serde(flatten)]
    path: &'a WidestPath,
}

#[derive(Serialize)]
struct BandwidthOutput {
    algorithm: Algorithm,
    source: usize,
    target: usize,
    #[serde(serialize_with = "serialize_bandwidth")]
    bandwidth: f64,
}

fn query_header(algorithm: Algorithm, mode: &str, args: &QueryArgs) -> String {
    records_header(
        mode,
        &[
            ("algorithm", algorithm.to_string()),
            ("source", args.source.to_string()),
            ("target", args.target.to_string()),
        ],
    )
}

/// Execute the path command
pub fn execute_path(ctx: &CommandContext, args: &QueryArgs) -> Result<()> {
    let graph = ctx.load_graph()?;
    let algorithm = ctx.algorithm(args.algorithm);

    let path = algorithm
        .widest_path(&graph, args.source, args.target)?
        .ok_or(WidepathError::Unreachable {
            from: args.source,
            to: args.target,
        })?;
    debug!(%algorithm, hops = path.hops(), elapsed = ?ctx.start.elapsed(), "path");

    crate::output_by_format!(ctx.format,
        json => {
            print_json(&PathOutput {
                algorithm,
                source: args.source,
                target: args.target,
                hops: path.hops(),
                path: &path,
            })?;
        },
        human => {
            let walk: Vec<String> = path.vertices.iter().map(|v| v.to_string()).collect();
            println!("{}", walk.join(" -> "));
            println!(
                "bandwidth: {} ({}, {} hops)",
                format_bandwidth(path.bandwidth),
                algorithm,
                path.hops()
            );
        },
        records => {
            println!("{}", query_header(algorithm, "path", args));
            let walk: Vec<String> = path.vertices.iter().map(|v| v.to_string()).collect();
            println!("P {}", walk.join(" "));
            println!("B {}", format_bandwidth(path.bandwidth));
        }
    );

    Ok(())
}

/// Execute the bandwidth command
pub fn execute_bandwidth(ctx: &CommandContext, args: &QueryArgs) -> Result<()> {
    let graph = ctx.load_graph()?;
    let algorithm = ctx.algorithm(args.algorithm);

    let bandwidth = algorithm
        .bandwidth(&graph, args.source, args.target)?
        .ok_or(WidepathError::Unreachable {
            from: args.source,
            to: args.target,
        })?;
    debug!(%algorithm, bandwidth, elapsed = ?ctx.start.elapsed(), "bandwidth");

    crate::output_by_format!(ctx.format,
        json => {
            print_json(&BandwidthOutput {
                algorithm,
                source: args.source,
                target: args.target,
                bandwidth,
            })?;
        },
        human => {
            println!("{}", format_bandwidth(bandwidth));
        },
        records => {
            println!("{}", query_header(algorithm, "bandwidth", args));
            println!("B {}", format_bandwidth(bandwidth));
        }
    );

    Ok(())
}
