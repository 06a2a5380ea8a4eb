//! `widepath tree` - maximum spanning forest

use serde::Serialize;
use tracing::debug;

use super::dispatch::CommandContext;
use super::print_json;
use widepath_core::error::Result;
use widepath_core::format::records_header;
use widepath_core::graph::Edge;
use widepath_core::MaxSpanningTree;

#[derive(Serialize)]
struct TreeOutput<'a> {
    vertices: usize,
    components: usize,
    total_weight: f64,
    edges: &'a [Edge],
}

/// Execute the tree command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let mst = MaxSpanningTree::new(&graph);
    let components = mst.component_count();
    debug!(
        edges = mst.edges().len(),
        components,
        elapsed = ?ctx.start.elapsed(),
        "tree"
    );

    crate::output_by_format!(ctx.format,
        json => {
            print_json(&TreeOutput {
                vertices: mst.vertex_count(),
                components,
                total_weight: mst.total_weight(),
                edges: mst.edges(),
            })?;
        },
        human => {
            for edge in mst.edges() {
                println!("{} -- {}  {}", edge.from, edge.to, edge.weight);
            }
            if !ctx.cli.quiet {
                println!(
                    "{} edges, {} {}, total weight {}",
                    mst.edges().len(),
                    components,
                    if components == 1 { "component" } else { "components" },
                    mst.total_weight()
                );
            }
        },
        records => {
            println!(
                "{}",
                records_header(
                    "tree",
                    &[
                        ("vertices", mst.vertex_count().to_string()),
                        ("components", components.to_string()),
                    ],
                )
            );
            for edge in mst.edges() {
                println!("E {} {} {}", edge.from, edge.to, edge.weight);
            }
        }
    );

    Ok(())
}
