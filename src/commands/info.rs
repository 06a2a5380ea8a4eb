//! `widepath info` - graph statistics

use serde::Serialize;

use super::dispatch::CommandContext;
use super::print_json;
use widepath_core::error::Result;
use widepath_core::format::records_header;
use widepath_core::graph::Graph;

#[derive(Debug, Serialize)]
struct GraphStats {
    vertices: usize,
    edges: usize,
    average_degree: f64,
    neighbor_density: f64,
    components: usize,
}

impl GraphStats {
    fn of(graph: &Graph) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            average_degree: graph.average_degree(),
            neighbor_density: graph.neighbor_density(),
            components: graph.connected_components(),
        }
    }
}

/// Execute the info command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let stats = GraphStats::of(&graph);

    crate::output_by_format!(ctx.format,
        json => {
            print_json(&stats)?;
        },
        human => {
            println!("vertices:         {}", stats.vertices);
            println!("edges:            {}", stats.edges);
            println!("average degree:   {:.2}", stats.average_degree);
            println!("neighbor density: {:.2}%", stats.neighbor_density * 100.0);
            println!("components:       {}", stats.components);
        },
        records => {
            println!("{}", records_header("info", &[]));
            println!(
                "S vertices={} edges={} average_degree={:.4} neighbor_density={:.4} components={}",
                stats.vertices,
                stats.edges,
                stats.average_degree,
                stats.neighbor_density,
                stats.components
            );
        }
    );

    Ok(())
}
