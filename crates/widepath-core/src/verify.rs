//! Cross-validation of the three solvers
//!
//! Every query is answered independently by the array-scan solver, the heap
//! solver and the maximum spanning forest. Their bandwidths must agree
//! exactly, unreachable included; any difference is a
//! [`WidepathError::Disagreement`].

use serde::Serialize;

use crate::error::{Result, WidepathError};
use crate::graph::Graph;
use crate::path::serialize_optional_bandwidth;
use crate::spanning::MaxSpanningTree;
use crate::widest::{WidestPathArrayScan, WidestPathHeap};

/// Agreed answer for one source/target pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairCheck {
    pub source: usize,
    pub target: usize,
    /// `None` when every solver reports the target unreachable
    #[serde(serialize_with = "serialize_optional_bandwidth")]
    pub bandwidth: Option<f64>,
}

/// Totals from a verification run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub sources_checked: usize,
    pub pairs_checked: usize,
    pub unreachable_pairs: usize,
    pub forest_valid: bool,
}

fn agree(
    source: usize,
    target: usize,
    scan: Option<f64>,
    heap: Option<f64>,
    kruskal: Option<f64>,
) -> Result<PairCheck> {
    if scan != heap || heap != kruskal {
        return Err(WidepathError::Disagreement {
            from: source,
            to: target,
            detail: format!(
                "scan={:?} heap={:?} kruskal={:?}",
                scan, heap, kruskal
            ),
        });
    }
    Ok(PairCheck {
        source,
        target,
        bandwidth: scan,
    })
}

/// Run all three solvers for one pair and compare
pub fn cross_check(graph: &Graph, source: usize, target: usize) -> Result<PairCheck> {
    graph.check_vertex(target)?;
    let scan = WidestPathArrayScan::new(graph, source)?.bandwidth(target)?;
    let heap = WidestPathHeap::new(graph, source)?.bandwidth(target)?;
    let kruskal = MaxSpanningTree::new(graph).bandwidth(source, target)?;
    agree(source, target, scan, heap, kruskal)
}

/// Compare every target from `source`, reusing a prebuilt forest
pub fn cross_check_source(
    graph: &Graph,
    forest: &MaxSpanningTree,
    source: usize,
) -> Result<Vec<PairCheck>> {
    let scan = WidestPathArrayScan::new(graph, source)?;
    let heap = WidestPathHeap::new(graph, source)?;
    let walk = forest.traverse_from(source)?;

    (0..graph.vertex_count())
        .map(|target| {
            agree(
                source,
                target,
                scan.bandwidth(target)?,
                heap.bandwidth(target)?,
                walk.bandwidth_to(target)?,
            )
        })
        .collect()
}

/// Cross-check every target from each of `sources`.
///
/// `interrupted` is polled before each source; when it returns true the run
/// stops with [`WidepathError::Interrupted`].
#[tracing::instrument(skip_all, fields(vertices = graph.vertex_count()))]
pub fn verify_sources<I, F>(graph: &Graph, sources: I, interrupted: F) -> Result<VerifyReport>
where
    I: IntoIterator<Item = usize>,
    F: Fn() -> bool,
{
    let forest = MaxSpanningTree::new(graph);
    let mut report = VerifyReport {
        forest_valid: forest.validate(graph),
        ..Default::default()
    };
    if !report.forest_valid {
        tracing::warn!("spanning forest failed validation");
    }

    for source in sources {
        if interrupted() {
            return Err(WidepathError::Interrupted);
        }
        let checks = cross_check_source(graph, &forest, source)?;
        report.sources_checked += 1;
        report.pairs_checked += checks.len();
        report.unreachable_pairs += checks.iter().filter(|c| c.bandwidth.is_none()).count();
        tracing::trace!(source, pairs = checks.len(), "source_verified");
    }

    tracing::debug!(
        sources = report.sources_checked,
        pairs = report.pairs_checked,
        "verify_complete"
    );
    Ok(report)
}
