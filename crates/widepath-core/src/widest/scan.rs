//! Fringe selection by linear scan

use super::{FringeStrategy, WidestPathTree};
use crate::error::Result;

/// Keeps no state of its own; every selection scans all vertices and picks
/// the fringe vertex with the largest bandwidth, lowest id on ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayScanFringe;

impl FringeStrategy for ArrayScanFringe {
    const NAME: &'static str = "scan";

    fn for_vertices(_vertex_count: usize) -> Self {
        ArrayScanFringe
    }

    fn discover(&mut self, _vertex: usize, _bandwidth: f64) -> Result<()> {
        Ok(())
    }

    fn improve(&mut self, _vertex: usize, _bandwidth: f64) -> Result<()> {
        Ok(())
    }

    fn take_best(&mut self, tree: &WidestPathTree) -> Result<Option<usize>> {
        let mut best: Option<(usize, f64)> = None;
        for (v, bandwidth) in tree.fringe() {
            match best {
                Some((_, top)) if top >= bandwidth => {}
                _ => best = Some((v, bandwidth)),
            }
        }
        Ok(best.map(|(v, _)| v))
    }
}
