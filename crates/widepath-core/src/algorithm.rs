//! Algorithm selection
//!
//! Lets callers pick one of the three solvers by name and run a single
//! source/target query against it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WidepathError};
use crate::graph::Graph;
use crate::path::WidestPath;
use crate::spanning::MaxSpanningTree;
use crate::widest::{WidestPathArrayScan, WidestPathHeap};

/// The three widest-path strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Single source, linear fringe scan
    Scan,
    /// Single source, indexable max-heap fringe
    #[default]
    Heap,
    /// Maximum spanning forest, all pairs
    Kruskal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Scan, Algorithm::Heap, Algorithm::Kruskal];

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Scan => "single-source, array scan, O(V^2 + E)",
            Algorithm::Heap => "single-source, max-heap, O((V + E) log V)",
            Algorithm::Kruskal => "maximum spanning forest, O(E log E) build",
        }
    }

    /// Widest path from `source` to `target`, `None` if unreachable
    pub fn widest_path(
        &self,
        graph: &Graph,
        source: usize,
        target: usize,
    ) -> Result<Option<WidestPath>> {
        graph.check_vertex(target)?;
        match self {
            Algorithm::Scan => WidestPathArrayScan::new(graph, source)?.path(target),
            Algorithm::Heap => WidestPathHeap::new(graph, source)?.path(target),
            Algorithm::Kruskal => MaxSpanningTree::new(graph).path(source, target),
        }
    }

    /// Bandwidth from `source` to `target`, `None` if unreachable
    pub fn bandwidth(&self, graph: &Graph, source: usize, target: usize) -> Result<Option<f64>> {
        graph.check_vertex(target)?;
        match self {
            Algorithm::Scan => WidestPathArrayScan::new(graph, source)?.bandwidth(target),
            Algorithm::Heap => WidestPathHeap::new(graph, source)?.bandwidth(target),
            Algorithm::Kruskal => MaxSpanningTree::new(graph).bandwidth(source, target),
        }
    }
}

impl FromStr for Algorithm {
    type Err = WidepathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scan" | "array" => Ok(Algorithm::Scan),
            "heap" => Ok(Algorithm::Heap),
            "kruskal" | "mst" => Ok(Algorithm::Kruskal),
            other => Err(WidepathError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Scan => write!(f, "scan"),
            Algorithm::Heap => write!(f, "heap"),
            Algorithm::Kruskal => write!(f, "kruskal"),
        }
    }
}
