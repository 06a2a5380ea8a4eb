//! Maximum spanning forest and all-pairs widest-path queries
//!
//! Kruskal's greedy construction run with the heaviest edges first: every
//! edge is considered once in descending weight order and kept when its
//! endpoints are still in different union-find sets. For any two connected
//! vertices the unique forest path between them has the same bottleneck as
//! the widest path in the original graph, so one build answers every pair.


use crate::error::Result;
use crate::graph::{Edge, Graph, Neighbor};
use crate::heap::heap_sort;
use crate::path::WidestPath;
use crate::traversal::TreePathTraversal;
use crate::union_find::UnionFind;

/// Maximum spanning forest of a graph
#[derive(Debug, Clone)]
pub struct MaxSpanningTree {
    forest: Graph,
    /// Kept edges in the order they were accepted (heaviest first)
    edges: Vec<Edge>,
}

impl MaxSpanningTree {
    /// Build the forest for `graph`
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new(graph: &Graph) -> Self {
        let n = graph.vertex_count();

        // each undirected edge once; self loops can never join two sets
        let candidates: Vec<Edge> = graph.edges().filter(|e| e.from < e.to).collect();
        let weights: Vec<f64> = candidates.iter().map(|e| e.weight).collect();
        let order = heap_sort(&weights, false);

        let mut sets = UnionFind::new(n);
        for v in 0..n {
            sets.make_set(v);
        }

        let mut adjacency: Vec<Vec<Neighbor>> = vec![Vec::new(); n];
        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        for idx in order {
            let edge = candidates[idx];
            let r1 = sets.find(edge.from);
            let r2 = sets.find(edge.to);
            if r1 == r2 {
                continue;
            }

            adjacency[edge.from].push(Neighbor {
                vertex: edge.to,
                weight: edge.weight,
            });
            adjacency[edge.to].push(Neighbor {
                vertex: edge.from,
                weight: edge.weight,
            });
            edges.push(edge);
            sets.union(r1, r2);
        }

        tracing::debug!(
            candidates = candidates.len(),
            forest_edges = edges.len(),
            components = n - edges.len(),
            "spanning_forest_built"
        );

        Self {
            forest: Graph::from_adjacency(adjacency),
            edges,
        }
    }

    /// The forest as a graph over the same vertex ids
    pub fn forest(&self) -> &Graph {
        &self.forest
    }

    /// Forest edges, heaviest first
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.forest.vertex_count()
    }

    /// Number of trees in the forest (isolated vertices count)
    pub fn component_count(&self) -> usize {
        self.vertex_count() - self.edges.len()
    }

    /// Sum of the forest's edge weights
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Traverse the forest once from `source` for repeated target queries
    pub fn traverse_from(&self, source: usize) -> Result<TreePathTraversal> {
        TreePathTraversal::run(&self.forest, source)
    }

    /// Widest path between `source` and `target`, `None` if disconnected
    pub fn path(&self, source: usize, target: usize) -> Result<Option<WidestPath>> {
        self.forest.check_vertex(target)?;
        self.traverse_from(source)?.path_to(target)
    }

    /// Bandwidth between `source` and `target`, `None` if disconnected
    pub fn bandwidth(&self, source: usize, target: usize) -> Result<Option<f64>> {
        self.forest.check_vertex(target)?;
        self.traverse_from(source)?.bandwidth_to(target)
    }

    /// Check that the forest is acyclic and spans every component of `graph`
    pub fn validate(&self, graph: &Graph) -> bool {
        if graph.vertex_count() != self.vertex_count() {
            return false;
        }

        let mut sets = UnionFind::new(self.vertex_count());
        for edge in &self.edges {
            let r1 = sets.find(edge.from);
            let r2 = sets.find(edge.to);
            if r1 == r2 {
                return false;
            }
            sets.union(r1, r2);
        }

        self.edges.len() == graph.vertex_count() - graph.connected_components()
    }
}
