//! Weighted undirected graph
//!
//! Adjacency-list representation shared read-only by every solver:
//! - [`Graph`] holds one neighbor list per vertex
//! - [`io`] loads and saves graphs as JSON, TOML or YAML documents
//!
//! Each undirected edge is stored twice, once in each endpoint's list, with
//! the same weight. [`Graph::add_edge`] maintains that symmetry;
//! [`Graph::from_adjacency`] trusts the caller to have done so.

pub mod io;

pub use io::{load_graph, save_graph, GraphFile, GraphFileEdge};

use crate::error::{Result, WidepathError};
use crate::union_find::UnionFind;

/// One adjacency entry: the far endpoint and the edge weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub vertex: usize,
    pub weight: f64,
}

/// An undirected edge, `from <= to` when produced by [`Graph::edges`]
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// Fixed-size weighted adjacency lists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<Neighbor>>,
}

impl Graph {
    /// Create a graph with `n` isolated vertices
    pub fn with_vertices(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
        }
    }

    /// Wrap pre-built adjacency lists.
    ///
    /// Symmetry (`u -> v` implies `v -> u` with equal weight) is not checked;
    /// asymmetric input silently produces wrong bandwidths.
    pub fn from_adjacency(adjacency: Vec<Vec<Neighbor>>) -> Self {
        Self { adjacency }
    }

    /// Add the undirected edge `u - v` with weight `weight`
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<()> {
        let n = self.vertex_count();
        crate::ensure_vertex!(u, n);
        crate::ensure_vertex!(v, n);
        if !weight.is_finite() || weight <= 0.0 {
            return Err(WidepathError::InvalidWeight {
                from: u,
                to: v,
                weight,
            });
        }

        self.adjacency[u].push(Neighbor { vertex: v, weight });
        if u != v {
            self.adjacency[v].push(Neighbor { vertex: u, weight });
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbors of `v` in insertion order
    pub fn neighbors(&self, v: usize) -> &[Neighbor] {
        &self.adjacency[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Check that `v` names a vertex of this graph
    pub fn check_vertex(&self, v: usize) -> Result<()> {
        crate::ensure_vertex!(v, self.vertex_count());
        Ok(())
    }

    /// Every undirected edge once (`from <= to`), in adjacency order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, list)| {
                list.iter()
                    .filter(move |n| from <= n.vertex)
                    .map(move |n| Edge {
                        from,
                        to: n.vertex,
                        weight: n.weight,
                    })
            })
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Mean number of adjacency entries per vertex
    pub fn average_degree(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let total: usize = self.adjacency.iter().map(Vec::len).sum();
        total as f64 / self.vertex_count() as f64
    }

    /// Average fraction of the other `n - 1` vertices each vertex touches
    pub fn neighbor_density(&self) -> f64 {
        let n = self.vertex_count();
        if n < 2 {
            return 0.0;
        }
        self.average_degree() / (n - 1) as f64
    }

    /// Number of connected components (isolated vertices count)
    pub fn connected_components(&self) -> usize {
        let mut sets = UnionFind::new(self.vertex_count());
        for edge in self.edges() {
            let r1 = sets.find(edge.from);
            let r2 = sets.find(edge.to);
            if r1 != r2 {
                sets.union(r1, r2);
            }
        }
        sets.set_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Graph {
        let mut g = Graph::with_vertices(4);
        g.add_edge(0, 1, 10.0).unwrap();
        g.add_edge(1, 2, 5.0).unwrap();
        g.add_edge(2, 3, 8.0).unwrap();
        g.add_edge(3, 0, 3.0).unwrap();
        g
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let g = square();
        assert_eq!(g.degree(0), 2);
        assert!(g
            .neighbors(1)
            .iter()
            .any(|n| n.vertex == 0 && n.weight == 10.0));
        assert!(g
            .neighbors(0)
            .iter()
            .any(|n| n.vertex == 1 && n.weight == 10.0));
    }

    #[test]
    fn test_edges_listed_once() {
        let g = square();
        let edges: Vec<Edge> = g.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(g.edge_count(), 4);
        assert!(edges.iter().all(|e| e.from <= e.to));
        assert!(edges
            .iter()
            .any(|e| e.from == 0 && e.to == 3 && e.weight == 3.0));
    }

    #[test]
    fn test_add_edge_rejects_bad_input() {
        let mut g = Graph::with_vertices(2);
        assert!(matches!(
            g.add_edge(0, 2, 1.0),
            Err(WidepathError::OutOfRange { vertex: 2, len: 2 })
        ));
        assert!(matches!(
            g.add_edge(0, 1, 0.0),
            Err(WidepathError::InvalidWeight { .. })
        ));
        assert!(matches!(
            g.add_edge(0, 1, f64::NAN),
            Err(WidepathError::InvalidWeight { .. })
        ));
        assert!(matches!(
            g.add_edge(0, 1, f64::INFINITY),
            Err(WidepathError::InvalidWeight { .. })
        ));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_self_loop_stored_once() {
        let mut g = Graph::with_vertices(2);
        g.add_edge(1, 1, 4.0).unwrap();
        assert_eq!(g.degree(1), 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_statistics() {
        let g = square();
        assert_eq!(g.average_degree(), 2.0);
        assert!((g.neighbor_density() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(g.connected_components(), 1);

        let empty = Graph::default();
        assert_eq!(empty.average_degree(), 0.0);
        assert_eq!(empty.neighbor_density(), 0.0);
        assert_eq!(empty.connected_components(), 0);
    }

    #[test]
    fn test_components_of_split_graph() {
        let mut g = Graph::with_vertices(5);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        assert_eq!(g.connected_components(), 3);
    }
}
