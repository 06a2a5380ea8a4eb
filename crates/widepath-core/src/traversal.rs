//! Path recovery inside an acyclic forest
//!
//! A forest holds at most one simple path between two vertices, so a plain
//! depth-first search from the source finds it. The search keeps an
//! explicit work stack; deep path-like trees do not grow the call stack.

use crate::error::Result;
use crate::graph::Graph;
use crate::path::WidestPath;
use crate::widest::Predecessor;

/// Depth-first traversal of one forest component from a source vertex
#[derive(Debug, Clone)]
pub struct TreePathTraversal {
    source: usize,
    predecessor: Vec<Predecessor>,
    /// Running minimum edge weight from the source
    bandwidth: Vec<f64>,
}

impl TreePathTraversal {
    /// Visit every vertex connected to `source` in `forest`.
    ///
    /// `forest` must be acyclic; on a graph with cycles the recorded paths
    /// are simple but not necessarily widest.
    pub fn run(forest: &Graph, source: usize) -> Result<Self> {
        forest.check_vertex(source)?;

        let n = forest.vertex_count();
        let mut predecessor = vec![Predecessor::Unreachable; n];
        let mut bandwidth = vec![0.0; n];
        predecessor[source] = Predecessor::Root;
        bandwidth[source] = f64::INFINITY;

        let mut stack = vec![source];
        while let Some(v) = stack.pop() {
            for neighbor in forest.neighbors(v) {
                let w = neighbor.vertex;
                if predecessor[w] != Predecessor::Unreachable {
                    continue;
                }
                predecessor[w] = Predecessor::Vertex(v);
                bandwidth[w] = bandwidth[v].min(neighbor.weight);
                stack.push(w);
            }
        }

        Ok(Self {
            source,
            predecessor,
            bandwidth,
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn visited(&self, v: usize) -> bool {
        self.predecessor
            .get(v)
            .is_some_and(|p| *p != Predecessor::Unreachable)
    }

    /// Bottleneck of the tree path to `target`, `None` if not connected
    pub fn bandwidth_to(&self, target: usize) -> Result<Option<f64>> {
        crate::ensure_vertex!(target, self.predecessor.len());
        Ok(self.visited(target).then(|| self.bandwidth[target]))
    }

    /// The unique tree path to `target`, `None` if not connected
    pub fn path_to(&self, target: usize) -> Result<Option<WidestPath>> {
        crate::ensure_vertex!(target, self.predecessor.len());
        if !self.visited(target) {
            return Ok(None);
        }

        let mut walk = vec![target];
        let mut current = target;
        while let Predecessor::Vertex(up) = self.predecessor[current] {
            walk.push(up);
            current = up;
        }
        Ok(Some(WidestPath::from_reversed(
            walk,
            self.bandwidth[target],
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 -4- 1 -2- 2, 1 -7- 3, 4 isolated
    fn small_tree() -> Graph {
        let mut g = Graph::with_vertices(5);
        g.add_edge(0, 1, 4.0).unwrap();
        g.add_edge(1, 2, 2.0).unwrap();
        g.add_edge(1, 3, 7.0).unwrap();
        g
    }

    #[test]
    fn test_path_and_bottleneck() {
        let t = TreePathTraversal::run(&small_tree(), 2).unwrap();
        let path = t.path_to(3).unwrap().unwrap();
        assert_eq!(path.vertices, vec![2, 1, 3]);
        assert_eq!(path.bandwidth, 2.0);
        assert_eq!(t.bandwidth_to(0).unwrap(), Some(2.0));
    }

    #[test]
    fn test_source_is_infinite() {
        let t = TreePathTraversal::run(&small_tree(), 0).unwrap();
        let path = t.path_to(0).unwrap().unwrap();
        assert_eq!(path.vertices, vec![0]);
        assert!(path.bandwidth.is_infinite());
    }

    #[test]
    fn test_other_component_unreachable() {
        let t = TreePathTraversal::run(&small_tree(), 0).unwrap();
        assert!(!t.visited(4));
        assert_eq!(t.path_to(4).unwrap(), None);
        assert_eq!(t.bandwidth_to(4).unwrap(), None);
    }

    #[test]
    fn test_out_of_range() {
        assert!(TreePathTraversal::run(&small_tree(), 5).is_err());
        let t = TreePathTraversal::run(&small_tree(), 0).unwrap();
        assert!(t.path_to(9).is_err());
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let n = 200_000;
        let mut g = Graph::with_vertices(n);
        for v in 1..n {
            g.add_edge(v - 1, v, (v % 97 + 1) as f64).unwrap();
        }

        let t = TreePathTraversal::run(&g, 0).unwrap();
        let path = t.path_to(n - 1).unwrap().unwrap();
        assert_eq!(path.len(), n);
        assert_eq!(path.bandwidth, 1.0);
    }
}
