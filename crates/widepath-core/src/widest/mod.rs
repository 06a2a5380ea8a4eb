//! Single-source widest-path solvers
//!
//! Both solvers grow a widest-path tree outward from the source the way
//! Dijkstra grows a shortest-path tree, with `min` in place of `+` and
//! "largest first" in place of "smallest first". They share one relaxation
//! loop and differ only in how the next fringe vertex is chosen:
//! - `scan`: linear scan over every vertex, O(V^2 + E)
//! - `heap`: indexable max-heap, O((V + E) log V)
//!
//! The choice is a [`FringeStrategy`] type parameter on
//! [`SingleSourceWidest`].

pub mod heap;
pub mod scan;


pub use heap::HeapFringe;
pub use scan::ArrayScanFringe;

use std::marker::PhantomData;

use crate::error::Result;
use crate::graph::Graph;
use crate::path::WidestPath;

/// Widest-path solver using a linear fringe scan
pub type WidestPathArrayScan = SingleSourceWidest<ArrayScanFringe>;

/// Widest-path solver using an indexable max-heap
pub type WidestPathHeap = SingleSourceWidest<HeapFringe>;

/// Where a vertex stands while the tree grows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexStatus {
    Unseen,
    Fringe,
    InTree,
}

/// How a vertex was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predecessor {
    /// Reached through this vertex
    Vertex(usize),
    /// The source itself
    Root,
    /// Not connected to the source
    Unreachable,
}

/// Per-vertex status, bandwidth and predecessor arrays for one source
#[derive(Debug, Clone)]
pub struct WidestPathTree {
    source: usize,
    status: Vec<VertexStatus>,
    bandwidth: Vec<f64>,
    predecessor: Vec<Predecessor>,
}

impl WidestPathTree {
    fn new(vertex_count: usize, source: usize) -> Self {
        let mut tree = Self {
            source,
            status: vec![VertexStatus::Unseen; vertex_count],
            bandwidth: vec![0.0; vertex_count],
            predecessor: vec![Predecessor::Unreachable; vertex_count],
        };
        tree.status[source] = VertexStatus::InTree;
        tree.bandwidth[source] = f64::INFINITY;
        tree.predecessor[source] = Predecessor::Root;
        tree
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.status.len()
    }

    pub fn status(&self, v: usize) -> VertexStatus {
        self.status[v]
    }

    /// Final bandwidth of `v`; 0 for unreachable vertices
    pub fn bandwidth(&self, v: usize) -> f64 {
        self.bandwidth[v]
    }

    pub fn predecessor(&self, v: usize) -> Predecessor {
        self.predecessor[v]
    }

    /// Number of vertices connected to the source (source included)
    pub fn reached_count(&self) -> usize {
        self.predecessor
            .iter()
            .filter(|p| **p != Predecessor::Unreachable)
            .count()
    }

    /// Fringe vertices in id order with their tentative bandwidth
    pub fn fringe(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.status
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == VertexStatus::Fringe)
            .map(|(v, _)| (v, self.bandwidth[v]))
    }
}

/// Fringe bookkeeping plugged into the shared relaxation loop
pub trait FringeStrategy {
    /// Name used in logs
    const NAME: &'static str;

    fn for_vertices(vertex_count: usize) -> Self;

    /// `vertex` just moved from unseen to fringe
    fn discover(&mut self, vertex: usize, bandwidth: f64) -> Result<()>;

    /// `vertex` is already fringe and its bandwidth rose to `bandwidth`
    fn improve(&mut self, vertex: usize, bandwidth: f64) -> Result<()>;

    /// Remove and return the fringe vertex with the largest bandwidth
    fn take_best(&mut self, tree: &WidestPathTree) -> Result<Option<usize>>;
}

/// Grow the full widest-path tree from `source`
fn grow_tree<F: FringeStrategy>(graph: &Graph, source: usize) -> Result<WidestPathTree> {
    let mut tree = WidestPathTree::new(graph.vertex_count(), source);
    let mut fringe = F::for_vertices(graph.vertex_count());

    relax(graph, &mut tree, &mut fringe, source)?;
    while let Some(best) = fringe.take_best(&tree)? {
        tree.status[best] = VertexStatus::InTree;
        relax(graph, &mut tree, &mut fringe, best)?;
    }
    Ok(tree)
}

/// Offer every neighbor of the newly finalized vertex `v` a path through it
fn relax<F: FringeStrategy>(
    graph: &Graph,
    tree: &mut WidestPathTree,
    fringe: &mut F,
    v: usize,
) -> Result<()> {
    let through = tree.bandwidth[v];
    for neighbor in graph.neighbors(v) {
        let w = neighbor.vertex;
        let candidate = through.min(neighbor.weight);
        match tree.status[w] {
            VertexStatus::Unseen => {
                tree.status[w] = VertexStatus::Fringe;
                tree.bandwidth[w] = candidate;
                tree.predecessor[w] = Predecessor::Vertex(v);
                fringe.discover(w, candidate)?;
            }
            VertexStatus::Fringe if candidate > tree.bandwidth[w] => {
                tree.bandwidth[w] = candidate;
                tree.predecessor[w] = Predecessor::Vertex(v);
                fringe.improve(w, candidate)?;
            }
            VertexStatus::Fringe | VertexStatus::InTree => {}
        }
    }
    Ok(())
}

/// Widest paths from one source to every vertex, precomputed on construction
#[derive(Debug, Clone)]
pub struct SingleSourceWidest<F> {
    tree: WidestPathTree,
    strategy: PhantomData<F>,
}

impl<F: FringeStrategy> SingleSourceWidest<F> {
    /// Run the solver from `source` over `graph`
    #[tracing::instrument(skip(graph), fields(strategy = F::NAME, vertices = graph.vertex_count()))]
    pub fn new(graph: &Graph, source: usize) -> Result<Self> {
        graph.check_vertex(source)?;
        let tree = grow_tree::<F>(graph, source)?;
        tracing::debug!(reached = tree.reached_count(), "widest_tree_built");
        Ok(Self {
            tree,
            strategy: PhantomData,
        })
    }
}

impl<F> SingleSourceWidest<F> {
    pub fn source(&self) -> usize {
        self.tree.source
    }

    /// The finished tree
    pub fn tree(&self) -> &WidestPathTree {
        &self.tree
    }

    /// Bandwidth of the widest path to `target`, `None` if unreachable. O(1).
    pub fn bandwidth(&self, target: usize) -> Result<Option<f64>> {
        crate::ensure_vertex!(target, self.tree.vertex_count());
        Ok(match self.tree.predecessor[target] {
            Predecessor::Unreachable => None,
            _ => Some(self.tree.bandwidth[target]),
        })
    }

    /// Widest path from the source to `target`, `None` if unreachable
    pub fn path(&self, target: usize) -> Result<Option<WidestPath>> {
        crate::ensure_vertex!(target, self.tree.vertex_count());
        if self.tree.predecessor[target] == Predecessor::Unreachable {
            return Ok(None);
        }

        let mut walk = vec![target];
        let mut current = target;
        while let Predecessor::Vertex(up) = self.tree.predecessor[current] {
            walk.push(up);
            current = up;
        }
        Ok(Some(WidestPath::from_reversed(
            walk,
            self.tree.bandwidth[target],
        )))
    }
}
