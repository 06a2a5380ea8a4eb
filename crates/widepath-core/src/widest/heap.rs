//! Fringe selection with an indexable max-heap

use super::{FringeStrategy, WidestPathTree};
use crate::error::Result;
use crate::heap::IndexableMaxHeap;

/// Holds every fringe vertex keyed by its tentative bandwidth
#[derive(Debug, Clone)]
pub struct HeapFringe {
    heap: IndexableMaxHeap,
}

impl FringeStrategy for HeapFringe {
    const NAME: &'static str = "heap";

    fn for_vertices(vertex_count: usize) -> Self {
        Self {
            heap: IndexableMaxHeap::new(vertex_count),
        }
    }

    fn discover(&mut self, vertex: usize, bandwidth: f64) -> Result<()> {
        self.heap.add(vertex, bandwidth)
    }

    fn improve(&mut self, vertex: usize, bandwidth: f64) -> Result<()> {
        self.heap.delete_element(vertex)?;
        self.heap.add(vertex, bandwidth)
    }

    fn take_best(&mut self, _tree: &WidestPathTree) -> Result<Option<usize>> {
        if self.heap.is_empty() {
            return Ok(None);
        }
        self.heap.pop().map(Some)
    }
}
