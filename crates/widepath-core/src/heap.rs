//! Indexable binary max-heap
//!
//! Priority queue over a fixed universe of ids `[0, capacity)`. Besides the
//! usual push/pop it keeps an id -> slot index so that any element can be
//! located and deleted in O(1) + O(log n). The single-source widest-path
//! solver relies on this to raise the priority of a fringe vertex; Kruskal
//! relies on [`heap_sort`] to order edges by weight.
//!
//! Invariants kept after every public operation:
//! - `heap[position[id]] == id` for every id currently present
//! - `value(parent(slot)) >= value(slot)` for every non-root slot

use crate::error::{Result, WidepathError};

/// Binary max-heap with an id -> slot position index
#[derive(Debug, Clone)]
pub struct IndexableMaxHeap {
    /// slot -> id
    heap: Vec<usize>,
    /// id -> slot, `None` while the id is absent
    position: Vec<Option<usize>>,
    /// id -> priority (stale for absent ids)
    values: Vec<f64>,
}

impl IndexableMaxHeap {
    /// Create an empty heap able to hold ids `0..capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
            values: vec![0.0; capacity],
        }
    }

    /// Size of the id universe
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `id` is currently in the heap
    pub fn contains(&self, id: usize) -> bool {
        self.position.get(id).is_some_and(Option::is_some)
    }

    /// Priority of `id`, if present
    pub fn value(&self, id: usize) -> Option<f64> {
        if self.contains(id) {
            Some(self.values[id])
        } else {
            None
        }
    }

    /// Insert `id` with priority `value`. O(log n).
    pub fn add(&mut self, id: usize, value: f64) -> Result<()> {
        crate::ensure_vertex!(id, self.capacity());
        if self.contains(id) {
            return Err(WidepathError::invalid_value(
                "heap insert",
                format!("id {} already present", id),
            ));
        }

        let slot = self.heap.len();
        self.heap.push(id);
        self.position[id] = Some(slot);
        self.values[id] = value;
        self.sift_up(slot);
        Ok(())
    }

    /// Id with the greatest priority. O(1).
    pub fn max(&self) -> Result<usize> {
        self.heap
            .first()
            .copied()
            .ok_or(WidepathError::EmptyContainer { operation: "max" })
    }

    /// Remove and return the id with the greatest priority. O(log n).
    pub fn pop(&mut self) -> Result<usize> {
        let id = self
            .heap
            .first()
            .copied()
            .ok_or(WidepathError::EmptyContainer { operation: "pop" })?;
        self.delete_slot(0);
        Ok(id)
    }

    /// Remove `id` wherever it sits in the heap. O(log n).
    pub fn delete_element(&mut self, id: usize) -> Result<()> {
        crate::ensure_vertex!(id, self.capacity());
        let slot = self.position[id].ok_or(WidepathError::NotInHeap { id })?;
        self.delete_slot(slot);
        Ok(())
    }

    /// Check the max-heap ordering and the position index
    pub fn is_heap_ordered(&self) -> bool {
        let ordered = (1..self.heap.len()).all(|slot| {
            self.values[self.heap[parent(slot)]] >= self.values[self.heap[slot]]
        });
        let indexed = self
            .heap
            .iter()
            .enumerate()
            .all(|(slot, &id)| self.position[id] == Some(slot));
        let present = self.position.iter().filter(|p| p.is_some()).count();
        ordered && indexed && present == self.heap.len()
    }

    /// Replace `slot` with the last element, shrink, then restore ordering
    /// in whichever direction the moved element needs to travel.
    fn delete_slot(&mut self, slot: usize) {
        let removed = self.heap[slot];
        let last = self.heap.len() - 1;
        self.swap(slot, last);
        self.heap.pop();
        self.position[removed] = None;

        if slot >= self.heap.len() {
            return;
        }

        if slot > 0 && self.slot_value(slot) > self.slot_value(parent(slot)) {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let up = parent(slot);
            if self.slot_value(up) >= self.slot_value(slot) {
                break;
            }
            self.swap(slot, up);
            slot = up;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = left(slot);
            if left >= len {
                break;
            }
            let right = right(slot);
            // ties between children go right
            let child = if right < len && self.slot_value(right) >= self.slot_value(left) {
                right
            } else {
                left
            };
            if self.slot_value(child) <= self.slot_value(slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    fn slot_value(&self, slot: usize) -> f64 {
        self.values[self.heap[slot]]
    }
}

fn parent(slot: usize) -> usize {
    (slot - 1) / 2
}

fn left(slot: usize) -> usize {
    2 * slot + 1
}

fn right(slot: usize) -> usize {
    2 * slot + 2
}

/// Sort `values` with a heap, returning the permutation of indices.
///
/// Builds a heap over every entry and pops it empty. Ascending order fills
/// the result from the back, descending from the front. O(n log n).
pub fn heap_sort(values: &[f64], ascending: bool) -> Vec<usize> {
    let mut heap = IndexableMaxHeap::new(values.len());
    for (idx, &value) in values.iter().enumerate() {
        heap.heap.push(idx);
        heap.position[idx] = Some(idx);
        heap.values[idx] = value;
        heap.sift_up(idx);
    }

    let mut sorted = Vec::with_capacity(values.len());
    while let Some(&top) = heap.heap.first() {
        heap.delete_slot(0);
        sorted.push(top);
    }

    if ascending {
        sorted.reverse();
    }
    sorted
}

#[cfg(test)]
mod tests;
