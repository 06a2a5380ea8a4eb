use super::*;

/// Small deterministic generator so the randomized tests are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

#[test]
fn test_add_and_max() {
    let mut heap = IndexableMaxHeap::new(6);
    for id in (1..=5).rev() {
        heap.add(id, id as f64).unwrap();
    }
    assert_eq!(heap.max().unwrap(), 5);
    assert_eq!(heap.len(), 5);
    assert!(heap.is_heap_ordered());
}

#[test]
fn test_delete_element_sequence() {
    let mut heap = IndexableMaxHeap::new(6);
    for id in (1..=5).rev() {
        heap.add(id, id as f64).unwrap();
    }

    heap.delete_element(4).unwrap();
    assert_eq!(heap.max().unwrap(), 5);
    assert!(heap.is_heap_ordered());

    heap.delete_element(5).unwrap();
    assert_eq!(heap.max().unwrap(), 3);
    assert!(heap.is_heap_ordered());

    heap.add(5, 5.0).unwrap();
    heap.add(0, 0.0).unwrap();
    assert_eq!(heap.max().unwrap(), 5);
    assert!(heap.is_heap_ordered());
}

#[test]
fn test_pop_returns_descending() {
    let mut heap = IndexableMaxHeap::new(5);
    let values = [3.0, 4.0, 2.0, 0.5, 1.0];
    for (id, v) in values.iter().enumerate() {
        heap.add(id, *v).unwrap();
    }

    let mut popped = Vec::new();
    while !heap.is_empty() {
        popped.push(heap.pop().unwrap());
    }
    assert_eq!(popped, vec![1, 0, 2, 4, 3]);
}

#[test]
fn test_empty_heap_errors() {
    let mut heap = IndexableMaxHeap::new(3);
    assert!(heap.is_empty());
    assert!(matches!(
        heap.max(),
        Err(WidepathError::EmptyContainer { operation: "max" })
    ));
    assert!(matches!(
        heap.pop(),
        Err(WidepathError::EmptyContainer { operation: "pop" })
    ));
}

#[test]
fn test_delete_absent_id() {
    let mut heap = IndexableMaxHeap::new(3);
    heap.add(0, 1.0).unwrap();
    assert!(matches!(
        heap.delete_element(2),
        Err(WidepathError::NotInHeap { id: 2 })
    ));
    assert!(matches!(
        heap.delete_element(3),
        Err(WidepathError::OutOfRange { vertex: 3, len: 3 })
    ));
}

#[test]
fn test_add_rejects_duplicates_and_out_of_range() {
    let mut heap = IndexableMaxHeap::new(2);
    heap.add(1, 2.0).unwrap();
    assert!(matches!(
        heap.add(1, 3.0),
        Err(WidepathError::InvalidValue { .. })
    ));
    assert!(matches!(
        heap.add(2, 3.0),
        Err(WidepathError::OutOfRange { .. })
    ));
    assert_eq!(heap.value(1), Some(2.0));
}

#[test]
fn test_delete_moves_last_element_up() {
    // Deleting a deep element from the left subtree pulls in the last slot
    // from the right subtree, which can be larger than its new parent.
    let mut heap = IndexableMaxHeap::new(7);
    let values = [100.0, 50.0, 90.0, 10.0, 20.0, 80.0, 85.0];
    for (id, v) in values.iter().enumerate() {
        heap.add(id, *v).unwrap();
    }
    assert!(heap.is_heap_ordered());

    heap.delete_element(3).unwrap();
    assert!(heap.is_heap_ordered());
    assert!(!heap.contains(3));
    assert_eq!(heap.max().unwrap(), 0);
}

#[test]
fn test_delete_then_reinsert_raises_priority() {
    let mut heap = IndexableMaxHeap::new(4);
    heap.add(0, 5.0).unwrap();
    heap.add(1, 3.0).unwrap();
    heap.add(2, 1.0).unwrap();

    heap.delete_element(2).unwrap();
    heap.add(2, 9.0).unwrap();
    assert_eq!(heap.pop().unwrap(), 2);
    assert_eq!(heap.pop().unwrap(), 0);
    assert_eq!(heap.pop().unwrap(), 1);
}

#[test]
fn test_randomized_operations_keep_invariant() {
    let mut rng = Lcg(42);
    let capacity = 64;
    let mut heap = IndexableMaxHeap::new(capacity);
    let mut present: Vec<Option<f64>> = vec![None; capacity];

    for _ in 0..2000 {
        let id = rng.below(capacity);
        match rng.below(3) {
            0 => {
                if present[id].is_none() {
                    let value = rng.below(1000) as f64 / 7.0;
                    heap.add(id, value).unwrap();
                    present[id] = Some(value);
                }
            }
            1 => {
                if present[id].is_some() {
                    heap.delete_element(id).unwrap();
                    present[id] = None;
                }
            }
            _ => {
                if !heap.is_empty() {
                    let expected = present
                        .iter()
                        .flatten()
                        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
                    let top = heap.pop().unwrap();
                    assert_eq!(present[top], Some(expected));
                    present[top] = None;
                }
            }
        }
        assert!(heap.is_heap_ordered());
        assert_eq!(heap.len(), present.iter().flatten().count());
    }
}

#[test]
fn test_heap_sort_both_directions() {
    let values = [3.0, 4.0, 2.0, 0.0, 1.0];
    assert_eq!(heap_sort(&values, true), vec![3, 4, 2, 0, 1]);
    assert_eq!(heap_sort(&values, false), vec![1, 0, 2, 4, 3]);
}

#[test]
fn test_heap_sort_prefix_and_empty() {
    let values = [7.0, 1.0, 9.0, 100.0];
    assert_eq!(heap_sort(&values[..3], false), vec![2, 0, 1]);
    assert!(heap_sort(&[], true).is_empty());
}

#[test]
fn test_heap_sort_is_a_sorted_permutation() {
    let mut rng = Lcg(7);
    let values: Vec<f64> = (0..200).map(|_| rng.below(50) as f64).collect();

    let sorted = heap_sort(&values, false);
    let mut seen = sorted.clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..200).collect::<Vec<_>>());
    assert!(sorted.windows(2).all(|w| values[w[0]] >= values[w[1]]));
}
