//! Generic tests for all Heap implementations
//!
//! These tests work with any Heap implementation over bare `i32` keys
//! (`Heap<(), i32>`), so the positional and the handle-based heaps are held to
//! the same ordering contract. Tests specific to positional update and to
//! handles follow at the end.

use positional_heap::binary::MinHeapPriorityQueue;
use positional_heap::indexed::IndexedMinHeap;
use positional_heap::{AddressableHeap, Heap, HeapError, Repair};

// Test helpers that work with any Heap implementation

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<(), i32>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.len(), 0);
}

/// Test that n pushes give len() == n and the first pop is the minimum
fn test_count_and_first_pop<H: Heap<(), i32>>() {
    let mut heap = H::new();
    let values = [42, -7, 19, 0, 19, 88, -3];

    for v in values {
        heap.push(v, ());
    }

    assert_eq!(heap.len(), values.len());
    assert_eq!(heap.pop(), Some((-7, ())));
}

/// Test the dequeue-sort property on a fixed input
fn test_drain_sorted<H: Heap<(), i32>>() {
    let mut heap = H::new();
    for v in [5, 3, 8, 1, 9, 2] {
        heap.push(v, ());
    }

    let mut drained = Vec::new();
    while let Some((p, ())) = heap.pop() {
        drained.push(p);
    }
    assert_eq!(drained, vec![1, 2, 3, 5, 8, 9]);
    assert!(heap.is_empty());
}

/// Test interleaved push/pop against a sorted reference
fn test_interleaved<H: Heap<(), i32>>() {
    let mut heap = H::new();
    let mut reference: Vec<i32> = Vec::new();

    for round in 0..50 {
        let v = (round * 37) % 23 - 11;
        heap.push(v, ());
        reference.push(v);

        if round % 3 == 2 {
            reference.sort_unstable();
            let expected = reference.remove(0);
            assert_eq!(heap.pop(), Some((expected, ())));
        }
        assert_eq!(heap.len(), reference.len());
    }
}

/// Test that duplicates are all returned
fn test_duplicates<H: Heap<(), i32>>() {
    let mut heap = H::new();
    for _ in 0..5 {
        heap.push(7, ());
    }
    heap.push(3, ());

    assert_eq!(heap.pop(), Some((3, ())));
    for _ in 0..5 {
        assert_eq!(heap.pop(), Some((7, ())));
    }
    assert_eq!(heap.pop(), None);
}

/// Test extreme priorities
fn test_extreme_priorities<H: Heap<(), i32>>() {
    let mut heap = H::new();
    heap.push(i32::MAX, ());
    heap.push(0, ());
    heap.push(i32::MIN, ());

    assert_eq!(heap.pop(), Some((i32::MIN, ())));
    assert_eq!(heap.pop(), Some((0, ())));
    assert_eq!(heap.pop(), Some((i32::MAX, ())));
}

#[test]
fn test_binary_empty() {
    test_empty_heap::<MinHeapPriorityQueue<i32>>();
}

#[test]
fn test_binary_count_and_first_pop() {
    test_count_and_first_pop::<MinHeapPriorityQueue<i32>>();
}

#[test]
fn test_binary_drain_sorted() {
    test_drain_sorted::<MinHeapPriorityQueue<i32>>();
}

#[test]
fn test_binary_interleaved() {
    test_interleaved::<MinHeapPriorityQueue<i32>>();
}

#[test]
fn test_binary_duplicates() {
    test_duplicates::<MinHeapPriorityQueue<i32>>();
}

#[test]
fn test_binary_extreme_priorities() {
    test_extreme_priorities::<MinHeapPriorityQueue<i32>>();
}

#[test]
fn test_indexed_empty() {
    test_empty_heap::<IndexedMinHeap<(), i32>>();
}

#[test]
fn test_indexed_count_and_first_pop() {
    test_count_and_first_pop::<IndexedMinHeap<(), i32>>();
}

#[test]
fn test_indexed_drain_sorted() {
    test_drain_sorted::<IndexedMinHeap<(), i32>>();
}

#[test]
fn test_indexed_interleaved() {
    test_interleaved::<IndexedMinHeap<(), i32>>();
}

#[test]
fn test_indexed_duplicates() {
    test_duplicates::<IndexedMinHeap<(), i32>>();
}

#[test]
fn test_indexed_extreme_priorities() {
    test_extreme_priorities::<IndexedMinHeap<(), i32>>();
}

// ============================================================================
// Positional update
// ============================================================================

fn enqueue_all(values: &[i32]) -> MinHeapPriorityQueue<i32> {
    let mut heap = MinHeapPriorityQueue::new();
    for &v in values {
        heap.enqueue(v);
    }
    heap
}

#[test]
fn test_positional_decrease_reaches_front() {
    let mut heap = enqueue_all(&[1, 5, 3, 8, 9, 7]);
    let index = heap.position_of(&8).expect("8 was enqueued");

    assert_eq!(heap.update_value_at_index(index, 0), Ok(Repair::SiftUp));
    assert!(heap.is_heap());
    assert_eq!(heap.dequeue(), Some(0));
    assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 7, 9]);
}

#[test]
fn test_positional_increase_drains_smaller_first() {
    let mut heap = enqueue_all(&[1, 2, 3, 4, 5]);

    assert_eq!(heap.update_value_at_index(0, 100), Ok(Repair::SiftDown));
    assert!(heap.is_heap());

    let drained: Vec<i32> = std::iter::from_fn(|| heap.dequeue()).collect();
    assert_eq!(drained, vec![2, 3, 4, 5, 100]);
}

#[test]
fn test_positional_out_of_range_changes_nothing() {
    let mut heap = enqueue_all(&[6, 4, 9, 1]);
    let before = heap.as_slice().to_vec();

    for index in [4, 5, 1_000, usize::MAX] {
        assert_eq!(
            heap.update_value_at_index(index, -50),
            Err(HeapError::IndexOutOfRange { index, len: 4 })
        );
    }

    assert_eq!(heap.count(), 4);
    assert_eq!(heap.as_slice(), before.as_slice());
}

#[test]
fn test_positional_update_on_empty_heap() {
    let mut heap: MinHeapPriorityQueue = MinHeapPriorityQueue::new();
    assert_eq!(
        heap.update_value_at_index(0, 1),
        Err(HeapError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert!(heap.is_empty());
}

#[test]
fn test_positional_same_value_is_identity() {
    let mut heap = enqueue_all(&[10, 20, 15, 30, 40, 16, 17]);
    let before = heap.clone();

    for index in 0..heap.count() {
        let current = *heap.get(index).expect("index is in range");
        assert_eq!(heap.update_value_at_index(index, current), Ok(Repair::Unchanged));
    }

    assert_eq!(heap, before);
}

#[test]
fn test_positional_every_index_every_direction() {
    let base = enqueue_all(&[3, 14, 15, 92, 65, 35, 89, 79, 32, 38]);

    for index in 0..base.count() {
        for new_value in [-1, 0, 33, 50, 1_000] {
            let mut heap = base.clone();
            heap.update_value_at_index(index, new_value)
                .expect("index is in range");
            assert!(heap.is_heap(), "index {} -> {}", index, new_value);

            let mut expected = base.as_slice().to_vec();
            expected[index] = new_value;
            expected.sort_unstable();
            assert_eq!(heap.into_sorted_vec(), expected);
        }
    }
}

// ============================================================================
// Handle-based update
// ============================================================================

/// Test that update_priority moves elements in both directions
fn test_update_priority_directions<H: AddressableHeap<&'static str, i32>>() {
    let mut heap = H::new();
    let a = heap.push_with_handle(10, "a");
    let b = heap.push_with_handle(20, "b");
    let c = heap.push_with_handle(30, "c");

    assert_eq!(heap.update_priority(&c, 5), Ok(Repair::SiftUp));
    assert_eq!(heap.peek(), Some((&5, &"c")));

    assert_eq!(heap.update_priority(&c, 25), Ok(Repair::SiftDown));
    assert_eq!(heap.peek(), Some((&10, &"a")));

    assert_eq!(heap.update_priority(&b, 20), Ok(Repair::Unchanged));

    assert_eq!(heap.pop(), Some((10, "a")));
    assert!(!heap.contains(&a));
    assert_eq!(heap.pop(), Some((20, "b")));
    assert_eq!(heap.pop(), Some((25, "c")));
}

/// Test that stale handles are rejected
fn test_stale_handles<H: AddressableHeap<u8, i32>>() {
    let mut heap = H::new();
    let h = heap.push_with_handle(1, 0);
    heap.push_with_handle(2, 1);

    assert_eq!(heap.pop(), Some((1, 0)));
    assert_eq!(heap.priority(&h), None);
    assert_eq!(heap.update_priority(&h, 0), Err(HeapError::InvalidHandle));
    assert_eq!(heap.decrease_key(&h, 0), Err(HeapError::InvalidHandle));
    assert_eq!(heap.remove(&h), None);
    assert_eq!(heap.len(), 1);
}

/// Test many removals from the middle of the heap
fn test_remove_many<H: AddressableHeap<i32, i32>>() {
    let mut heap = H::new();
    let handles: Vec<_> = (0..100)
        .map(|i| heap.push_with_handle((i * 7919) % 101, i))
        .collect();

    for (i, handle) in handles.iter().enumerate() {
        if i % 3 == 0 {
            let removed = heap.remove(handle);
            assert_eq!(removed.map(|(_, item)| item), Some(i as i32));
        }
    }

    let mut last = i32::MIN;
    let mut count = 0;
    while let Some((p, item)) = heap.pop() {
        assert!(p >= last);
        assert_ne!(item % 3, 0);
        last = p;
        count += 1;
    }
    assert_eq!(count, 66);
}

#[test]
fn test_indexed_update_priority_directions() {
    test_update_priority_directions::<IndexedMinHeap<&'static str, i32>>();
}

#[test]
fn test_indexed_stale_handles() {
    test_stale_handles::<IndexedMinHeap<u8, i32>>();
}

#[test]
fn test_indexed_remove_many() {
    test_remove_many::<IndexedMinHeap<i32, i32>>();
}

#[test]
fn test_indexed_iter_covers_all_entries() {
    let mut heap = IndexedMinHeap::new();
    for i in 0..10 {
        heap.push(10 - i, i);
    }

    let mut items: Vec<i32> = heap.iter().map(|(_, &item)| item).collect();
    items.sort_unstable();
    assert_eq!(items, (0..10).collect::<Vec<_>>());
    assert_eq!(heap.iter().next(), Some((&1, &9)));
}
