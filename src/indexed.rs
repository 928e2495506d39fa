//! Indexed binary min-heap with stable handles
//!
//! [`MinHeapPriorityQueue`](crate::binary::MinHeapPriorityQueue) updates keys
//! by array position, and positions are renumbered by every mutation.
//! `IndexedMinHeap` pairs the same array layout with a side table mapping each
//! handle to its current position, so callers keep a handle that stays valid
//! until its element leaves the heap.
//!
//! The side table is a [`SlotMap`]. Its keys are generational, so a handle
//! whose element was popped or removed is detected as stale even after the
//! slot is reused by a later push.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `push`            | O(log n)   |
//! | `pop`             | O(log n)   |
//! | `update_priority` | O(log n)   |
//! | `remove`          | O(log n)   |
//! | `peek`            | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use positional_heap::indexed::IndexedMinHeap;
//! use positional_heap::{AddressableHeap, Heap, HeapError};
//!
//! let mut heap = IndexedMinHeap::new();
//! let a = heap.push_with_handle(5, "a");
//! let b = heap.push_with_handle(3, "b");
//! heap.push(4, "c");
//!
//! heap.update_priority(&a, 1).unwrap();
//! assert_eq!(heap.pop(), Some((1, "a")));
//!
//! // `a` has left the heap
//! assert_eq!(heap.update_priority(&a, 0), Err(HeapError::InvalidHandle));
//! assert_eq!(heap.priority(&b), Some(&3));
//! ```

use slotmap::{new_key_type, SlotMap};

use crate::traits::{AddressableHeap, Handle, Heap, HeapError, Repair};

new_key_type! {
    /// Stable handle to an element of an [`IndexedMinHeap`]
    pub struct HeapHandle;
}

impl Handle for HeapHandle {}

#[derive(Debug, Clone)]
struct Entry<T, P> {
    priority: P,
    item: T,
    handle: HeapHandle,
}

/// A binary min-heap whose elements are addressed by stable handles
///
/// Entries are stored in heap order in a dense vector. `positions` maps every
/// live handle to the index of its entry, and is updated on each swap.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T, P: Ord> {
    entries: Vec<Entry<T, P>>,
    positions: SlotMap<HeapHandle, usize>,
}

impl<T, P: Ord> IndexedMinHeap<T, P> {
    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Returns the priority and item for a handle still in the heap
    pub fn get(&self, handle: &HeapHandle) -> Option<(&P, &T)> {
        self.positions.get(*handle).map(|&pos| {
            let entry = &self.entries[pos];
            (&entry.priority, &entry.item)
        })
    }

    /// Iterates over `(priority, item)` pairs in heap order (not sorted)
    pub fn iter(&self) -> impl Iterator<Item = (&P, &T)> {
        self.entries.iter().map(|e| (&e.priority, &e.item))
    }

    /// Removes every element, invalidating all outstanding handles
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Checks heap order and that the handle table matches the array
    pub fn is_heap(&self) -> bool {
        let ordered = (1..self.entries.len())
            .all(|i| self.entries[(i - 1) / 2].priority <= self.entries[i].priority);
        let indexed = self.positions.len() == self.entries.len()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(i, e)| self.positions.get(e.handle) == Some(&i));
        ordered && indexed
    }

    /// Swaps two entries and records their new positions
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].handle] = a;
        self.positions[self.entries[b].handle] = b;
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].priority < self.entries[parent].priority {
                self.swap_entries(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap_entries(index, smallest);
            index = smallest;
        }
    }

    /// Detaches the entry at `pos` by swapping it with the last entry
    ///
    /// The entry moved into `pos` may belong above or below it, so heap order
    /// is repaired in whichever direction is needed.
    fn take_at(&mut self, pos: usize) -> Option<Entry<T, P>> {
        let last = self.entries.len().checked_sub(1)?;
        self.swap_entries(pos, last);
        let entry = self.entries.pop()?;
        self.positions.remove(entry.handle);

        if pos < self.entries.len() {
            let below_parent =
                pos > 0 && self.entries[pos].priority < self.entries[(pos - 1) / 2].priority;
            if below_parent {
                self.sift_up(pos);
            } else {
                self.sift_down(pos);
            }
        }

        Some(entry)
    }
}

impl<T, P: Ord> Heap<T, P> for IndexedMinHeap<T, P> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: SlotMap::with_key(),
        }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, priority: P, item: T) {
        let _ = self.push_with_handle(priority, item);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.entries.first().map(|e| (&e.priority, &e.item))
    }

    fn pop(&mut self) -> Option<(P, T)> {
        self.take_at(0).map(|e| (e.priority, e.item))
    }
}

impl<T, P: Ord> AddressableHeap<T, P> for IndexedMinHeap<T, P> {
    type Handle = HeapHandle;

    fn push_with_handle(&mut self, priority: P, item: T) -> HeapHandle {
        let index = self.entries.len();
        let handle = self.positions.insert(index);
        self.entries.push(Entry {
            priority,
            item,
            handle,
        });
        self.sift_up(index);
        handle
    }

    fn contains(&self, handle: &HeapHandle) -> bool {
        self.positions.contains_key(*handle)
    }

    fn priority(&self, handle: &HeapHandle) -> Option<&P> {
        self.positions
            .get(*handle)
            .map(|&pos| &self.entries[pos].priority)
    }

    fn update_priority(
        &mut self,
        handle: &HeapHandle,
        new_priority: P,
    ) -> Result<Repair, HeapError> {
        let pos = *self.positions.get(*handle).ok_or(HeapError::InvalidHandle)?;

        let entry = &mut self.entries[pos];
        let repair = Repair::for_change(&entry.priority, &new_priority);
        entry.priority = new_priority;

        match repair {
            Repair::SiftUp => self.sift_up(pos),
            Repair::SiftDown => self.sift_down(pos),
            Repair::Unchanged => {}
        }

        debug_assert!(self.is_heap());
        Ok(repair)
    }

    fn remove(&mut self, handle: &HeapHandle) -> Option<(P, T)> {
        let pos = *self.positions.get(*handle)?;
        self.take_at(pos).map(|e| (e.priority, e.item))
    }
}

impl<T, P: Ord> Default for IndexedMinHeap<T, P> {
    fn default() -> Self {
        <Self as Heap<T, P>>::new()
    }
}
