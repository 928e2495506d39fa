//! Binary min-heap with positional update
//!
//! An array-backed binary min-heap over bare keys. Besides the usual
//! [`enqueue`](MinHeapPriorityQueue::enqueue) and
//! [`dequeue`](MinHeapPriorityQueue::dequeue), a caller that knows the current
//! array position of a key can overwrite it with
//! [`update_value_at_index`](MinHeapPriorityQueue::update_value_at_index). The
//! heap repairs itself in whichever direction the change requires: a decrease
//! bubbles the key toward the root, an increase sinks it toward the leaves.
//!
//! Positions are not stable. Every mutating call may renumber elements, so a
//! position is only meaningful until the next mutation. Callers that need a
//! stable reference should use [`IndexedMinHeap`](crate::indexed::IndexedMinHeap).
//!
//! # Time Complexity
//!
//! | Operation               | Complexity |
//! |-------------------------|------------|
//! | `enqueue`               | O(log n)   |
//! | `dequeue`               | O(log n)   |
//! | `update_value_at_index` | O(log n)   |
//! | `peek` / `count`        | O(1)       |
//! | `from_vec`              | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use positional_heap::binary::MinHeapPriorityQueue;
//! use positional_heap::Repair;
//!
//! let mut heap = MinHeapPriorityQueue::new();
//! for value in [1, 5, 3, 8, 9, 7] {
//!     heap.enqueue(value);
//! }
//!
//! let index = heap.position_of(&8).unwrap();
//! assert_eq!(heap.update_value_at_index(index, 0), Ok(Repair::SiftUp));
//! assert_eq!(heap.dequeue(), Some(0));
//! assert_eq!(heap.dequeue(), Some(1));
//! ```

use crate::traits::{Heap, HeapError, Repair};

/// An array-backed binary min-heap of keys
///
/// The key type defaults to `i32`. Every non-root position `i` satisfies
/// `data[(i - 1) / 2] <= data[i]`, so the minimum is always at position 0.
///
/// When both children of a sinking node are smaller than it and equal to each
/// other, the left child is chosen. This keeps the layout deterministic; it is
/// a convention of this implementation, not a property of binary heaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinHeapPriorityQueue<P: Ord = i32> {
    /// The keys in heap order
    data: Vec<P>,
}

impl<P: Ord> MinHeapPriorityQueue<P> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from an arbitrary vector in O(n)
    pub fn from_vec(data: Vec<P>) -> Self {
        let mut heap = Self { data };
        for index in (0..heap.data.len() / 2).rev() {
            heap.sift_down(index);
        }
        debug_assert!(heap.is_heap());
        heap
    }

    /// Adds a key to the heap
    pub fn enqueue(&mut self, value: P) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the smallest key, or `None` if the heap is empty
    ///
    /// The last key is moved into the root and sunk back into place.
    pub fn dequeue(&mut self) -> Option<P> {
        if self.data.is_empty() {
            return None;
        }

        let result = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(result)
    }

    /// Overwrites the key at `index` and restores heap order
    ///
    /// A smaller key is bubbled up from `index`, a larger one is sunk down,
    /// and an equal one leaves the layout untouched. The returned [`Repair`]
    /// says which of these happened.
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfRange` if `index >= self.count()`. The
    /// heap is not modified in that case.
    pub fn update_value_at_index(
        &mut self,
        index: usize,
        new_value: P,
    ) -> Result<Repair, HeapError> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(HeapError::IndexOutOfRange { index, len })?;

        let repair = Repair::for_change(slot, &new_value);
        *slot = new_value;

        match repair {
            Repair::SiftUp => self.sift_up(index),
            Repair::SiftDown => self.sift_down(index),
            Repair::Unchanged => {}
        }

        debug_assert!(self.is_heap());
        Ok(repair)
    }

    /// Returns the number of keys in the heap
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of keys in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of keys the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the smallest key without removing it
    pub fn peek(&self) -> Option<&P> {
        self.data.first()
    }

    /// Returns the key currently stored at `index`
    pub fn get(&self, index: usize) -> Option<&P> {
        self.data.get(index)
    }

    /// Returns the first position holding a key equal to `value`
    ///
    /// This is a linear scan, intended for callers of
    /// [`update_value_at_index`](Self::update_value_at_index) that know a key
    /// but not where it currently sits.
    pub fn position_of(&self, value: &P) -> Option<usize> {
        self.data.iter().position(|p| p == value)
    }

    /// Returns the backing sequence in heap order
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// Removes every key
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning the backing sequence in heap order
    pub fn into_vec(self) -> Vec<P> {
        self.data
    }

    /// Consumes the heap, returning its keys in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<P> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.dequeue() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks that every parent is less than or equal to its children
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2] <= self.data[i])
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            // strict comparison keeps the left child on ties
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<P: Ord> Heap<(), P> for MinHeapPriorityQueue<P> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: P, _item: ()) {
        self.enqueue(priority);
    }

    fn peek(&self) -> Option<(&P, &())> {
        self.data.first().map(|p| (p, &()))
    }

    fn pop(&mut self) -> Option<(P, ())> {
        self.dequeue().map(|p| (p, ()))
    }
}

impl<P: Ord> Default for MinHeapPriorityQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord> From<Vec<P>> for MinHeapPriorityQueue<P> {
    fn from(data: Vec<P>) -> Self {
        Self::from_vec(data)
    }
}

impl<P: Ord> FromIterator<P> for MinHeapPriorityQueue<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<P: Ord> Extend<P> for MinHeapPriorityQueue<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.enqueue(value);
        }
    }
}
