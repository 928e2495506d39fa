//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for the min-heaps in this crate:
//!
//! - [`Heap`]: Base trait for heaps storing `(priority, item)` pairs
//! - [`AddressableHeap`]: Extended trait adding stable handles and in-place
//!   priority updates in either direction
//!
//! It also defines [`Repair`], which reports how an update restored heap order,
//! and [`HeapError`], the error type shared by every fallible operation.

use std::fmt;
use std::hash::Hash;

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A positional update named a position outside `0..len`
    #[error("index {index} is out of range for heap of length {len}")]
    IndexOutOfRange {
        /// The rejected position
        index: usize,
        /// The heap length at the time of the call
        len: usize,
    },
    /// The new priority is not less than the current priority
    #[error("new priority is not less than current priority")]
    PriorityNotDecreased,
    /// The handle is no longer valid (element was removed)
    #[error("handle is no longer valid (element was removed)")]
    InvalidHandle,
}

/// Direction in which heap order was restored after a priority change
///
/// A plain binary heap only ever sifts up after an insert and down after an
/// extraction. An update can perturb an interior node, so the direction is
/// chosen from the sign of the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repair {
    /// The new priority equals the old one; nothing moved
    Unchanged,
    /// The priority decreased and the element was bubbled toward the root
    SiftUp,
    /// The priority increased and the element was sunk toward the leaves
    SiftDown,
}

impl Repair {
    /// Picks the repair direction for a change from `old` to `new`
    pub(crate) fn for_change<P: Ord>(old: &P, new: &P) -> Self {
        match new.cmp(old) {
            std::cmp::Ordering::Less => Repair::SiftUp,
            std::cmp::Ordering::Greater => Repair::SiftDown,
            std::cmp::Ordering::Equal => Repair::Unchanged,
        }
    }
}

/// A handle to an element in the heap
///
/// This is an opaque type that identifies a specific element for as long as
/// it stays in the heap, independent of its current array position.
pub trait Handle: Copy + Eq + Hash + fmt::Debug {}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
/// Heaps that hold bare keys implement `Heap<(), P>`.
///
/// # Example
///
/// ```rust
/// use positional_heap::Heap;
/// use positional_heap::indexed::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;
}

/// Extended heap trait with stable handles
///
/// This trait extends [`Heap`] with operations that require tracking elements
/// across reorderings:
/// - `push_with_handle` returns a handle that survives every later mutation
///   until its element leaves the heap
/// - `update_priority` changes an element's priority in either direction
/// - `remove` deletes an arbitrary element
///
/// # Example
///
/// ```rust
/// use positional_heap::{AddressableHeap, Heap, Repair};
/// use positional_heap::indexed::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::new();
/// let handle = heap.push_with_handle(10, "item");
/// heap.push(7, "other");
/// assert_eq!(heap.update_priority(&handle, 5), Ok(Repair::SiftUp));
/// assert_eq!(heap.peek(), Some((&5, &"item")));
/// ```
pub trait AddressableHeap<T, P: Ord>: Heap<T, P> {
    /// The handle type for this heap
    type Handle: Handle;

    /// Inserts an element with the given priority, returning a handle
    fn push_with_handle(&mut self, priority: P, item: T) -> Self::Handle;

    /// Returns true if the handle refers to an element still in the heap
    fn contains(&self, handle: &Self::Handle) -> bool;

    /// Returns the current priority of the element, if it is still in the heap
    fn priority(&self, handle: &Self::Handle) -> Option<&P>;

    /// Replaces the priority of an element and restores heap order
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the element has left the heap.
    ///
    /// # Time Complexity
    /// O(log n)
    fn update_priority(
        &mut self,
        handle: &Self::Handle,
        new_priority: P,
    ) -> Result<Repair, HeapError>;

    /// Removes an arbitrary element, returning its priority and item
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove(&mut self, handle: &Self::Handle) -> Option<(P, T)>;

    /// Decreases the priority of an element identified by the handle
    ///
    /// # Errors
    /// Returns `HeapError::PriorityNotDecreased` if the new priority is not
    /// less than the current priority, and `HeapError::InvalidHandle` if the
    /// element has left the heap.
    fn decrease_key(&mut self, handle: &Self::Handle, new_priority: P) -> Result<(), HeapError> {
        let decreased = match self.priority(handle) {
            None => return Err(HeapError::InvalidHandle),
            Some(current) => new_priority < *current,
        };
        if !decreased {
            return Err(HeapError::PriorityNotDecreased);
        }
        self.update_priority(handle, new_priority).map(|_| ())
    }
}
