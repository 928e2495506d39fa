//! Binary Min-Heaps with Positional Update
//!
//! This crate provides an array-backed binary min-heap whose keys can be
//! changed in place, with heap order repaired in O(log n) in whichever
//! direction the change requires.
//!
//! # Features
//!
//! - **MinHeapPriorityQueue**: keys addressed by their current array position;
//!   O(log n) enqueue, dequeue and `update_value_at_index`
//! - **IndexedMinHeap**: `(priority, item)` pairs addressed by stable,
//!   generation-checked handles; O(log n) push, pop, update and remove
//!
//! Both implement the [`Heap`] trait, and `IndexedMinHeap` also implements
//! [`AddressableHeap`].
//!
//! # Example
//!
//! ```rust
//! use positional_heap::binary::MinHeapPriorityQueue;
//! use positional_heap::Repair;
//!
//! let mut heap = MinHeapPriorityQueue::new();
//! for value in [1, 2, 3, 4, 5] {
//!     heap.enqueue(value);
//! }
//!
//! // Raising the root sinks it back toward the leaves
//! assert_eq!(heap.update_value_at_index(0, 100), Ok(Repair::SiftDown));
//! assert_eq!(heap.dequeue(), Some(2));
//! assert_eq!(heap.count(), 4);
//! ```

pub mod binary;
pub mod indexed;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{AddressableHeap, Handle, Heap, HeapError, Repair};
