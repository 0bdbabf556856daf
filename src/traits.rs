//! The max-heap contract
//!
//! [`Heap`] is the capability set every max-heap in this crate satisfies:
//! `add`, `remove_root`, `peek`, `is_empty`, `len` and `clear`. Ordering is the
//! element type's [`Ord`] implementation, so there is no runtime comparison
//! failure to handle.
//!
//! Asking an empty heap for its root is an expected condition and is reported
//! as `None`. [`HeapError`] is only used to describe a broken internal
//! invariant (see [`ArrayHeap::check_invariants`](crate::ArrayHeap::check_invariants)).

use std::fmt;

/// Error type describing a violated heap invariant
///
/// Indices are logical (1-based) positions in the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The element at `index` compares greater than its parent at `index / 2`
    HeapPropertyViolated { index: usize },
    /// A slot inside `1..=len` holds no element
    MissingElement { index: usize },
    /// A slot past `len` still holds an element
    StrayElement { index: usize },
    /// The unused slot 0 holds an element
    SentinelOccupied,
    /// The backing store cannot hold `len` elements plus the sentinel
    CapacityExhausted { len: usize, capacity: usize },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::HeapPropertyViolated { index } => {
                write!(f, "element at index {} is greater than its parent", index)
            }
            HeapError::MissingElement { index } => {
                write!(f, "occupied range has an empty slot at index {}", index)
            }
            HeapError::StrayElement { index } => {
                write!(f, "slot {} past the last element is not empty", index)
            }
            HeapError::SentinelOccupied => write!(f, "sentinel slot 0 is occupied"),
            HeapError::CapacityExhausted { len, capacity } => {
                write!(
                    f,
                    "backing store of length {} cannot hold {} elements",
                    capacity, len
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Max-heap abstract data type
///
/// The root is always a greatest element under `T`'s total order.
///
/// # Example
///
/// ```rust
/// use array_heap::{ArrayHeap, Heap};
///
/// let mut heap = ArrayHeap::new();
/// heap.add(3);
/// heap.add(9);
/// heap.add(4);
///
/// assert_eq!(heap.peek(), Some(&9));
/// assert_eq!(heap.remove_root(), Some(9));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self
    where
        Self: Sized;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn add(&mut self, item: T);

    /// Removes and returns a greatest element, or `None` if the heap is empty
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_root(&mut self) -> Option<T>;

    /// Returns a greatest element without removing it, or `None` if the heap is empty
    fn peek(&self) -> Option<&T>;

    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Drops every element, returning the heap to its freshly created state
    fn clear(&mut self);
}
