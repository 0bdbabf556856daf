//! Array-backed max-heap
//!
//! [`ArrayHeap`] keeps its elements in a growable slot vector with 1-based
//! logical indexing: slot 0 is an unused sentinel, the node at `i` has children
//! at `2i` and `2i + 1` and its parent at `i / 2`. Elements occupy `1..=len`
//! densely and every slot past `len` is empty.
//!
//! # Growth
//!
//! Before each insertion, if `len >= capacity - 1` the backing store is
//! replaced by one of length `2 * len` (twice the element count, not twice the
//! old length), carrying over slots `0..=len`. Capacity never shrinks except
//! through [`clear`](Heap::clear), which starts over with [`DEFAULT_CAPACITY`].
//!
//! # Time Complexity
//!
//! | Operation     | Complexity         |
//! |---------------|--------------------|
//! | `add`         | O(log n) amortized |
//! | `remove_root` | O(log n)           |
//! | `peek`        | O(1)               |
//! | `clear`       | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use array_heap::{ArrayHeap, Heap};
//!
//! let mut heap = ArrayHeap::new();
//! for value in [0, 7, 14, 21, 28] {
//!     heap.add(value);
//! }
//!
//! assert_eq!(heap.remove_root(), Some(28));
//! assert_eq!(heap.remove_root(), Some(21));
//! assert_eq!(heap.peek(), Some(&14));
//! ```

use log::{debug, trace};

use crate::traits::{Heap, HeapError};

/// Backing-store length of a new or cleared heap, sentinel slot included
pub const DEFAULT_CAPACITY: usize = 8;

/// A max-heap stored in a growable array
#[derive(Debug, Clone)]
pub struct ArrayHeap<T: Ord> {
    /// Slot 0 is always `None`
    slots: Vec<Option<T>>,
    len: usize,
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

impl<T: Ord> Heap<T> for ArrayHeap<T> {
    fn new() -> Self {
        Self {
            slots: empty_slots(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    fn add(&mut self, item: T) {
        self.ensure_capacity();
        self.len += 1;
        self.slots[self.len] = Some(item);
        self.sift_up(self.len);

        #[cfg(debug_assertions)]
        self.assert_invariants("add");
    }

    fn remove_root(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        // Move the last element into the root slot; the old root ends up in
        // the vacated slot and is taken out, leaving it empty.
        self.slots.swap(1, self.len);
        let root = self.slots[self.len].take();
        self.len -= 1;
        self.sift_down(1);

        #[cfg(debug_assertions)]
        self.assert_invariants("remove_root");

        root
    }

    fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[1].as_ref()
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        debug!("clearing array heap holding {} elements", self.len);
        self.slots = empty_slots(DEFAULT_CAPACITY);
        self.len = 0;
    }
}

impl<T: Ord> ArrayHeap<T> {
    /// Returns the length of the backing store, sentinel slot included
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Consumes the heap, returning its elements in non-increasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Some(item) = self.remove_root() {
            sorted.push(item);
        }
        sorted
    }

    /// Verifies the capacity, density and heap-property invariants
    ///
    /// Returns the first violation found. A heap built only through the
    /// public API always passes.
    pub fn check_invariants(&self) -> Result<(), HeapError> {
        if self.slots.len() < self.len + 1 {
            return Err(HeapError::CapacityExhausted {
                len: self.len,
                capacity: self.slots.len(),
            });
        }
        if self.slots[0].is_some() {
            return Err(HeapError::SentinelOccupied);
        }
        if let Some(index) = (1..=self.len).find(|&i| self.slots[i].is_none()) {
            return Err(HeapError::MissingElement { index });
        }
        if let Some(index) = (self.len + 1..self.slots.len()).find(|&i| self.slots[i].is_some()) {
            return Err(HeapError::StrayElement { index });
        }
        if let Some(index) = (2..=self.len).find(|&i| self.greater(i, i / 2)) {
            return Err(HeapError::HeapPropertyViolated { index });
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self, operation: &str) {
        let checked = self.check_invariants();
        assert!(
            checked.is_ok(),
            "heap invariant violated after {}: {:?}",
            operation,
            checked
        );
    }

    /// Grows the backing store to `2 * len` once every slot past the sentinel is taken
    fn ensure_capacity(&mut self) {
        if self.len < self.slots.len() - 1 {
            return;
        }

        let new_capacity = self.len * 2;
        trace!(
            "growing array heap from {} to {} slots ({} elements)",
            self.slots.len(),
            new_capacity,
            self.len
        );

        let mut grown = Vec::with_capacity(new_capacity);
        grown.extend(self.slots.drain(..=self.len));
        grown.resize_with(new_capacity, || None);
        self.slots = grown;
    }

    /// True if both slots are occupied and the element at `a` is strictly greater
    fn greater(&self, a: usize, b: usize) -> bool {
        match (&self.slots[a], &self.slots[b]) {
            (Some(x), Some(y)) => x > y,
            _ => false,
        }
    }

    /// Move element at index up while it is greater than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 1 {
            let parent = index / 2;
            if !self.greater(index, parent) {
                break;
            }
            self.slots.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down while its larger child is greater than it
    ///
    /// When both children compare equal the left one is taken.
    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index;
            if left > self.len {
                break;
            }
            let right = left + 1;
            let larger = if right <= self.len && self.greater(right, left) {
                right
            } else {
                left
            };

            if !self.greater(larger, index) {
                break;
            }
            self.slots.swap(index, larger);
            index = larger;
        }
    }
}

impl<T: Ord> Default for ArrayHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for ArrayHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = ArrayHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for ArrayHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
