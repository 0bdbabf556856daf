//! Standard library compatibility layer
//!
//! Implements [`Heap`] for `std::collections::BinaryHeap`, which is already a
//! max-heap over `Ord`. Code written against the [`Heap`] contract accepts
//! either implementation.
//!
//! # Example
//!
//! ```rust
//! use array_heap::{ArrayHeap, Heap};
//! use std::collections::BinaryHeap;
//!
//! fn drain_max<H: Heap<i32>>(heap: &mut H) -> Vec<i32> {
//!     let mut out = Vec::new();
//!     while let Some(value) = heap.remove_root() {
//!         out.push(value);
//!     }
//!     out
//! }
//!
//! let mut ours: ArrayHeap<i32> = [3, 1, 2].into_iter().collect();
//! let mut std_heap: BinaryHeap<i32> = [3, 1, 2].into_iter().collect();
//! assert_eq!(drain_max(&mut ours), drain_max(&mut std_heap));
//! ```

use std::collections::BinaryHeap;

use crate::traits::Heap;

impl<T: Ord> Heap<T> for BinaryHeap<T> {
    fn new() -> Self {
        BinaryHeap::new()
    }

    fn add(&mut self, item: T) {
        self.push(item);
    }

    fn remove_root(&mut self) -> Option<T> {
        self.pop()
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn clear(&mut self) {
        BinaryHeap::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_heap_through_trait() {
        let mut heap = <BinaryHeap<i32> as Heap<i32>>::new();
        Heap::add(&mut heap, 4);
        Heap::add(&mut heap, 11);
        Heap::add(&mut heap, 7);

        assert_eq!(Heap::len(&heap), 3);
        assert_eq!(Heap::peek(&heap), Some(&11));
        assert_eq!(Heap::remove_root(&mut heap), Some(11));

        Heap::clear(&mut heap);
        assert!(Heap::is_empty(&heap));
        assert_eq!(Heap::remove_root(&mut heap), None);
    }

    #[test]
    fn test_trait_object() {
        let mut heaps: Vec<Box<dyn Heap<u8>>> = vec![
            Box::new(<crate::ArrayHeap<u8> as Heap<u8>>::new()),
            Box::new(<BinaryHeap<u8> as Heap<u8>>::new()),
        ];
        for heap in heaps.iter_mut() {
            heap.add(2);
            heap.add(9);
            assert_eq!(heap.peek(), Some(&9));
        }
    }
}
