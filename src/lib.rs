//! Array-Backed Max-Heap for Rust
//!
//! This crate provides [`ArrayHeap`], a max-heap stored in a growable array with
//! 1-based logical indexing, and the [`Heap`] trait it implements.
//!
//! # Features
//!
//! - **ArrayHeap**: O(log n) amortized `add`, O(log n) `remove_root`, O(1) `peek`
//! - **Heap trait**: `add`, `remove_root`, `peek`, `is_empty`, `len`, `clear`,
//!   also implemented for `std::collections::BinaryHeap`
//! - **Explicit empty results**: `remove_root` and `peek` return `None` on an empty heap
//!
//! # Example
//!
//! ```rust
//! use array_heap::{ArrayHeap, Heap};
//!
//! let mut heap = ArrayHeap::new();
//! heap.add(5);
//! heap.add(1);
//! heap.add(8);
//!
//! assert_eq!(heap.peek(), Some(&8));
//! assert_eq!(heap.remove_root(), Some(8));
//! assert_eq!(heap.remove_root(), Some(5));
//!
//! heap.clear();
//! assert!(heap.is_empty());
//! assert_eq!(heap.remove_root(), None);
//! ```

pub mod array_heap;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use array_heap::{ArrayHeap, DEFAULT_CAPACITY};
pub use traits::{Heap, HeapError};
