//! Bounded max-heap built on `std::collections::BinaryHeap`
//!
//! This is the baseline strategy: it uses only the library's generic heap
//! primitives. The seed is heapified in O(k); after that, every value smaller
//! than the current maximum costs a full `pop` (sift-down) followed by a full
//! `push` (sift-up).
//!
//! # Example
//!
//! ```rust
//! use kth_smallest::BoundedAccumulator;
//! use kth_smallest::std_heap::StdBoundedHeap;
//!
//! let values = [5, 1, 4, 2, 8, 0, 7, 3];
//! let mut heap = StdBoundedHeap::from_prefix(3, &values);
//! for &x in &values[3..] {
//!     heap.insert(x);
//! }
//! assert_eq!(heap.kth_smallest(), Some(&2));
//! ```

use std::collections::BinaryHeap;

use crate::traits::BoundedAccumulator;

/// A size-`k` max-heap delegating to [`BinaryHeap`]
#[derive(Debug, Clone)]
pub struct StdBoundedHeap<T: Ord> {
    heap: BinaryHeap<T>,
    capacity: usize,
}

impl<T: Ord + Copy> BoundedAccumulator<T> for StdBoundedHeap<T> {
    fn with_capacity(k: usize) -> Self {
        assert!(k > 0, "StdBoundedHeap capacity must be at least 1");
        Self {
            heap: BinaryHeap::with_capacity(k),
            capacity: k,
        }
    }

    fn from_prefix(k: usize, values: &[T]) -> Self {
        assert!(k > 0, "StdBoundedHeap capacity must be at least 1");
        let seed: Vec<T> = values.iter().take(k).copied().collect();
        Self {
            // From<Vec<T>> heapifies in place
            heap: BinaryHeap::from(seed),
            capacity: k,
        }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn insert(&mut self, value: T) {
        if self.heap.len() < self.capacity {
            self.heap.push(value);
            return;
        }
        if self.heap.peek().is_some_and(|top| value < *top) {
            self.heap.pop();
            self.heap.push(value);
        }
    }

    fn peek_max(&self) -> Option<&T> {
        self.heap.peek()
    }

    fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }
}
