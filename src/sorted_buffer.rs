//! Sorted insertion buffer
//!
//! Keeps the `k` smallest values seen so far in an ascending array. Each
//! insertion binary-searches the valid prefix and shifts the tail one slot
//! toward the back; a value whose position falls at or past the capacity
//! boundary cannot be among the `k` smallest and is dropped.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity                  |
//! |----------------|-----------------------------|
//! | `insert`       | O(log k) search + O(k) shift |
//! | `kth_smallest` | O(1)                        |
//!
//! # Example
//!
//! ```rust
//! use kth_smallest::BoundedAccumulator;
//! use kth_smallest::sorted_buffer::SortedBuffer;
//!
//! let mut buffer = SortedBuffer::with_capacity(3);
//! for x in [5, 1, 4, 2, 8, 0, 7, 3] {
//!     buffer.insert(x);
//! }
//! assert_eq!(buffer.as_slice(), &[0, 1, 2]);
//! assert_eq!(buffer.kth_smallest(), Some(&2));
//! ```

use crate::traits::BoundedAccumulator;

/// An ascending array capped at `k` elements
#[derive(Debug, Clone)]
pub struct SortedBuffer<T> {
    /// Valid prefix, always sorted ascending and never longer than `capacity`
    values: Vec<T>,
    capacity: usize,
}

impl<T: Ord + Copy> BoundedAccumulator<T> for SortedBuffer<T> {
    fn with_capacity(k: usize) -> Self {
        assert!(k > 0, "SortedBuffer capacity must be at least 1");
        Self {
            values: Vec::with_capacity(k),
            capacity: k,
        }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn insert(&mut self, value: T) {
        // First slot holding a value >= `value`, like C++ lower_bound
        let pos = self.values.partition_point(|v| *v < value);
        if pos >= self.capacity {
            return;
        }

        if self.values.len() < self.capacity {
            self.values.insert(pos, value);
        } else {
            // Full: the last element falls off the end
            self.values[pos..].rotate_right(1);
            self.values[pos] = value;
        }
    }

    fn peek_max(&self) -> Option<&T> {
        self.values.last()
    }

    fn as_slice(&self) -> &[T] {
        &self.values
    }

    fn into_sorted_vec(self) -> Vec<T> {
        self.values
    }
}
