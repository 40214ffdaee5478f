//! Max-heap with a fused, short-circuiting add
//!
//! Once the heap holds `k` values, [`FusedHeap::add`] first compares the
//! candidate against the root. Anything not smaller than the current maximum
//! cannot be among the `k` smallest, so it is rejected in O(1) without touching
//! the heap. For a random permutation with `k` much smaller than `n`, almost
//! every element takes this path.
//!
//! An accepted candidate goes through two classic steps:
//!
//! - **Remove**: the last element overwrites the root, the count shrinks by
//!   one, and that element is swapped down past the larger child while smaller.
//! - **Insert**: the candidate goes into the freed last slot, the count grows
//!   back, and it is swapped up past any smaller parent.
//!
//! The backing vector is allocated at capacity `k` and never reallocates.
//!
//! # Example
//!
//! ```rust
//! use kth_smallest::BoundedAccumulator;
//! use kth_smallest::fused_heap::FusedHeap;
//!
//! let mut heap = FusedHeap::from_prefix(2, &[2, 2]);
//! heap.add(2);
//! heap.add(2);
//! assert_eq!(heap.kth_smallest(), Some(&2));
//! ```

use crate::heap_ops::{heapify, left_child, parent};
use crate::traits::BoundedAccumulator;

/// A 0-indexed binary max-heap of fixed capacity
#[derive(Debug, Clone)]
pub struct FusedHeap<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T: Ord + Copy> FusedHeap<T> {
    /// Offers `value` to the heap
    ///
    /// While the heap is filling, `value` is inserted. Once full, `value`
    /// replaces the maximum if it is smaller; otherwise the heap is left
    /// exactly as it was.
    pub fn add(&mut self, value: T) {
        if self.data.len() < self.capacity {
            self.insert_last(value);
            return;
        }
        if value >= self.data[0] {
            return;
        }
        self.remove_top();
        self.insert_last(value);
    }

    /// Moves the last element into the root and sifts it down
    fn remove_top(&mut self) {
        let Some(last) = self.data.pop() else {
            return;
        };
        if self.data.is_empty() {
            return;
        }
        self.data[0] = last;

        let len = self.data.len();
        let mut index = 0;
        loop {
            let left = left_child(index);
            if left >= len {
                break;
            }
            let right = left + 1;
            let larger = if right < len && self.data[right] > self.data[left] {
                right
            } else {
                left
            };
            if self.data[index] >= self.data[larger] {
                break;
            }
            self.data.swap(index, larger);
            index = larger;
        }
    }

    /// Appends `value` and sifts it up
    fn insert_last(&mut self, value: T) {
        self.data.push(value);
        let mut index = self.data.len() - 1;
        while index > 0 {
            let up = parent(index);
            if self.data[up] >= self.data[index] {
                break;
            }
            self.data.swap(index, up);
            index = up;
        }
    }
}

impl<T: Ord + Copy> BoundedAccumulator<T> for FusedHeap<T> {
    fn with_capacity(k: usize) -> Self {
        assert!(k > 0, "FusedHeap capacity must be at least 1");
        Self {
            data: Vec::with_capacity(k),
            capacity: k,
        }
    }

    fn from_prefix(k: usize, values: &[T]) -> Self {
        let mut heap = Self::with_capacity(k);
        heap.data.extend(values.iter().take(k).copied());
        heapify(&mut heap.data);
        heap
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, value: T) {
        self.add(value);
    }

    fn peek_max(&self) -> Option<&T> {
        self.data.first()
    }

    fn as_slice(&self) -> &[T] {
        &self.data
    }
}
