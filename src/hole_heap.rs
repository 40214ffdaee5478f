//! Max-heap with a single-pass replace-top
//!
//! Removing the root and inserting a replacement are fused around a "hole":
//!
//! 1. **Pop**: starting at the root, the larger child is moved up into the
//!    hole and the hole descends into that child's slot, until it reaches a
//!    leaf. A lone left child at the bottom level is moved up as well.
//! 2. **Push**: from that leaf, parents smaller than the new value are moved
//!    down into the hole while it climbs toward the root. The value is written
//!    once, into the final hole.
//!
//! Because the hole from step 1 is handed straight to step 2, no intermediate
//! compacted heap is ever written. Compared with a pop followed by a push this
//! saves the copy of the last element into the root and its comparisons on
//! the way down.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `replace_top` | O(log k)   |
//! | `insert`      | O(log k) when accepted, O(1) when rejected |
//! | `peek_max`    | O(1)       |

use crate::heap_ops::{heapify, left_child, parent};
use crate::traits::BoundedAccumulator;

/// A 0-indexed binary max-heap with hole-based replacement of the root
#[derive(Debug, Clone)]
pub struct HoleHeap<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T: Ord + Copy> HoleHeap<T> {
    /// Replaces the maximum with `value`, restoring heap order in one pass
    ///
    /// Does nothing on an empty heap.
    pub fn replace_top(&mut self, value: T) {
        if self.data.is_empty() {
            return;
        }
        let hole = self.pop_to_leaf();
        self.push_from(hole, value);
    }

    /// Walks the hole left by the root down to a leaf, returning its index
    fn pop_to_leaf(&mut self) -> usize {
        let len = self.data.len();
        let mut hole = 0;
        let mut child = left_child(hole);

        while child + 1 < len {
            let right = child + 1;
            let larger = if self.data[child] > self.data[right] {
                child
            } else {
                right
            };
            self.data[hole] = self.data[larger];
            hole = larger;
            child = left_child(hole);
        }

        // only child at the bottom level
        if child + 1 == len {
            self.data[hole] = self.data[child];
            hole = child;
        }

        hole
    }

    /// Sifts `value` up from `hole` and stores it
    fn push_from(&mut self, mut hole: usize, value: T) {
        while hole > 0 {
            let up = parent(hole);
            if value < self.data[up] {
                break;
            }
            self.data[hole] = self.data[up];
            hole = up;
        }
        self.data[hole] = value;
    }

    /// Ordinary sift-up insertion while the heap is still filling
    fn push(&mut self, value: T) {
        self.data.push(value);
        let hole = self.data.len() - 1;
        self.push_from(hole, value);
    }
}

impl<T: Ord + Copy> BoundedAccumulator<T> for HoleHeap<T> {
    fn with_capacity(k: usize) -> Self {
        assert!(k > 0, "HoleHeap capacity must be at least 1");
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
        if self.data.len() < self.capacity {
            self.push(value);
        } else if value < self.data[0] {
            self.replace_top(value);
        }
    }

    fn peek_max(&self) -> Option<&T> {
        self.data.first()
    }

    fn as_slice(&self) -> &[T] {
        &self.data
    }
}
