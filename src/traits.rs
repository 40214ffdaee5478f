//! The bounded accumulator interface
//!
//! Every selection strategy in this crate keeps the `k` smallest values of a
//! stream in fixed-capacity storage. They differ only in how that storage is
//! laid out and repaired:
//!
//! - [`SortedBuffer`](crate::sorted_buffer::SortedBuffer): ascending array, binary-search insertion
//! - [`StdBoundedHeap`](crate::std_heap::StdBoundedHeap): `std::collections::BinaryHeap`, pop then push
//! - [`HoleHeap`](crate::hole_heap::HoleHeap): max-heap with a single-pass replace-top
//! - [`FusedHeap`](crate::fused_heap::FusedHeap): max-heap with an early-out fused add
//!
//! All of them implement [`BoundedAccumulator`], so the selection driver and the
//! benchmark harness can treat them interchangeably.

/// A fixed-capacity accumulator retaining the `k` smallest values it has seen
///
/// After any prefix of a stream has been inserted, the accumulator holds
/// exactly the `min(seen, k)` smallest values of that prefix (as a multiset).
///
/// # Example
///
/// ```rust
/// use kth_smallest::BoundedAccumulator;
/// use kth_smallest::fused_heap::FusedHeap;
///
/// let mut acc = FusedHeap::with_capacity(3);
/// for x in [5, 1, 4, 2, 8, 0, 7, 3] {
///     acc.insert(x);
/// }
/// assert_eq!(acc.kth_smallest(), Some(&2));
/// assert_eq!(acc.into_sorted_vec(), vec![0, 1, 2]);
/// ```
pub trait BoundedAccumulator<T: Ord + Copy> {
    /// Creates an empty accumulator that retains at most `k` values
    ///
    /// # Panics
    /// Panics if `k` is zero.
    fn with_capacity(k: usize) -> Self
    where
        Self: Sized;

    /// Creates an accumulator seeded with the first `min(k, values.len())` values
    ///
    /// Implementations backed by a heap override this to heapify the seed in
    /// O(k) instead of inserting one value at a time.
    ///
    /// # Panics
    /// Panics if `k` is zero.
    fn from_prefix(k: usize, values: &[T]) -> Self
    where
        Self: Sized,
    {
        let mut acc = Self::with_capacity(k);
        for &value in values.iter().take(k) {
            acc.insert(value);
        }
        acc
    }

    /// Maximum number of values retained
    fn capacity(&self) -> usize;

    /// Number of values currently retained
    fn len(&self) -> usize;

    /// Returns true if nothing has been inserted yet
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true once `capacity()` values are retained
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Offers the next stream value to the accumulator
    ///
    /// While the accumulator is not full the value is always retained. Once it
    /// is full, the value replaces the current maximum if it is smaller and is
    /// discarded otherwise.
    fn insert(&mut self, value: T);

    /// Returns the largest retained value
    fn peek_max(&self) -> Option<&T>;

    /// Returns the `k`-th smallest value seen so far
    ///
    /// This is `None` until `capacity()` values have been inserted: with fewer
    /// inputs than `k` there is no `k`-th smallest value.
    fn kth_smallest(&self) -> Option<&T> {
        if self.is_full() {
            self.peek_max()
        } else {
            None
        }
    }

    /// The active backing storage, in the implementation's internal order
    fn as_slice(&self) -> &[T];

    /// Consumes the accumulator, returning the retained values in ascending order
    fn into_sorted_vec(self) -> Vec<T>
    where
        Self: Sized,
    {
        let mut values = self.as_slice().to_vec();
        values.sort_unstable();
        values
    }
}
