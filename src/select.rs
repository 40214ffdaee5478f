//! Running a whole stream through one accumulator
//!
//! [`select_kth`] is the generic driver; [`Strategy`] names each concrete
//! accumulator so the benchmark harness and the CLI can pick them at runtime.

use std::fmt;
use std::str::FromStr;

use crate::error::{SelectError, UnknownStrategy};
use crate::fused_heap::FusedHeap;
use crate::hole_heap::HoleHeap;
use crate::sorted_buffer::SortedBuffer;
use crate::std_heap::StdBoundedHeap;
use crate::traits::BoundedAccumulator;

/// Returns the `k`-th smallest of `values` (1-based) using accumulator `A`
///
/// The accumulator is seeded with the first `k` values and then offered every
/// remaining value exactly once, front to back.
///
/// # Errors
/// Returns [`SelectError::InvalidCapacity`] unless `1 <= k <= values.len()`.
///
/// # Example
///
/// ```rust
/// use kth_smallest::select::select_kth;
/// use kth_smallest::hole_heap::HoleHeap;
///
/// let kth = select_kth::<u32, HoleHeap<u32>>(&[5, 1, 4, 2, 8, 0, 7, 3], 3).unwrap();
/// assert_eq!(kth, 2);
/// ```
pub fn select_kth<T, A>(values: &[T], k: usize) -> Result<T, SelectError>
where
    T: Ord + Copy,
    A: BoundedAccumulator<T>,
{
    let invalid = SelectError::InvalidCapacity {
        k,
        len: values.len(),
    };
    if k == 0 || k > values.len() {
        return Err(invalid);
    }

    let mut acc = A::from_prefix(k, values);
    for &value in &values[k..] {
        acc.insert(value);
    }
    acc.kth_smallest().copied().ok_or(invalid)
}

/// The selection strategies the harness can compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`SortedBuffer`]
    SortedBuffer,
    /// [`StdBoundedHeap`]
    StdHeap,
    /// [`HoleHeap`]
    HoleHeap,
    /// [`FusedHeap`]
    FusedHeap,
}

impl Strategy {
    /// Every strategy, in reporting order
    pub const ALL: [Strategy; 4] = [
        Strategy::SortedBuffer,
        Strategy::StdHeap,
        Strategy::HoleHeap,
        Strategy::FusedHeap,
    ];

    /// Name used in reports and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Strategy::SortedBuffer => "sorted-buffer",
            Strategy::StdHeap => "std-heap",
            Strategy::HoleHeap => "hole-heap",
            Strategy::FusedHeap => "fused-heap",
        }
    }

    /// Runs [`select_kth`] with this strategy's accumulator
    pub fn select<T: Ord + Copy>(self, values: &[T], k: usize) -> Result<T, SelectError> {
        match self {
            Strategy::SortedBuffer => select_kth::<T, SortedBuffer<T>>(values, k),
            Strategy::StdHeap => select_kth::<T, StdBoundedHeap<T>>(values, k),
            Strategy::HoleHeap => select_kth::<T, HoleHeap<T>>(values, k),
            Strategy::FusedHeap => select_kth::<T, FusedHeap<T>>(values, k),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
