//! Error type shared by the selection driver and the benchmark harness

use thiserror::Error;

/// Errors raised while selecting the K-th smallest value or benchmarking a strategy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The retained count is zero or larger than the number of input values
    #[error("k must satisfy 1 <= k <= {len}, got k = {k}")]
    InvalidCapacity { k: usize, len: usize },

    /// A benchmark was configured without any trials
    #[error("number of trials must be at least 1")]
    ZeroTrials,

    /// The synthetic permutation `[0, n)` does not fit the `u32` value type
    #[error("{num_elements} elements exceed the u32 value range")]
    TooManyElements { num_elements: usize },

    /// A strategy returned the wrong K-th smallest value for a permutation
    #[error("{strategy}() returned {actual}, expected {expected}")]
    InvariantViolation {
        strategy: &'static str,
        expected: u32,
        actual: u32,
    },
}

/// Error returned when parsing an unknown strategy name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy `{0}` (expected one of: sorted-buffer, std-heap, hole-heap, fused-heap)")]
pub struct UnknownStrategy(pub String);
