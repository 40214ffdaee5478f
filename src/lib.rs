//! Bounded K-smallest selection for Rust
//!
//! This crate finds the K-th smallest value of a large unsorted stream in a
//! single pass and O(K) memory, and benchmarks several ways of doing it.
//!
//! # Strategies
//!
//! - **Sorted buffer**: ascending array with binary-search insertion; O(log K) search + O(K) shift
//! - **Std heap**: `std::collections::BinaryHeap`, pop then push for every accepted value
//! - **Hole heap**: max-heap whose replace-top carries the hole from sift-down straight into sift-up
//! - **Fused heap**: max-heap whose add rejects values not below the maximum in O(1)
//!
//! All four implement [`BoundedAccumulator`] and can be swapped freely.
//!
//! # Example
//!
//! ```rust
//! use kth_smallest::select::Strategy;
//!
//! let stream = [5u32, 1, 4, 2, 8, 0, 7, 3];
//! for strategy in Strategy::ALL {
//!     assert_eq!(strategy.select(&stream, 3), Ok(2));
//! }
//! ```

pub mod error;
pub mod fused_heap;
pub mod harness;
pub mod heap_ops;
pub mod hole_heap;
pub mod options;
pub mod select;
pub mod sorted_buffer;
pub mod std_heap;
pub mod traits;

// Re-export the main types for convenience
pub use error::SelectError;
pub use select::{select_kth, Strategy};
pub use traits::BoundedAccumulator;
