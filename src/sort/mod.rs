//! Sorting via swap-and-restart recursion.
//!
//! This module provides [`insertion_sort`], a sort that returns a new,
//! non-decreasing copy of its input without mutating the caller's slice.
//!
//! The algorithm is the swap-and-restart variant rather than classical
//! shift-and-insert insertion sort: each pass scans from the front,
//! swaps the first out-of-order adjacent pair it finds, and immediately
//! restarts on the swapped copy. A pass that finds no inversion returns
//! the copy as the result. These exact semantics (one swap per pass,
//! restart from the beginning) are preserved deliberately; do not expect
//! classical insertion-sort behavior or complexity.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sort::insertion_sort;
//!
//! let numbers = [11, 59, 3, 2, 53, 17, 31, 7, 19, 67, 47, 13, 37, 61, 29, 43, 5, 41, 23];
//! let sorted = insertion_sort(&numbers);
//!
//! assert_eq!(
//!     sorted,
//!     vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67]
//! );
//! // The input is untouched.
//! assert_eq!(numbers[0], 11);
//! ```

mod insertion;

pub use insertion::insertion_sort;
