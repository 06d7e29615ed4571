//! Binary search over sorted slices.
//!
//! This module provides a recursive binary search with precondition
//! validation: the input must be sorted in non-decreasing order, and an
//! exhausted search window is reported as a typed error rather than a
//! sentinel index.
//!
//! # Overview
//!
//! - [`binary_search`] searches the full slice.
//! - [`binary_search_in`] searches a half-open index window
//!   `[start, end)` of the slice.
//! - [`is_sorted`] checks the non-decreasing precondition on its own.
//! - [`SearchError`] distinguishes an unsorted input from a missing key.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::search::{SearchError, binary_search, binary_search_in};
//!
//! let primes = [2, 3, 5, 7, 11, 13];
//!
//! assert_eq!(binary_search(&primes, &7), Ok(3));
//! assert_eq!(binary_search(&primes, &4), Err(SearchError::KeyNotFound));
//!
//! // Restrict the search to a sub-window; 2 sits outside [2, 6).
//! assert_eq!(binary_search_in(&primes, &2, 2..6), Err(SearchError::KeyNotFound));
//! ```

mod binary;

pub use binary::{SearchError, binary_search, binary_search_in, is_sorted};
