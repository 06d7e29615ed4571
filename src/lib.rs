//! # ordseq
//!
//! Recursive search and sort routines over generic ordered sequences.
//!
//! ## Overview
//!
//! This library provides two independent, pure routines over finite,
//! indexable sequences of a totally-ordered element type:
//!
//! - **Binary Search**: locates a key within a sorted sequence via
//!   recursive halving of a half-open index window, with precondition
//!   validation and a typed error taxonomy.
//! - **Insertion Sort**: produces a sorted copy of a sequence via a
//!   swap-and-restart recursion (one adjacent swap per pass, then
//!   restart), evaluated stack-safely.
//!
//! Neither routine mutates its input; sorting operates on an owned
//! working copy, and searching only reads the borrowed slice.
//!
//! ## Feature Flags
//!
//! - `search`: binary search over sorted slices
//! - `sort`: swap-and-restart insertion sort
//! - `control`: stack-safe recursion support (`Trampoline`)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use ordseq::prelude::*;
//!
//! let numbers = [11, 59, 3, 2, 53, 17, 31, 7, 19, 67, 47, 13, 37, 61, 29, 43, 5, 41, 23];
//!
//! let sorted = insertion_sort(&numbers);
//! assert_eq!(binary_search(&sorted, &2), Ok(0));
//! assert_eq!(binary_search(&sorted, &67), Ok(18));
//! assert_eq!(binary_search(&sorted, &42), Err(SearchError::KeyNotFound));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use ordseq::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "search")]
    pub use crate::search::{SearchError, binary_search, binary_search_in, is_sorted};

    #[cfg(feature = "sort")]
    pub use crate::sort::insertion_sort;

    #[cfg(feature = "control")]
    pub use crate::control::Trampoline;
}

#[cfg(feature = "search")]
pub mod search;

#[cfg(feature = "sort")]
pub mod sort;

#[cfg(feature = "control")]
pub mod control;
