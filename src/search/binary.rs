//! Recursive binary search with precondition validation.

use core::cmp::Ordering;
use core::ops::Range;

use thiserror::Error;

/// Error type for binary search operations.
///
/// Both variants are terminal: the caller either supplied an input that
/// violates the sortedness precondition, or the key is simply absent.
/// A typed error (rather than a sentinel index) keeps "not found"
/// distinguishable from a legitimately returned index such as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The collection is not sorted in non-decreasing order.
    ///
    /// Raised before any index arithmetic takes place.
    #[error("collection is not sorted in non-decreasing order")]
    UnsortedInput,

    /// The search window was exhausted without locating the key.
    #[error("search key is not present in the searched range")]
    KeyNotFound,
}

/// Returns `true` if the slice is sorted in non-decreasing order.
///
/// Every adjacent pair `(a, b)` must satisfy `a <= b`; equal neighbors
/// are allowed. Empty and single-element slices are trivially sorted.
///
/// # Examples
///
/// ```rust
/// use ordseq::search::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 3]));
/// assert!(is_sorted::<i32>(&[]));
/// assert!(!is_sorted(&[3, 1, 2]));
/// ```
#[inline]
pub fn is_sorted<T: Ord>(collection: &[T]) -> bool {
    collection.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Searches the full slice for `key` using recursive binary search.
///
/// Equivalent to [`binary_search_in`] over `0..collection.len()`.
///
/// # Errors
///
/// - [`SearchError::UnsortedInput`] if the slice is not sorted in
///   non-decreasing order.
/// - [`SearchError::KeyNotFound`] if the key is not present.
///
/// # Examples
///
/// ```rust
/// use ordseq::search::{SearchError, binary_search};
///
/// let numbers = [11, 59, 3, 2, 53, 17, 31, 7, 19, 67, 47, 13, 37, 61, 29, 43, 5, 41, 23];
/// let mut sorted = numbers.to_vec();
/// sorted.sort_unstable();
///
/// assert_eq!(binary_search(&sorted, &2), Ok(0));
/// assert_eq!(binary_search(&sorted, &67), Ok(18));
/// assert_eq!(binary_search(&sorted, &43), Ok(13));
/// assert_eq!(binary_search(&sorted, &42), Err(SearchError::KeyNotFound));
///
/// // The unsorted original is rejected before any searching happens.
/// assert_eq!(binary_search(&numbers, &2), Err(SearchError::UnsortedInput));
/// ```
#[inline]
pub fn binary_search<T: Ord>(collection: &[T], key: &T) -> Result<usize, SearchError> {
    binary_search_in(collection, key, 0..collection.len())
}

/// Searches the half-open window `[range.start, range.end)` of the slice
/// for `key` using recursive binary search.
///
/// The whole slice must be sorted in non-decreasing order, not just the
/// searched window; this precondition is validated once on entry, before
/// any index arithmetic. The recursion then halves the window: an empty
/// window fails with [`SearchError::KeyNotFound`], otherwise the middle
/// element steers the search into the lower half `[start, mid)`, the
/// upper half `[mid + 1, end)`, or terminates with `Ok(mid)` on a match.
///
/// Runs in O(log n) recursive steps after the O(n) sortedness check and
/// never mutates the input. When the key occurs more than once, the
/// returned index is some valid position whose element equals the key;
/// which occurrence is unspecified.
///
/// # Errors
///
/// - [`SearchError::UnsortedInput`] if the slice is not sorted in
///   non-decreasing order.
/// - [`SearchError::KeyNotFound`] if the window is empty or the key is
///   not present within it.
///
/// # Panics
///
/// Panics if `range.end > collection.len()`; the window must lie within
/// the slice.
///
/// # Examples
///
/// ```rust
/// use ordseq::search::{SearchError, binary_search_in};
///
/// let primes = [2, 3, 5, 7, 11, 13, 17, 19];
///
/// assert_eq!(binary_search_in(&primes, &11, 0..primes.len()), Ok(4));
///
/// // The key exists in the slice but not in the searched window.
/// assert_eq!(
///     binary_search_in(&primes, &2, 4..8),
///     Err(SearchError::KeyNotFound)
/// );
///
/// // An empty window is exhausted by definition.
/// assert_eq!(
///     binary_search_in(&primes, &2, 3..3),
///     Err(SearchError::KeyNotFound)
/// );
/// ```
pub fn binary_search_in<T: Ord>(
    collection: &[T],
    key: &T,
    range: Range<usize>,
) -> Result<usize, SearchError> {
    // Validated once here instead of on every recursive call: the slice
    // is borrowed immutably for the whole search, so it cannot become
    // unsorted mid-recursion.
    if !is_sorted(collection) {
        return Err(SearchError::UnsortedInput);
    }

    search_window(collection, key, range)
}

/// The recursive halving step. Assumes the sortedness precondition has
/// already been checked by the public entry point.
fn search_window<T: Ord>(
    collection: &[T],
    key: &T,
    range: Range<usize>,
) -> Result<usize, SearchError> {
    // An empty window is the terminal failure condition of the recursion.
    if range.end <= range.start {
        return Err(SearchError::KeyNotFound);
    }

    let mid = range.start + (range.end - range.start) / 2;

    match collection[mid].cmp(key) {
        Ordering::Greater => search_window(collection, key, range.start..mid),
        Ordering::Less => search_window(collection, key, mid + 1..range.end),
        Ordering::Equal => Ok(mid),
    }
}
