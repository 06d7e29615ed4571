//! Unit tests for recursive binary search.
//!
//! Covers the concrete demonstration cases, the error taxonomy
//! (unsorted input, missing key), sub-window searches, and the
//! duplicate-key non-guarantee.

#![cfg(feature = "search")]

use ordseq::search::{SearchError, binary_search, binary_search_in, is_sorted};
use rstest::rstest;

/// The demonstration array used throughout these tests, pre-sorted.
fn sorted_primes() -> Vec<i32> {
    let mut numbers = vec![
        11, 59, 3, 2, 53, 17, 31, 7, 19, 67, 47, 13, 37, 61, 29, 43, 5, 41, 23,
    ];
    numbers.sort_unstable();
    numbers
}

// =============================================================================
// Found Keys
// =============================================================================

#[rstest]
#[case(2, 0)]
#[case(67, 18)]
#[case(43, 13)]
#[case(3, 1)]
#[case(23, 8)]
fn finds_key_at_expected_index(#[case] key: i32, #[case] expected: usize) {
    let primes = sorted_primes();
    assert_eq!(binary_search(&primes, &key), Ok(expected));
}

#[rstest]
fn finds_every_element_of_the_collection() {
    let primes = sorted_primes();
    for (index, key) in primes.iter().enumerate() {
        let found = binary_search(&primes, key);
        assert_eq!(found, Ok(index), "key {key} should be found");
    }
}

#[rstest]
fn finds_the_only_element_of_a_singleton() {
    assert_eq!(binary_search(&[42], &42), Ok(0));
}

// =============================================================================
// Missing Keys
// =============================================================================

#[rstest]
#[case(42)]
#[case(1)]
#[case(68)]
#[case(-5)]
fn missing_key_fails_with_key_not_found(#[case] key: i32) {
    let primes = sorted_primes();
    assert_eq!(binary_search(&primes, &key), Err(SearchError::KeyNotFound));
}

#[rstest]
fn empty_collection_fails_with_key_not_found() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(binary_search(&empty, &1), Err(SearchError::KeyNotFound));
}

#[rstest]
fn empty_window_fails_with_key_not_found() {
    let primes = sorted_primes();
    assert_eq!(
        binary_search_in(&primes, &primes[3], 3..3),
        Err(SearchError::KeyNotFound)
    );
}

// =============================================================================
// Sub-Window Searches
// =============================================================================

#[rstest]
fn finds_key_inside_a_sub_window() {
    let primes = sorted_primes();
    assert_eq!(binary_search_in(&primes, &primes[7], 5..12), Ok(7));
}

#[rstest]
fn key_outside_the_window_is_not_found() {
    let primes = sorted_primes();
    // Index 0 holds the key, but the window starts at 4.
    assert_eq!(
        binary_search_in(&primes, &primes[0], 4..primes.len()),
        Err(SearchError::KeyNotFound)
    );
}

// =============================================================================
// Unsorted Rejection
// =============================================================================

#[rstest]
fn unsorted_input_is_rejected_for_any_key() {
    let unsorted = vec![11, 59, 3, 2, 53];
    for key in [11, 59, 3, 1000] {
        assert_eq!(
            binary_search(&unsorted, &key),
            Err(SearchError::UnsortedInput)
        );
    }
}

#[rstest]
fn unsorted_input_is_rejected_even_for_an_empty_window() {
    // The sortedness precondition is checked before window exhaustion.
    let unsorted = vec![3, 1, 2];
    assert_eq!(
        binary_search_in(&unsorted, &1, 0..0),
        Err(SearchError::UnsortedInput)
    );
}

#[rstest]
fn single_descending_pair_is_rejected() {
    assert_eq!(binary_search(&[2, 1], &1), Err(SearchError::UnsortedInput));
}

// =============================================================================
// Duplicate Keys
// =============================================================================

#[rstest]
fn duplicate_key_returns_some_matching_index() {
    let collection = vec![1, 3, 3, 3, 3, 5, 9];
    // Which occurrence is found is unspecified; only element equality holds.
    let index = binary_search(&collection, &3).expect("key is present");
    assert_eq!(collection[index], 3);
}

#[rstest]
fn all_equal_collection_returns_a_valid_index() {
    let collection = vec![7; 16];
    let index = binary_search(&collection, &7).expect("key is present");
    assert!(index < collection.len());
}

// =============================================================================
// Sortedness Helper
// =============================================================================

#[rstest]
#[case(vec![], true)]
#[case(vec![1], true)]
#[case(vec![1, 1, 2, 3], true)]
#[case(vec![1, 2, 3, 2], false)]
#[case(vec![2, 1], false)]
fn is_sorted_checks_adjacent_pairs(#[case] collection: Vec<i32>, #[case] expected: bool) {
    assert_eq!(is_sorted(&collection), expected);
}

#[rstest]
fn search_never_mutates_its_input() {
    let primes = sorted_primes();
    let snapshot = primes.clone();

    let _ = binary_search(&primes, &43);
    let _ = binary_search(&primes, &42);

    assert_eq!(primes, snapshot);
}

#[rstest]
fn search_error_messages_name_the_failure() {
    assert_eq!(
        SearchError::UnsortedInput.to_string(),
        "collection is not sorted in non-decreasing order"
    );
    assert_eq!(
        SearchError::KeyNotFound.to_string(),
        "search key is not present in the searched range"
    );
}
