//! Swap-and-restart insertion sort.

use crate::control::Trampoline;

/// Sorts a copy of the slice into non-decreasing order.
///
/// The caller's slice is never mutated; the sort operates on an owned
/// working copy and returns it. The output is a permutation of the input
/// satisfying `a <= b` for every adjacent pair. Elements that are never
/// swapped keep their relative positions; stability beyond that is not
/// guaranteed.
///
/// Each recursive pass scans positions `1..n` in increasing order, swaps
/// the first adjacent pair found out of order, and restarts the scan on
/// the swapped copy. One adjacent transposition is fixed per pass, so
/// the worst case (a reverse-sorted input) takes O(n²) comparisons and
/// swaps. The restart recursion is evaluated through
/// [`Trampoline`](crate::control::Trampoline), which is where the
/// `'static` bound comes from; the pass count equals the number of
/// adjacent inversions, and a plainly recursive evaluation would exhaust
/// the stack on large reversed inputs.
///
/// # Examples
///
/// ```rust
/// use ordseq::sort::insertion_sort;
///
/// assert_eq!(insertion_sort(&[3, 1, 2]), vec![1, 2, 3]);
/// assert_eq!(insertion_sort::<i32>(&[]), Vec::new());
/// assert_eq!(insertion_sort(&[7]), vec![7]);
/// ```
pub fn insertion_sort<T>(collection: &[T]) -> Vec<T>
where
    T: Ord + Clone + 'static,
{
    bubble_pass(collection.to_vec()).run()
}

/// One pass of the swap-and-restart recursion.
///
/// Owns the working copy: the defensive copy happens once at the public
/// entry point, and each pass hands the same buffer to the next.
fn bubble_pass<T>(mut working: Vec<T>) -> Trampoline<Vec<T>>
where
    T: Ord + 'static,
{
    for idx in 1..working.len() {
        if working[idx] < working[idx - 1] {
            working.swap(idx, idx - 1);
            return Trampoline::suspend(move || bubble_pass(working));
        }
    }

    // No adjacent inversion found, so the copy is sorted.
    Trampoline::done(working)
}
