//! In-place adjacent-swap sorting
//!
//! Repeated full passes of compare-and-swap over neighbouring elements. No
//! allocation; the element multiset is preserved.

use numsort_core::NumberSequence;

/// Sort `items` into non-decreasing order in place.
///
/// Each pass bubbles the largest remaining element to the end of the
/// unsorted prefix. A pass without swaps ends the sort early.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    if len < 2 {
        return;
    }

    for pass in 0..len - 1 {
        let mut swapped = false;
        for j in 0..len - 1 - pass {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sort the live elements of `sequence`. Length and capacity are unchanged.
pub fn sort_sequence(sequence: &mut NumberSequence) {
    bubble_sort(sequence.as_mut_slice());
}
