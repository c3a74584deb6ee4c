//! Checks for the suffix array invariants.
//!
//! All functions take the *augmented* text, i.e. the text including its trailing sentinel.

use bitvec::prelude::*;

use std::cmp::Ordering;

use crate::{IndexStorage, compare_suffixes};

/// Returns `true` if `suffix_array` contains every offset of `[0, len)` exactly once.
pub fn is_permutation<I: IndexStorage>(suffix_array: &[I]) -> bool {
    let mut seen: BitVec = BitVec::repeat(false, suffix_array.len());

    for &suffix_index in suffix_array {
        let suffix_index = suffix_index.as_();

        if suffix_index >= seen.len() || seen[suffix_index] {
            return false;
        }

        seen.set(suffix_index, true);
    }

    true
}

/// Returns `true` if adjacent entries of `suffix_array` refer to non-decreasing suffixes.
///
/// Offsets outside of `augmented_text` make the check fail instead of panicking.
pub fn is_sorted_by_suffix<C: Ord, I: IndexStorage>(
    suffix_array: &[I],
    augmented_text: &[C],
) -> bool {
    suffix_array.windows(2).all(|suffix_indices| {
        let first = suffix_indices[0].as_();
        let second = suffix_indices[1].as_();

        match (augmented_text.get(first..), augmented_text.get(second..)) {
            (Some(first), Some(second)) => compare_suffixes(first, second) != Ordering::Greater,
            _ => false,
        }
    })
}

pub fn is_suffix_array<C: Ord, I: IndexStorage>(
    suffix_array: &[I],
    augmented_text: &[C],
) -> bool {
    suffix_array.len() == augmented_text.len()
        && is_permutation(suffix_array)
        && is_sorted_by_suffix(suffix_array, augmented_text)
}
