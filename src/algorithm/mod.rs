#[cfg(test)]
mod tests;

use crate::{Character, Error, IndexStorage, Result};

use num_traits::NumCast;

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Sequential,
    #[cfg(feature = "parallel")]
    Parallel,
}

// a suffix of the augmented text. only the view is carried, the symbols stay in the shared buffer
#[derive(Debug, Clone, Copy)]
pub struct Suffix<'a, C> {
    pub start: usize,
    pub chars: &'a [C],
}

// expects suffix array buffer to be of the same length as text + 1 (space for the sentinel suffix)
pub fn naive_suffix_sort<C: Character, I: IndexStorage>(
    text: &[C],
    sentinel: C,
    sort_mode: SortMode,
    suffix_array_buffer: &mut [I],
) -> Result<()> {
    validate_text(text, sentinel)?;

    let augmented_text = append_sentinel(text, sentinel);

    let mut suffixes = enumerate_suffixes(&augmented_text);

    sort_suffixes(&mut suffixes, sort_mode);

    project_start_indices(&suffixes, suffix_array_buffer)
}

// every symbol must sort strictly after the sentinel, otherwise the sentinel suffix is not the unique minimum
pub fn validate_text<C: Character>(text: &[C], sentinel: C) -> Result<()> {
    let offending = text
        .iter()
        .enumerate()
        .find(|&(_, &char)| char <= sentinel);

    match offending {
        None => Ok(()),
        Some((position, &char)) if char == sentinel => Err(Error::SentinelCollision { position }),
        Some((position, _)) => Err(Error::SymbolBelowSentinel { position }),
    }
}

pub fn append_sentinel<C: Character>(text: &[C], sentinel: C) -> Vec<C> {
    let mut augmented_text = Vec::with_capacity(text.len() + 1);
    augmented_text.extend_from_slice(text);
    augmented_text.push(sentinel);
    augmented_text
}

pub fn enumerate_suffixes<C>(augmented_text: &[C]) -> Vec<Suffix<'_, C>> {
    (0..augmented_text.len())
        .map(|start| Suffix {
            start,
            chars: &augmented_text[start..],
        })
        .collect()
}

/// Compares two suffixes symbol by symbol.
///
/// At the first differing position the smaller symbol decides. If one suffix is a prefix of
/// the other, the shorter one sorts first. A single comparison costs *O*(min(|a|, |b|)).
pub fn compare_suffixes<C: Ord>(first: &[C], second: &[C]) -> Ordering {
    for (first_char, second_char) in first.iter().zip(second) {
        match first_char.cmp(second_char) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }

    first.len().cmp(&second.len())
}

pub fn sort_suffixes<C: Character>(suffixes: &mut [Suffix<'_, C>], sort_mode: SortMode) {
    match sort_mode {
        SortMode::Sequential => {
            suffixes.sort_by(|first, second| compare_suffixes(first.chars, second.chars))
        }
        #[cfg(feature = "parallel")]
        SortMode::Parallel => {
            use rayon::slice::ParallelSliceMut;

            suffixes.par_sort_by(|first, second| compare_suffixes(first.chars, second.chars))
        }
    }
}

pub fn project_start_indices<C, I: IndexStorage>(
    sorted_suffixes: &[Suffix<'_, C>],
    suffix_array_buffer: &mut [I],
) -> Result<()> {
    for (suffix, entry) in sorted_suffixes.iter().zip(suffix_array_buffer.iter_mut()) {
        *entry = <I as NumCast>::from(suffix.start).ok_or(Error::IndexOverflow {
            len: sorted_suffixes.len(),
            max: index_max::<I>(),
        })?;
    }

    Ok(())
}

pub fn index_max<I: IndexStorage>() -> usize {
    <usize as NumCast>::from(I::max_value()).unwrap_or(usize::MAX)
}
