use std::{cell::Cell, sync::LazyLock};

use super::*;
use crate::text;

// suffixes of banana$ in sorted order:
// $, a$, ana$, anana$, banana$, na$, nana$
static BANANA_TEXT: &[u8] = b"banana";
static BANANA_AUGMENTED_TEXT: LazyLock<Vec<u8>> =
    LazyLock::new(|| append_sentinel(BANANA_TEXT, b'$'));
static BANANA_EXPECTED_SUFFIX_ARRAY: &[usize] = &[6, 5, 3, 1, 0, 4, 2];

#[test]
fn test_append_sentinel_banana() {
    assert_eq!(&*BANANA_AUGMENTED_TEXT, b"banana$");
    assert_eq!(append_sentinel::<u8>(&[], 0), [0]);
}

#[test]
fn test_enumerate_suffixes_banana() {
    let suffixes = enumerate_suffixes(BANANA_AUGMENTED_TEXT.as_slice());

    assert_eq!(suffixes.len(), 7);

    for (index, suffix) in suffixes.iter().enumerate() {
        assert_eq!(suffix.start, index);
        assert_eq!(suffix.chars, &BANANA_AUGMENTED_TEXT[index..]);
    }

    assert_eq!(suffixes[6].chars, b"$");
}

#[test]
fn test_compare_suffixes() {
    assert_eq!(compare_suffixes(b"ana$", b"anana$"), Ordering::Less);
    assert_eq!(compare_suffixes(b"na$", b"a$"), Ordering::Greater);
    assert_eq!(compare_suffixes(b"$", b"a$"), Ordering::Less);
    assert_eq!(compare_suffixes(b"abc", b"abc"), Ordering::Equal);

    // prefix sorts first
    assert_eq!(compare_suffixes(b"aa", b"aaa"), Ordering::Less);
    assert_eq!(compare_suffixes(b"aaa", b"aa"), Ordering::Greater);
    assert_eq!(compare_suffixes::<u8>(b"", b"a"), Ordering::Less);
}

#[test]
fn test_sort_suffixes_and_project_banana() {
    let mut suffixes = enumerate_suffixes(BANANA_AUGMENTED_TEXT.as_slice());
    sort_suffixes(&mut suffixes, SortMode::Sequential);

    let sorted_chars: Vec<_> = suffixes.iter().map(|suffix| suffix.chars).collect();
    let expected_chars: [&[u8]; 7] = [
        b"$", b"a$", b"ana$", b"anana$", b"banana$", b"na$", b"nana$",
    ];
    assert_eq!(sorted_chars, expected_chars);

    let mut suffix_array_buffer = vec![usize::MAX; suffixes.len()];
    project_start_indices(&suffixes, &mut suffix_array_buffer).unwrap();

    assert_eq!(suffix_array_buffer, BANANA_EXPECTED_SUFFIX_ARRAY);
}

#[test]
fn test_naive_suffix_sort_banana() {
    let mut suffix_array_buffer = vec![u32::MAX; BANANA_TEXT.len() + 1];

    naive_suffix_sort(BANANA_TEXT, b'$', SortMode::Sequential, &mut suffix_array_buffer).unwrap();

    assert_eq!(suffix_array_buffer, [6, 5, 3, 1, 0, 4, 2]);
}

#[test]
fn test_validate_text() {
    assert!(validate_text(BANANA_TEXT, b'$').is_ok());
    assert!(validate_text::<u8>(&[], 0).is_ok());

    assert!(matches!(
        validate_text(b"ban$na$", b'$'),
        Err(Error::SentinelCollision { position: 3 })
    ));
    assert!(matches!(
        validate_text(b"ban na", b'$'),
        Err(Error::SymbolBelowSentinel { position: 3 })
    ));
    assert!(matches!(
        validate_text(b"banana\0", 0),
        Err(Error::SentinelCollision { position: 6 })
    ));
}

#[test]
fn test_project_start_indices_overflow() {
    let augmented_text = vec![1u8; 70_000];
    let suffixes = enumerate_suffixes(&augmented_text);
    let mut suffix_array_buffer = vec![0u16; 70_000];

    assert!(matches!(
        project_start_indices(&suffixes, &mut suffix_array_buffer),
        Err(Error::IndexOverflow { len: 70_000, max: 65_535 })
    ));

    assert_eq!(index_max::<u16>(), u16::MAX as usize);
    assert_eq!(index_max::<usize>(), usize::MAX);
}

thread_local! {
    static SYMBOL_COMPARISONS: Cell<usize> = const { Cell::new(0) };
}

// counts every symbol comparison done by the comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CountingChar(u8);

impl Ord for CountingChar {
    fn cmp(&self, other: &Self) -> Ordering {
        SYMBOL_COMPARISONS.with(|count| count.set(count.get() + 1));
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for CountingChar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Character for CountingChar {
    fn min_char() -> Self {
        CountingChar(0)
    }
}

fn count_symbol_comparisons(text: &[u8]) -> usize {
    let text: Vec<_> = text.iter().map(|&char| CountingChar(char)).collect();
    let augmented_text = append_sentinel(&text, CountingChar::min_char());
    let mut suffixes = enumerate_suffixes(&augmented_text);

    SYMBOL_COMPARISONS.with(|count| count.set(0));
    sort_suffixes(&mut suffixes, SortMode::Sequential);
    SYMBOL_COMPARISONS.with(|count| count.get())
}

#[test]
fn test_comparator_cost_repeated_vs_random_text() {
    const LEN: usize = 1_000;

    let repeated_comparisons = count_symbol_comparisons(&text::repeated_symbol_text(b'a', LEN));
    let random_comparisons = count_symbol_comparisons(
        &text::random_text(LEN, text::DNA_ALPHABET, 0x0DDB1A5E5BAD5EED).unwrap(),
    );

    // every pair of neighbouring suffixes of a^n$ shares a prefix as long as the shorter suffix
    assert!(repeated_comparisons >= LEN * (LEN - 1) / 2);
    assert!(
        repeated_comparisons > 10 * random_comparisons,
        "{repeated_comparisons} vs {random_comparisons}"
    );
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_sort_matches_sequential() {
    let text: Vec<u8> = (0..2_000u32).map(|index| b'a' + (index * 7 % 3) as u8).collect();
    let augmented_text = append_sentinel(&text, 0);

    let mut sequential = enumerate_suffixes(&augmented_text);
    let mut parallel = sequential.clone();

    sort_suffixes(&mut sequential, SortMode::Sequential);
    sort_suffixes(&mut parallel, SortMode::Parallel);

    let sequential: Vec<_> = sequential.iter().map(|suffix| suffix.start).collect();
    let parallel: Vec<_> = parallel.iter().map(|suffix| suffix.start).collect();

    assert_eq!(sequential, parallel);
}
