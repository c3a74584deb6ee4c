mod algorithm;
mod error;
pub mod text;
pub mod verify;

use std::marker::PhantomData;

use num_traits::{AsPrimitive, PrimInt};

use algorithm::SortMode;

pub use algorithm::compare_suffixes;
pub use error::{Error, Result};

pub trait Character: Sized + Copy + Ord + Send + Sync {
    fn min_char() -> Self;
}

impl<P: PrimInt + Send + Sync> Character for P {
    fn min_char() -> Self {
        P::min_value()
    }
}

pub trait IndexStorage: PrimInt + AsPrimitive<usize> + Send + Sync {}

impl IndexStorage for u16 {}
impl IndexStorage for u32 {}
impl IndexStorage for u64 {}
impl IndexStorage for usize {}

/// Builds the suffix array of a byte text, terminated by a `0` sentinel.
///
/// The result has `text.len() + 1` entries, the first one always being the offset of the
/// sentinel suffix.
///
/// ```
/// let suffix_array = naive_sa::build("banana").unwrap();
/// assert_eq!(suffix_array, [6, 5, 3, 1, 0, 4, 2]);
/// ```
pub fn build(text: impl AsRef<[u8]>) -> Result<Vec<usize>> {
    SuffixArrayBuilder::<u8, usize>::new().construct_suffix_array(text.as_ref())
}

pub struct SuffixArrayBuilder<C = u8, I = usize> {
    sentinel: Option<C>,
    sort_mode: SortMode,
    _marker: PhantomData<I>,
}

impl<C: Character, I: IndexStorage> SuffixArrayBuilder<C, I> {
    pub fn new() -> Self {
        Self {
            sentinel: None,
            sort_mode: SortMode::default(),
            _marker: PhantomData,
        }
    }

    /// Every symbol of the text has to be strictly greater than `sentinel`.
    pub fn with_sentinel(&mut self, sentinel: C) -> &mut Self {
        self.sentinel = Some(sentinel);
        self
    }

    #[cfg(feature = "parallel")]
    pub fn with_parallel_sort(&mut self, parallel: bool) -> &mut Self {
        self.sort_mode = if parallel {
            SortMode::Parallel
        } else {
            SortMode::Sequential
        };
        self
    }

    pub fn sentinel(&self) -> C {
        self.sentinel.unwrap_or(C::min_char())
    }

    pub fn construct_suffix_array_inplace(
        &self,
        text: &[C],
        suffix_array_buffer: &mut [I],
    ) -> Result<()> {
        let augmented_len = self.check_augmented_len(text)?;

        if suffix_array_buffer.len() < augmented_len {
            return Err(Error::BufferTooSmall {
                required: augmented_len,
                actual: suffix_array_buffer.len(),
            });
        }

        self.construct(text, &mut suffix_array_buffer[..augmented_len])
    }

    pub fn construct_suffix_array(&self, text: &[C]) -> Result<Vec<I>> {
        let augmented_len = self.check_augmented_len(text)?;
        let mut suffix_array_buffer = vec![I::max_value(); augmented_len];

        self.construct(text, &mut suffix_array_buffer)?;

        Ok(suffix_array_buffer)
    }

    fn construct(&self, text: &[C], suffix_array_buffer: &mut [I]) -> Result<()> {
        log::debug!(
            "constructing suffix array of {} suffixes ({:?})",
            suffix_array_buffer.len(),
            self.sort_mode
        );

        algorithm::naive_suffix_sort(text, self.sentinel(), self.sort_mode, suffix_array_buffer)
    }

    // the largest offset is text.len(), it has to be representable by I
    fn check_augmented_len(&self, text: &[C]) -> Result<usize> {
        let augmented_len = text.len() + 1;
        let max = algorithm::index_max::<I>();

        if text.len() > max {
            return Err(Error::IndexOverflow {
                len: augmented_len,
                max,
            });
        }

        Ok(augmented_len)
    }
}

impl<C: Character, I: IndexStorage> Default for SuffixArrayBuilder<C, I> {
    fn default() -> Self {
        Self::new()
    }
}
