//! Index width selection.
//!
//! Offsets into the text dominate the memory of both structures, so the
//! integer type used for them matters at scale. [`TextIndex`] abstracts the
//! usable unsigned widths; [`with_narrowest_index`] picks the smallest width
//! able to address a given text length and runs a monomorphized search with
//! it. A text of a quarter million elements indexed with `u32` halves the
//! footprint of the same text indexed with `usize` on a 64-bit target.

/// Unsigned integer types usable as text offsets.
///
/// The chosen width bounds the indexable text length: an index type `S`
/// addresses at most [`MAX`](Self::MAX) elements, because the text length
/// doubles as the not-found sentinel and must itself be representable.
pub trait TextIndex: Copy + Ord + std::fmt::Debug {
    /// Largest addressable text length, widened to `usize`.
    const MAX: usize;

    /// Widen to `usize` for slice indexing.
    fn to_usize(self) -> usize;

    /// Narrow from `usize`. Callers must have checked `value <= Self::MAX`.
    fn from_usize(value: usize) -> Self;
}

macro_rules! impl_text_index {
    ($($int:ty),*) => {$(
        impl TextIndex for $int {
            const MAX: usize = <$int>::MAX as usize;

            #[inline]
            fn to_usize(self) -> usize {
                self as usize
            }

            #[inline]
            fn from_usize(value: usize) -> Self {
                value as $int
            }
        }
    )*};
}

impl_text_index!(u8, u16, u32, u64, usize);

/// A search routine that is generic over the index width.
///
/// Implementors carry their inputs in the struct and put the width-generic
/// body in [`search_with`](Self::search_with); [`with_narrowest_index`]
/// instantiates the body at the narrowest adequate width.
pub trait WidthSearcher {
    type Output;

    fn search_with<S: TextIndex>(self) -> Self::Output;
}

/// Run `searcher` with the narrowest index type able to address a text of
/// `len` elements.
///
/// Lengths up to `u8::MAX` dispatch `u8`, up to `u16::MAX` dispatch `u16`,
/// up to `u32::MAX` dispatch `u32`, anything larger `usize`.
pub fn with_narrowest_index<W: WidthSearcher>(len: usize, searcher: W) -> W::Output {
    if len <= u8::MAX as usize {
        searcher.search_with::<u8>()
    } else if len <= u16::MAX as usize {
        searcher.search_with::<u16>()
    } else if len <= u32::MAX as usize {
        searcher.search_with::<u32>()
    } else {
        searcher.search_with::<usize>()
    }
}
