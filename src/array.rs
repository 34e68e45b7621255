//! Suffix array over an arbitrary element sequence.
//!
//! Construction uses Manber's rank-doubling sort:
//! 1. Sort suffix descriptors by their first element and assign dense ranks
//! 2. Pair each rank with the rank of the suffix one shift further along
//! 3. Re-sort by the rank pair, re-rank, double the shift
//! 4. Stop once every suffix holds a distinct rank
//!
//! The result is a permutation of the text's offsets in ascending
//! lexicographic order of the suffixes starting there, searchable in
//! O(M log N) per pattern and convertible to a longest-common-prefix
//! array in O(N) with Kasai's algorithm.

use crate::error::CapacityError;
use crate::policy::{Equal, Equivalence, NaturalOrder, Order};
use crate::width::TextIndex;

/// Sorted index of every suffix of an owned text.
///
/// `S` is the offset type and bounds the indexable text length; `C` is the
/// ordering policy applied to elements. Built once at construction and
/// immutable afterward. "Not found" is uniformly reported as
/// [`size`](Self::size), one past the last valid offset.
#[derive(Debug, Clone)]
pub struct SuffixArray<T, S = usize, C = NaturalOrder> {
    /// Owned copy of the indexed text.
    text: Vec<T>,
    /// Suffix offsets in ascending lexicographic order.
    order: Vec<S>,
    /// Element ordering policy.
    cmp: C,
}

/// Construction-time suffix descriptor: an offset plus its current rank
/// pair, dense ranks starting at 1 with 0 reserved for "past the end".
#[derive(Clone, Copy)]
struct Suffix<S> {
    pos: S,
    rank: (S, S),
}

impl<T, S: TextIndex, C: Order<T>> SuffixArray<T, S, C> {
    /// Index `text` with the default ordering policy.
    ///
    /// Fails when the text is longer than `S` can address.
    pub fn new(text: impl IntoIterator<Item = T>) -> Result<Self, CapacityError>
    where
        C: Default,
    {
        Self::with_order(text, C::default())
    }

    /// Index `text`, ordering elements with `cmp`.
    pub fn with_order(
        text: impl IntoIterator<Item = T>,
        cmp: C,
    ) -> Result<Self, CapacityError> {
        let text: Vec<T> = text.into_iter().collect();
        if text.len() > S::MAX {
            return Err(CapacityError {
                len: text.len(),
                max: S::MAX,
            });
        }
        let order = sorted_order(&text, &cmp);
        Ok(Self { text, order, cmp })
    }

    /// Typed text length; doubles as the not-found sentinel.
    #[inline]
    pub fn size(&self) -> S {
        S::from_usize(self.text.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The indexed text.
    #[inline]
    pub fn text(&self) -> &[T] {
        &self.text
    }

    /// Offset of the `nth` suffix in lexicographic order.
    #[inline]
    pub fn nth_element(&self, nth: S) -> S {
        self.order[nth.to_usize()]
    }

    /// Offset of the first occurrence of `pattern` in suffix-rank order,
    /// or [`size`](Self::size) when the pattern does not occur.
    pub fn find(&self, pattern: &[T]) -> S {
        match self.find_all(pattern).first() {
            Some(&pos) => pos,
            None => self.size(),
        }
    }

    /// Every occurrence of `pattern`, as the matching subrange of the
    /// suffix order (suffix-rank order, not text order).
    ///
    /// The range is narrowed one pattern element at a time with a pair of
    /// binary searches. A suffix that runs out of text mid-pattern compares
    /// lexicographically smallest, so a pattern extending past the end of
    /// the text never matches.
    pub fn find_all(&self, pattern: &[T]) -> &[S] {
        let n = self.text.len();
        let mut lo = 0;
        let mut hi = self.order.len();
        for (i, value) in pattern.iter().enumerate() {
            let range = &self.order[lo..hi];
            let first = range.partition_point(|&suf| {
                let pos = suf.to_usize() + i;
                pos >= n || self.cmp.less(&self.text[pos], value)
            });
            let last = range.partition_point(|&suf| {
                let pos = suf.to_usize() + i;
                pos >= n || !self.cmp.less(value, &self.text[pos])
            });
            hi = lo + last;
            lo += first;
            if lo == hi {
                break;
            }
        }
        &self.order[lo..hi]
    }

    /// Kasai's algorithm: fill `prefixes[i]` with the length of the longest
    /// common prefix of the `i`-th and `i+1`-th suffixes in lexicographic
    /// order (the last entry is 0).
    ///
    /// `prefixes` must be exactly as long as the text. Amortized O(N): the
    /// text-order walk reuses all but one element of the previous count.
    pub fn longest_common_prefix_array(&self, prefixes: &mut [S]) {
        let n = self.text.len();
        assert_eq!(prefixes.len(), n, "prefix buffer length must equal text length");
        let eq = Equivalence(&self.cmp);
        let mut inverse = vec![0; n];
        for (rank, suf) in self.order.iter().enumerate() {
            inverse[suf.to_usize()] = rank;
        }
        let mut lcp = 0;
        for pos in 0..n {
            let rank = inverse[pos];
            if rank + 1 == n {
                prefixes[rank] = S::from_usize(0);
                lcp = 0;
                continue;
            }
            let next = self.order[rank + 1].to_usize();
            while pos + lcp < n && next + lcp < n && eq.equal(&self.text[pos + lcp], &self.text[next + lcp])
            {
                lcp += 1;
            }
            prefixes[rank] = S::from_usize(lcp);
            lcp = lcp.saturating_sub(1);
        }
    }
}

/// Rank-doubling construction over a borrowed text.
fn sorted_order<T, S: TextIndex, C: Order<T>>(text: &[T], cmp: &C) -> Vec<S> {
    let n = text.len();
    let mut sufs: Vec<Suffix<S>> = (0..n)
        .map(|pos| Suffix {
            pos: S::from_usize(pos),
            rank: (S::from_usize(0), S::from_usize(0)),
        })
        .collect();
    if n > 0 {
        let value = |suf: &Suffix<S>| &text[suf.pos.to_usize()];
        sufs.sort_unstable_by(|l, r| cmp.ordering(value(l), value(r)));
        let mut done = fill_first_rank(&mut sufs, |l, r| cmp.less(value(l), value(r)));
        let mut ranks = vec![S::from_usize(0); n];
        let mut shift = 1;
        while !done {
            fill_second_rank(&mut sufs, &mut ranks, shift);
            sufs.sort_unstable_by(|l, r| l.rank.cmp(&r.rank));
            done = fill_first_rank(&mut sufs, |l, r| l.rank < r.rank);
            shift *= 2;
        }
    }
    sufs.iter().map(|suf| suf.pos).collect()
}

/// Assign dense first ranks under the given key ordering. Equal keys share
/// a rank; each strict step increments it. Returns whether every suffix
/// now holds a distinct rank, which ends the doubling rounds.
fn fill_first_rank<S: TextIndex>(
    sufs: &mut [Suffix<S>],
    less: impl Fn(&Suffix<S>, &Suffix<S>) -> bool,
) -> bool {
    let mut uniq = 1;
    for i in 1..sufs.len() {
        let step = less(&sufs[i - 1], &sufs[i]);
        sufs[i - 1].rank.0 = S::from_usize(uniq);
        if step {
            uniq += 1;
        }
    }
    if let Some(last) = sufs.last_mut() {
        last.rank.0 = S::from_usize(uniq);
    }
    uniq == sufs.len()
}

/// Pair each suffix with the first rank of the suffix `shift` positions
/// further along, or rank 0 past the end of the text.
fn fill_second_rank<S: TextIndex>(sufs: &mut [Suffix<S>], ranks: &mut [S], shift: usize) {
    for suf in sufs.iter() {
        ranks[suf.pos.to_usize()] = suf.rank.0;
    }
    for suf in sufs.iter_mut() {
        let next = suf.pos.to_usize() + shift;
        suf.rank.1 = if next < ranks.len() {
            ranks[next]
        } else {
            S::from_usize(0)
        };
    }
}
