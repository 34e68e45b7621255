//! Longest repeated substring.
//!
//! A substring repeats iff two suffixes share it as a prefix, so the
//! answer is either the largest entry of the suffix array's adjacent-LCP
//! table or the deepest internal node of the suffix tree. Both backends
//! return an empty slice when nothing repeats, and both run through
//! [`with_narrowest_index`] so short texts are indexed with narrow
//! positions.

use crate::array::SuffixArray;
use crate::policy::{NaturalOrder, Order};
use crate::tree::{EdgeMap, HashedEdges, SortedEdges, SuffixTree};
use crate::width::{TextIndex, WidthSearcher, with_narrowest_index};
use std::hash::Hash;
use std::marker::PhantomData;

/// Longest substring of `text` occurring at least twice, via a suffix
/// array over the element type's natural order.
pub fn find_with_suffix_array<T: Ord + Clone>(text: &[T]) -> &[T] {
    find_with_suffix_array_by(text, NaturalOrder)
}

/// Suffix array backend with a caller-chosen ordering policy.
pub fn find_with_suffix_array_by<T: Clone, C: Order<T>>(text: &[T], cmp: C) -> &[T] {
    with_narrowest_index(text.len(), ArraySearcher { text, cmp })
}

/// Longest substring of `text` occurring at least twice, via a suffix
/// tree with hashed edge containers.
pub fn find_with_suffix_tree<T: Clone + Eq + Hash>(text: &[T]) -> &[T] {
    with_narrowest_index(text.len(), HashedTreeSearcher { text })
}

/// Suffix tree backend branching through sorted edge containers ordered
/// by the policy `C`, for element types that are not hashable or that
/// need a non-natural equality.
pub fn find_with_suffix_tree_by<C, T>(text: &[T]) -> &[T]
where
    T: Clone,
    C: Order<T> + Default,
{
    with_narrowest_index(text.len(), SortedTreeSearcher { text, cmp: PhantomData::<C> })
}

struct ArraySearcher<'a, T, C> {
    text: &'a [T],
    cmp: C,
}

impl<'a, T: Clone, C: Order<T>> WidthSearcher for ArraySearcher<'a, T, C> {
    type Output = &'a [T];

    fn search_with<S: TextIndex>(self) -> &'a [T] {
        let Ok(arr) = SuffixArray::<T, S, C>::with_order(self.text.iter().cloned(), self.cmp)
        else {
            return &self.text[self.text.len()..];
        };
        let mut lcp = vec![S::from_usize(0); self.text.len()];
        arr.longest_common_prefix_array(&mut lcp);
        let mut best = (0usize, 0usize);
        for (i, len) in lcp.iter().enumerate() {
            if len.to_usize() > best.1 {
                best = (arr.nth_element(S::from_usize(i)).to_usize(), len.to_usize());
            }
        }
        &self.text[best.0..best.0 + best.1]
    }
}

struct HashedTreeSearcher<'a, T> {
    text: &'a [T],
}

impl<'a, T: Clone + Eq + Hash> WidthSearcher for HashedTreeSearcher<'a, T> {
    type Output = &'a [T];

    fn search_with<S: TextIndex>(self) -> &'a [T] {
        let (start, len) = deepest_repeated::<T, S, HashedEdges<T, S>>(self.text);
        &self.text[start..start + len]
    }
}

struct SortedTreeSearcher<'a, T, C> {
    text: &'a [T],
    cmp: PhantomData<C>,
}

impl<'a, T: Clone, C: Order<T> + Default> WidthSearcher for SortedTreeSearcher<'a, T, C> {
    type Output = &'a [T];

    fn search_with<S: TextIndex>(self) -> &'a [T] {
        let (start, len) = deepest_repeated::<T, S, SortedEdges<T, S, C>>(self.text);
        &self.text[start..start + len]
    }
}

/// Start and length of the deepest internal path, which is spelled by
/// every edge walk reaching a branch point.
fn deepest_repeated<T: Clone, S: TextIndex, M: EdgeMap<T, S>>(text: &[T]) -> (usize, usize) {
    let Ok(tree) = SuffixTree::<T, S, M>::from_elements(text.iter().cloned()) else {
        return (0, 0);
    };
    let mut best = (0usize, 0usize);
    tree.visit(
        |_| {},
        |edge| {
            if edge.path.to_usize() > best.1 {
                let (first, last) = tree.path_range(edge);
                best = (first.to_usize(), last.to_usize() - first.to_usize());
            }
        },
    );
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeats_found_by_both_backends() {
        assert_eq!(find_with_suffix_array(b"banana$"), b"ana");
        assert_eq!(find_with_suffix_tree(b"banana$"), b"ana");
        assert_eq!(find_with_suffix_array(b"abcabcaacb$"), b"abca");
        assert_eq!(find_with_suffix_tree(b"abcabcaacb$"), b"abca");
    }

    #[test]
    fn test_no_repetition_yields_an_empty_slice() {
        assert_eq!(find_with_suffix_array(b"ABCDEFG$"), b"");
        assert_eq!(find_with_suffix_tree(b"ABCDEFG$"), b"");
        assert_eq!(find_with_suffix_array(b""), b"");
        assert_eq!(find_with_suffix_tree(b""), b"");
    }

    #[derive(Debug, Default, Clone, Copy)]
    struct CaseFold;

    impl Order<u8> for CaseFold {
        fn less(&self, lhs: &u8, rhs: &u8) -> bool {
            lhs.to_ascii_lowercase() < rhs.to_ascii_lowercase()
        }
    }

    #[test]
    fn test_policy_backends_fold_case() {
        assert_eq!(find_with_suffix_array_by(b"aBcAbCx$", CaseFold), b"aBc");
        assert_eq!(find_with_suffix_tree_by::<CaseFold, u8>(b"aBcAbCx$"), b"aBc");
    }
}
