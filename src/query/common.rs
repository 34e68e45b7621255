//! Longest common substring of two texts.
//!
//! Both texts are indexed as one concatenation. The suffix array backend
//! scans adjacent rank pairs whose suffixes start on opposite sides of
//! the seam, clamping the shared prefix at the first text's end. The
//! suffix tree backend marks every internal node with the origins of the
//! leaves below it and keeps the deepest node owning leaves from both
//! sides.
//!
//! The tree backend requires each text to end with its own element that
//! occurs nowhere else, such as `#` and `$` for byte texts. Without the
//! terminators a shared prefix can remain latent on an edge and the seam
//! clamp has nothing to cut at, so matches may leak across the texts.
//! The returned slice always borrows from the first text.

use crate::array::SuffixArray;
use crate::policy::{NaturalOrder, Order};
use crate::tree::{EdgeMap, EdgeTarget, HashedEdges, SortedEdges, SuffixTree};
use crate::width::{TextIndex, WidthSearcher, with_narrowest_index};
use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Longest substring shared by `first` and `second`, via a suffix array
/// over the element type's natural order.
pub fn find_with_suffix_array<'a, T: Ord + Clone>(first: &'a [T], second: &[T]) -> &'a [T] {
    find_with_suffix_array_by(first, second, NaturalOrder)
}

/// Suffix array backend with a caller-chosen ordering policy.
pub fn find_with_suffix_array_by<'a, T: Clone, C: Order<T>>(
    first: &'a [T],
    second: &[T],
    cmp: C,
) -> &'a [T] {
    let searcher = ArraySearcher { first, second, cmp };
    with_narrowest_index(first.len() + second.len(), searcher)
}

/// Longest substring shared by `first` and `second`, via a suffix tree
/// with hashed edge containers. Both texts must carry unique terminators.
pub fn find_with_suffix_tree<'a, T: Clone + Eq + Hash>(first: &'a [T], second: &[T]) -> &'a [T] {
    let searcher = HashedTreeSearcher { first, second };
    with_narrowest_index(first.len() + second.len(), searcher)
}

/// Suffix tree backend branching through sorted edge containers ordered
/// by the policy `C`. Both texts must carry unique terminators.
pub fn find_with_suffix_tree_by<'a, C, T>(first: &'a [T], second: &[T]) -> &'a [T]
where
    T: Clone,
    C: Order<T> + Default,
{
    let searcher = SortedTreeSearcher { first, second, cmp: PhantomData::<C> };
    with_narrowest_index(first.len() + second.len(), searcher)
}

struct ArraySearcher<'a, 'b, T, C> {
    first: &'a [T],
    second: &'b [T],
    cmp: C,
}

impl<'a, 'b, T: Clone, C: Order<T>> WidthSearcher for ArraySearcher<'a, 'b, T, C> {
    type Output = &'a [T];

    fn search_with<S: TextIndex>(self) -> &'a [T] {
        let size1 = self.first.len();
        let elements = self.first.iter().chain(self.second).cloned();
        let Ok(arr) = SuffixArray::<T, S, C>::with_order(elements, self.cmp) else {
            return &self.first[..0];
        };
        let n = arr.text().len();
        let mut lcp = vec![S::from_usize(0); n];
        arr.longest_common_prefix_array(&mut lcp);
        let mut best = (0usize, 0usize);
        for i in 1..n {
            let prev = arr.nth_element(S::from_usize(i - 1)).to_usize();
            let cur = arr.nth_element(S::from_usize(i)).to_usize();
            if (prev < size1) != (cur < size1) {
                let pos = prev.min(cur);
                let len = lcp[i - 1].to_usize().min(size1 - pos);
                if len > best.1 {
                    best = (pos, len);
                }
            }
        }
        &self.first[best.0..best.0 + best.1]
    }
}

struct HashedTreeSearcher<'a, 'b, T> {
    first: &'a [T],
    second: &'b [T],
}

impl<'a, 'b, T: Clone + Eq + Hash> WidthSearcher for HashedTreeSearcher<'a, 'b, T> {
    type Output = &'a [T];

    fn search_with<S: TextIndex>(self) -> &'a [T] {
        let (start, len) = deepest_shared::<T, S, HashedEdges<T, S>>(self.first, self.second);
        &self.first[start..start + len]
    }
}

struct SortedTreeSearcher<'a, 'b, T, C> {
    first: &'a [T],
    second: &'b [T],
    cmp: PhantomData<C>,
}

impl<'a, 'b, T: Clone, C: Order<T> + Default> WidthSearcher for SortedTreeSearcher<'a, 'b, T, C> {
    type Output = &'a [T];

    fn search_with<S: TextIndex>(self) -> &'a [T] {
        let (start, len) = deepest_shared::<T, S, SortedEdges<T, S, C>>(self.first, self.second);
        &self.first[start..start + len]
    }
}

/// Start and length, within the first text, of the deepest path whose
/// subtree holds leaves of both texts.
fn deepest_shared<T: Clone, S: TextIndex, M: EdgeMap<T, S>>(
    first: &[T],
    second: &[T],
) -> (usize, usize) {
    let mut tree = SuffixTree::<T, S, M>::new();
    if tree.try_extend(first.iter().cloned()).is_err()
        || tree.try_extend(second.iter().cloned()).is_err()
    {
        return (0, 0);
    }
    let size1 = first.len();
    // Origin bits per internal node: 1 for first-text leaves below it,
    // 2 for second-text leaves.
    let mut origins: HashMap<usize, u8, RandomState> = HashMap::default();
    tree.visit(
        |edge| {
            if edge.child.is_leaf() {
                let bit = if tree.path_range(edge).0.to_usize() < size1 { 1u8 } else { 2 };
                *origins.entry(edge.parent.to_usize()).or_insert(0) |= bit;
            }
        },
        |_| {},
    );
    let mut best = (0usize, 0usize);
    tree.visit(
        |_| {},
        |edge| {
            if let EdgeTarget::Internal(node) = edge.child {
                let below = origins.get(&node.to_usize()).copied().unwrap_or(0);
                *origins.entry(edge.parent.to_usize()).or_insert(0) |= below;
                if below == 3 && edge.path.to_usize() > best.1 {
                    let (lo, hi) = tree.path_range(edge);
                    best = (lo.to_usize(), hi.to_usize() - lo.to_usize());
                }
            }
        },
    );
    best
}
