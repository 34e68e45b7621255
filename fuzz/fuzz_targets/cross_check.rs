#![no_main]

use libfuzzer_sys::fuzz_target;
use sufx::array::SuffixArray;
use sufx::tree::{SortedEdges, SuffixTree};

fuzz_target!(|data: &[u8]| {
    // Differential check: both structures must enumerate the same suffix
    // order and the same occurrences for any text.
    let Some((&pattern_len, text)) = data.split_first() else { return };
    let mut text = text.to_vec();
    text.truncate(512);
    // Zero is reserved as the unique terminator the tree needs.
    text.retain(|&value| value != 0);
    text.push(0);

    let arr: SuffixArray<u8, u16> = SuffixArray::new(text.iter().copied()).unwrap();
    let tree: SuffixTree<u8, u16, SortedEdges<u8, u16>> =
        SuffixTree::from_elements(text.iter().copied()).unwrap();

    let order: Vec<u16> = (0..arr.size()).map(|nth| arr.nth_element(nth)).collect();
    let mut leaves = Vec::new();
    tree.visit(
        |edge| {
            if edge.child.is_leaf() {
                leaves.push(tree.path_range(edge).0);
            }
        },
        |_| {},
    );
    assert_eq!(order, leaves);

    let take = usize::from(pattern_len) % 8;
    let pattern: Vec<u8> = text.iter().copied().take(take).collect();
    let naive: Vec<u16> = text
        .windows(pattern.len().max(1))
        .enumerate()
        .filter(|(_, window)| *window == pattern.as_slice())
        .map(|(pos, _)| pos as u16)
        .collect();
    let mut arr_all = arr.find_all(&pattern).to_vec();
    let mut tree_all = tree.find_all(&pattern);
    arr_all.sort_unstable();
    tree_all.sort_unstable();
    if !pattern.is_empty() {
        assert_eq!(arr_all, naive);
    }
    assert_eq!(arr_all, tree_all);
    assert_eq!(
        arr.find(&pattern) == arr.size(),
        tree.find(&pattern) == tree.size()
    );
});
