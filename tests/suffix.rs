//! Integration tests driving the suffix array and suffix tree together.
//!
//! The two structures answer the same queries through different machinery,
//! so most tests here run both and require agreement: fixed topology and
//! occurrence tables first, then randomized cross-checks.

use sufx::array::SuffixArray;
use sufx::tree::{SortedEdges, SuffixTree};

type ByteTree = SuffixTree<u8, usize, SortedEdges<u8, usize>>;

/// xorshift64 keeps the randomized suites reproducible.
struct XorShift64(u64);

impl XorShift64 {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn random_text(rng: &mut XorShift64, len: usize) -> Vec<u8> {
    const ALPHANUMERIC: &[u8] = b"0123456789\
        ABCDEFGHIJKLMNOPQRSTUVWXYZ\
        abcdefghijklmnopqrstuvwxyz";
    (0..len)
        .map(|_| ALPHANUMERIC[(rng.next() % ALPHANUMERIC.len() as u64) as usize])
        .collect()
}

/// Renders one edge per line, the label right-justified to its path depth,
/// leaf edges annotated with the suffix they terminate.
fn tree_topology(tree: &ByteTree) -> String {
    let mut out = String::new();
    tree.visit(
        |edge| {
            let (first, last) = tree.label(edge.child);
            let label = std::str::from_utf8(&tree.text()[first..last]).unwrap();
            out.push_str(&format!("{label:>width$}", width = edge.path));
            if edge.child.is_leaf() {
                let (occurrence, _) = tree.path_range(edge);
                out.push_str(&format!(" [{occurrence}]"));
            }
            out.push('\n');
        },
        |_| {},
    );
    out
}

fn suffix_array_order(arr: &SuffixArray<u8, u16>) -> Vec<u16> {
    (0..arr.size()).map(|nth| arr.nth_element(nth)).collect()
}

fn suffix_tree_order(tree: &SuffixTree<u8, u16, SortedEdges<u8, u16>>) -> Vec<u16> {
    let mut order = Vec::new();
    tree.visit(
        |edge| {
            if edge.child.is_leaf() {
                order.push(tree.path_range(edge).0);
            }
        },
        |_| {},
    );
    order
}

#[test]
fn test_suffix_tree_hello_world() {
    let text = b"use the quick find feature to search for a text";
    let tree: SuffixTree<u8> = SuffixTree::from_elements(text.iter().copied()).unwrap();
    assert_eq!(tree.find(b"quick"), 8);
}

#[test]
fn test_suffix_tree_topology() {
    let tests: [(&[u8], &str); 5] = [
        (b"", ""),
        (
            b"abcabxabcd$",
            r"
$ [10]
ab
  c
   abxabcd$ [0]
   d$ [6]
  xabcd$ [3]
b
 c
  abxabcd$ [1]
  d$ [7]
 xabcd$ [4]
c
 abxabcd$ [2]
 d$ [8]
d$ [9]
xabcd$ [5]
",
        ),
        (
            b"BANANA$",
            r"
$ [6]
A
 $ [5]
 NA
   $ [3]
   NA$ [1]
BANANA$ [0]
NA
  $ [4]
  NA$ [2]
",
        ),
        (
            b"VVuVVVOm$",
            r"
$ [8]
Om$ [6]
V
 Om$ [5]
 V
  Om$ [4]
  VOm$ [3]
  uVVVOm$ [0]
 uVVVOm$ [1]
m$ [7]
uVVVOm$ [2]
",
        ),
        (
            b"wwwJwww$",
            r"
$ [7]
Jwww$ [3]
w
 $ [6]
 Jwww$ [2]
 w
  $ [5]
  Jwww$ [1]
  w
   $ [4]
   Jwww$ [0]
",
        ),
    ];
    for (text, expect) in tests {
        let tree: ByteTree = SuffixTree::from_elements(text.iter().copied()).unwrap();
        assert_eq!(tree_topology(&tree), expect, "text {:?}", text);
    }
}

#[test]
fn test_suffix_array_and_tree_find() {
    let tests: [(&[u8], &[u8], &[usize]); 10] = [
        (b"GEEKSFORGEEKS$", b"GEEKS", &[0, 8]),
        (b"GEEKSFORGEEKS$", b"GEEK1", &[]),
        (b"GEEKSFORGEEKS$", b"FOR", &[5]),
        (b"AABAACAADAABAAABAA$", b"AABA", &[0, 9, 13]),
        (b"AABAACAADAABAAABAA$", b"AA", &[0, 3, 6, 9, 12, 13, 16]),
        (b"AABAACAADAABAAABAA$", b"AAE", &[]),
        (b"AAAAAAAAA$", b"AAAA", &[0, 1, 2, 3, 4, 5]),
        (b"AAAAAAAAA$", b"AA", &[0, 1, 2, 3, 4, 5, 6, 7]),
        (b"AAAAAAAAA$", b"A", &[0, 1, 2, 3, 4, 5, 6, 7, 8]),
        (b"AAAAAAAAA$", b"AB", &[]),
    ];
    for (text, pattern, expect) in tests {
        let arr: SuffixArray<u8> = SuffixArray::new(text.iter().copied()).unwrap();
        assert_eq!(arr.find(text), 0);
        assert_eq!(arr.find(b"not found"), arr.size());
        let mut arr_all = arr.find_all(pattern).to_vec();
        arr_all.sort_unstable();
        assert_eq!(arr_all, expect, "array over {:?}", text);

        let tree: SuffixTree<u8> = SuffixTree::from_elements(text.iter().copied()).unwrap();
        assert_eq!(tree.find(text), 0);
        assert_eq!(tree.find(b""), 0);
        assert_eq!(tree.find(b"not found"), tree.size());
        let mut tree_all = tree.find_all(pattern);
        tree_all.sort_unstable();
        assert_eq!(tree_all, expect, "tree over {:?}", text);
    }
}

#[test]
fn test_pattern_running_past_the_text_end() {
    let arr: SuffixArray<u8> = SuffixArray::new(b"ab".iter().copied()).unwrap();
    assert_eq!(arr.find(b"abc"), arr.size());
    assert!(arr.find_all(b"abc").is_empty());
    assert_eq!(arr.find(b"ab"), 0);

    let tree: SuffixTree<u8> = SuffixTree::from_elements(b"ab".iter().copied()).unwrap();
    assert_eq!(tree.find(b"abc"), tree.size());
    assert_eq!(tree.find(b"ab"), 0);
}

#[test]
fn test_longest_common_prefix_array_matches_naive_scan() {
    let mut rng = XorShift64(42);
    let mut text = random_text(&mut rng, 300);
    for value in &mut text {
        // Narrow the alphabet so adjacent suffixes share long prefixes.
        *value = b'a' + *value % 4;
    }
    let arr: SuffixArray<u8> = SuffixArray::new(text.iter().copied()).unwrap();
    let mut lcp = vec![0usize; text.len()];
    arr.longest_common_prefix_array(&mut lcp);
    for nth in 0..text.len() - 1 {
        let lhs = &text[arr.nth_element(nth)..];
        let rhs = &text[arr.nth_element(nth + 1)..];
        let naive = lhs.iter().zip(rhs).take_while(|(a, b)| a == b).count();
        assert_eq!(lcp[nth], naive, "rank {nth}");
    }
    assert_eq!(lcp[text.len() - 1], 0, "the last rank has no successor");
}

#[test]
fn test_suffix_array_and_tree_cross_check() {
    let mut rng = XorShift64(0x9E37_79B9_7F4A_7C15);
    for round in 0..100 {
        let mut text = random_text(&mut rng, 5_000);
        let doubled = text.clone();
        text.extend_from_slice(&doubled);
        *text.last_mut().unwrap() = b'$';

        let arr: SuffixArray<u8, u16> = SuffixArray::new(text.iter().copied()).unwrap();
        let mut tree: SuffixTree<u8, u16, SortedEdges<u8, u16>> = SuffixTree::new();
        tree.reserve(text.len());
        tree.try_extend(text.iter().copied()).unwrap();

        assert_eq!(
            suffix_array_order(&arr),
            suffix_tree_order(&tree),
            "round {round}: suffix orders diverge"
        );

        for len in 2..=4 {
            let pattern = random_text(&mut rng, len);
            let naive: Vec<u16> = text
                .windows(pattern.len())
                .enumerate()
                .filter(|&(_, window)| window == pattern)
                .map(|(pos, _)| pos as u16)
                .collect();
            let mut arr_all = arr.find_all(&pattern).to_vec();
            let mut tree_all = tree.find_all(&pattern);
            arr_all.sort_unstable();
            tree_all.sort_unstable();
            assert_eq!(arr_all, naive, "round {round}, pattern {:?}", pattern);
            assert_eq!(arr_all, tree_all, "round {round}, pattern {:?}", pattern);
        }
    }
}

#[test]
fn test_online_extension_keeps_queries_consistent() {
    let text = b"abaababaabaab$";
    let mut tree: ByteTree = SuffixTree::new();
    for (i, value) in text.iter().enumerate() {
        tree.push_back(*value).unwrap();
        let prefix = &text[..=i];
        assert_eq!(tree.find(prefix), 0, "prefix of length {}", i + 1);
    }
    let arr: SuffixArray<u8> = SuffixArray::new(text.iter().copied()).unwrap();
    let mut tree_all = tree.find_all(b"ab");
    let mut arr_all = arr.find_all(b"ab").to_vec();
    tree_all.sort_unstable();
    arr_all.sort_unstable();
    assert_eq!(tree_all, arr_all);
}
