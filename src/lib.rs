//! # sufx - In-Memory Suffix Indexes
//!
//! sufx builds suffix arrays and suffix trees over arbitrary element
//! sequences, answering substring queries in time proportional to the
//! pattern rather than the text.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`array`] - Suffix array built by prefix doubling, with binary-search queries
//! - [`tree`] - Online suffix tree built by Ukkonen's algorithm
//! - [`query`] - Derived queries (longest repeated / common substring)
//! - [`policy`] - Pluggable ordering and equality policies
//! - [`width`] - Position-width selection so short texts use narrow indexes
//! - [`error`] - Construction errors
//!
//! ## Quick Start
//!
//! ```
//! use sufx::array::SuffixArray;
//! use sufx::tree::{SortedEdges, SuffixTree};
//!
//! let text = b"BANANA$";
//! let arr: SuffixArray<u8> = SuffixArray::new(text.iter().copied()).unwrap();
//! assert_eq!(arr.find(b"NAN"), 2);
//! assert_eq!(arr.find_all(b"NA"), &[4, 2]);
//!
//! let tree: SuffixTree<u8, usize, SortedEdges<u8, usize>> =
//!     SuffixTree::from_elements(text.iter().copied()).unwrap();
//! assert_eq!(tree.find(b"NAN"), 2);
//! assert_eq!(tree.find_all(b"NA"), vec![4, 2]);
//! ```
//!
//! ## Two structures, one contract
//!
//! Both indexes enumerate the same occurrences for the same text and
//! ordering policy; with [`tree::SortedEdges`] the tree even reports
//! them in the array's rank order:
//!
//! 1. **Suffix array** - compact and cache-friendly, built in
//!    O(n log n); queries are binary searches over suffix ranks.
//! 2. **Suffix tree** - built online in amortized O(n), extendable one
//!    element at a time; queries walk edges and take O(pattern).
//!
//! Position width is a compile-time choice: a `SuffixArray<u8, u16>`
//! stores ranks half the size of the default `usize`, and the [`width`]
//! module picks the narrowest width that fits a given text length.

pub mod array;
pub mod error;
pub mod policy;
pub mod query;
pub mod tree;
pub mod width;
