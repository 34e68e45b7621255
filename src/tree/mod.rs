//! Online suffix tree construction and queries.
//!
//! The tree is built with Ukkonen's algorithm, one element at a time in
//! amortized O(n) for constant-size alphabets:
//!
//! 1. Each appended element opens one new latent suffix and the active
//!    point replays every latent suffix that now diverges from the text.
//! 2. Leaf edges are open-ended: their labels grow implicitly with the
//!    text, so only divergence points allocate nodes.
//! 3. Suffix links chain the internal nodes created while replaying one
//!    element, letting the active point jump between branch sites without
//!    re-walking from the root.
//!
//! Edge labels are `(first, last)` ranges into the text, never copies, so
//! a node costs O(1) space regardless of label length. The element type
//! only needs `Clone` plus whatever the edge container requires; elements
//! are compared through the container's [`EdgeMap::Equal`] policy so edge
//! lookup and label matching always agree.
//!
//! A tree whose text lacks a unique trailing terminator may be *implicit*:
//! suffixes that are prefixes of other suffixes end mid-edge instead of at
//! a leaf. [`SuffixTree::find`] still locates occurrences there, but
//! [`SuffixTree::find_all`] only reports terminated suffixes; call
//! [`SuffixTree::is_explicit`] to check before enumerating.

pub mod edges;

pub use edges::{EdgeMap, HashedEdges, SortedEdges};

use crate::error::CapacityError;
use crate::policy::Equal;
use crate::width::TextIndex;

/// Destination of one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTarget<S> {
    /// Arena index of an internal node; the label range lives on the node.
    Internal(S),
    /// Leaf edge labelled from this position to the end of the text.
    Leaf(S),
}

impl<S> EdgeTarget<S> {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, EdgeTarget::Leaf(_))
    }
}

/// One edge met during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEdge<S> {
    /// Arena index of the node the edge leaves.
    pub parent: S,
    /// Where the edge leads.
    pub child: EdgeTarget<S>,
    /// Total label length on the walk from the root through this edge.
    pub path: S,
}

/// Internal node: outgoing edges, incoming label range, suffix link.
#[derive(Debug, Clone)]
struct Node<S, M> {
    edges: M,
    range: (S, S),
    link: S,
}

impl<S: TextIndex, M: Default> Node<S, M> {
    fn new() -> Self {
        Self {
            edges: M::default(),
            range: (S::from_usize(0), S::from_usize(0)),
            link: S::from_usize(0),
        }
    }
}

/// Suffix tree over elements of type `T`, indexed by `S`, branching
/// through the edge container `M`.
///
/// The index type bounds the text length: a `SuffixTree<u8, u16>` holds at
/// most 65 535 elements and addresses them with 16-bit positions.
#[derive(Debug, Clone)]
pub struct SuffixTree<T, S = usize, M = HashedEdges<T, S>> {
    text: Vec<T>,
    nodes: Vec<Node<S, M>>,
    active_char: usize,
    active_node: usize,
}

impl<T, S, M> Default for SuffixTree<T, S, M> {
    fn default() -> Self {
        Self {
            text: Vec::new(),
            nodes: Vec::new(),
            active_char: 0,
            active_node: 0,
        }
    }
}

impl<T, S: TextIndex, M: EdgeMap<T, S>> SuffixTree<T, S, M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements indexed so far.
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

    /// Whether every suffix of the text currently ends at a leaf.
    ///
    /// Guaranteed after appending an element that occurs nowhere else in
    /// the text, such as a sentinel terminator.
    #[inline]
    pub fn is_explicit(&self) -> bool {
        self.remainder() == 0
    }

    /// Label range `(first, last)` of the edge leading to `target`.
    #[inline]
    pub fn label(&self, target: EdgeTarget<S>) -> (S, S) {
        match target {
            EdgeTarget::Leaf(first) => (first, self.size()),
            EdgeTarget::Internal(node) => self.nodes[node.to_usize()].range,
        }
    }

    /// Text range spelled by the walk from the root through `edge`.
    #[inline]
    pub fn path_range(&self, edge: TreeEdge<S>) -> (S, S) {
        let last = self.label(edge.child).1.to_usize();
        (S::from_usize(last - edge.path.to_usize()), S::from_usize(last))
    }

    /// Position of one occurrence of `pattern`, or [`size`](Self::size)
    /// if the pattern does not occur.
    pub fn find(&self, pattern: &[T]) -> S {
        match self.find_edge(pattern) {
            Some(edge) => self.path_range(edge).0,
            None => self.size(),
        }
    }

    /// Positions of every terminated suffix starting with `pattern`, in
    /// the edge containers' traversal order.
    ///
    /// On an explicit tree this is every occurrence; with [`SortedEdges`]
    /// the positions come out in lexicographic rank order. An implicit
    /// tree under-reports because unterminated suffixes have no leaf.
    pub fn find_all(&self, pattern: &[T]) -> Vec<S> {
        debug_assert!(
            self.is_explicit(),
            "implicit suffix tree: append a unique terminator before enumerating occurrences"
        );
        let mut occurrences = Vec::new();
        if let Some(edge) = self.find_edge(pattern) {
            self.dfs(
                edge,
                |e| {
                    if e.child.is_leaf() {
                        occurrences.push(self.path_range(e).0);
                    }
                },
                |_| {},
            );
        }
        occurrences
    }

    /// Depth-first traversal of the whole tree.
    ///
    /// `pre` runs when an edge is first reached, `post` after an internal
    /// edge's subtree is exhausted; leaf edges only get `pre`. Traversal
    /// starts at the root's empty edge, so both callbacks also see one
    /// edge with `path == 0`.
    pub fn visit(&self, pre: impl FnMut(TreeEdge<S>), post: impl FnMut(TreeEdge<S>)) {
        if self.nodes.is_empty() {
            return;
        }
        let root = TreeEdge {
            parent: S::from_usize(0),
            child: EdgeTarget::Internal(S::from_usize(0)),
            path: S::from_usize(0),
        };
        self.dfs(root, pre, post);
    }

    /// Unmatched tail length of the suffix replay.
    #[inline]
    fn remainder(&self) -> usize {
        self.text.len() - self.active_char
    }

    /// Walks `pattern` down from the root. Returns the edge on which the
    /// pattern ends; its `path` counts the full label of that edge even
    /// when the pattern stops mid-label, which is exactly the overshoot
    /// [`path_range`](Self::path_range) cancels.
    fn find_edge(&self, pattern: &[T]) -> Option<TreeEdge<S>> {
        if self.nodes.is_empty() {
            return None;
        }
        let eq = M::Equal::default();
        let mut pattern = pattern;
        let mut edge = TreeEdge {
            parent: S::from_usize(0),
            child: EdgeTarget::Internal(S::from_usize(0)),
            path: S::from_usize(0),
        };
        loop {
            let (first, last) = self.label(edge.child);
            let label = &self.text[first.to_usize()..last.to_usize()];
            edge.path = S::from_usize(edge.path.to_usize() + label.len());
            let matched = pattern
                .iter()
                .zip(label)
                .take_while(|&(p, l)| eq.equal(p, l))
                .count();
            if matched == pattern.len() {
                return Some(edge);
            }
            if matched < label.len() {
                return None;
            }
            let EdgeTarget::Internal(node) = edge.child else {
                return None;
            };
            pattern = &pattern[matched..];
            edge.parent = node;
            edge.child = self.nodes[node.to_usize()].edges.get(&pattern[0])?;
        }
    }

    /// Iterative depth-first walk from `root`. Children are expanded in
    /// the edge container's iteration order.
    fn dfs(&self, root: TreeEdge<S>, mut pre: impl FnMut(TreeEdge<S>), mut post: impl FnMut(TreeEdge<S>)) {
        let mut stack = vec![(root, false)];
        while let Some(top) = stack.last_mut() {
            let edge = top.0;
            match edge.child {
                EdgeTarget::Leaf(_) => {
                    pre(edge);
                    stack.pop();
                }
                EdgeTarget::Internal(_) if top.1 => {
                    post(edge);
                    stack.pop();
                }
                EdgeTarget::Internal(node) => {
                    top.1 = true;
                    pre(edge);
                    let base = stack.len();
                    for target in self.nodes[node.to_usize()].edges.targets() {
                        let (first, last) = self.label(target);
                        let path = edge.path.to_usize() + last.to_usize() - first.to_usize();
                        let child = TreeEdge {
                            parent: node,
                            child: target,
                            path: S::from_usize(path),
                        };
                        stack.push((child, false));
                    }
                    // Stack pops in reverse, children should run in
                    // container order.
                    stack[base..].reverse();
                }
            }
        }
    }
}

impl<T: Clone, S: TextIndex, M: EdgeMap<T, S>> SuffixTree<T, S, M> {
    /// Appends one element and restores every suffix tree invariant.
    ///
    /// On capacity overflow the tree is reset to empty before the error
    /// returns, so a failed append never leaves a half-extended index.
    pub fn push_back(&mut self, value: T) -> Result<(), CapacityError> {
        if self.text.len() >= S::MAX {
            let len = self.text.len() + 1;
            self.clear();
            return Err(CapacityError { len, max: S::MAX });
        }
        self.text.push(value);
        if self.nodes.is_empty() {
            self.nodes.push(Node::new());
        }
        // Nodes split during this replay get chained by suffix links.
        let mut pending = self.nodes.len();
        while self.remainder() > 0 {
            let Some(target) = self.nodes[self.active_node].edges.get(&self.text[self.active_char])
            else {
                let key = self.text[self.active_char].clone();
                let start = S::from_usize(self.active_char);
                self.nodes[self.active_node].edges.set(key, EdgeTarget::Leaf(start));
                let dest = self.active_node;
                self.tie(&mut pending, dest);
                self.advance();
                continue;
            };
            if self.descend(target) {
                continue;
            }
            if !self.split(target) {
                // The tail is still a prefix of an existing edge; every
                // shorter suffix is too, so the replay stops here.
                let dest = self.active_node;
                self.tie(&mut pending, dest);
                return Ok(());
            }
            let dest = self.nodes.len() - 1;
            self.tie(&mut pending, dest);
            self.advance();
        }
        Ok(())
    }

    /// Appends every element in order; see [`push_back`](Self::push_back).
    pub fn try_extend(&mut self, values: impl IntoIterator<Item = T>) -> Result<(), CapacityError> {
        for value in values {
            self.push_back(value)?;
        }
        Ok(())
    }

    /// Builds a tree over `values` in one pass.
    pub fn from_elements(values: impl IntoIterator<Item = T>) -> Result<Self, CapacityError> {
        let mut tree = Self::new();
        tree.try_extend(values)?;
        Ok(tree)
    }

    /// Drops the text and every node, keeping allocations.
    pub fn clear(&mut self) {
        self.text.clear();
        self.nodes.clear();
        self.active_char = 0;
        self.active_node = 0;
    }

    /// Reserves room for `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.text.reserve(additional);
        self.nodes.reserve(additional);
    }

    /// Moves the active point past an edge it fully covers.
    fn descend(&mut self, target: EdgeTarget<S>) -> bool {
        let EdgeTarget::Internal(node) = target else {
            return false;
        };
        let (first, last) = self.nodes[node.to_usize()].range;
        let len = last.to_usize() - first.to_usize();
        if self.remainder() <= len {
            return false;
        }
        self.active_char += len;
        self.active_node = node.to_usize();
        true
    }

    /// Splits the active edge before the first mismatching element.
    ///
    /// Returns `false` without touching the tree when the newest element
    /// extends the edge label instead of diverging from it.
    fn split(&mut self, target: EdgeTarget<S>) -> bool {
        let (first, second) = self.label(target);
        let (first, second) = (first.to_usize(), second.to_usize());
        let cut = first + self.remainder() - 1;
        let back = self.text.len() - 1;
        let eq = M::Equal::default();
        if eq.equal(&self.text[cut], &self.text[back]) {
            return false;
        }
        let split_node = self.nodes.len();
        let key = self.text[self.active_char].clone();
        self.nodes[self.active_node]
            .edges
            .set(key, EdgeTarget::Internal(S::from_usize(split_node)));
        let continuation = match target {
            EdgeTarget::Leaf(_) => EdgeTarget::Leaf(S::from_usize(cut)),
            EdgeTarget::Internal(old) => EdgeTarget::Internal(old),
        };
        let mut edges = M::default();
        edges.set(self.text[cut].clone(), continuation);
        edges.set(self.text[back].clone(), EdgeTarget::Leaf(S::from_usize(back)));
        self.nodes.push(Node {
            edges,
            range: (S::from_usize(first), S::from_usize(cut)),
            link: S::from_usize(0),
        });
        if let EdgeTarget::Internal(old) = target {
            self.nodes[old.to_usize()].range = (S::from_usize(cut), S::from_usize(second));
        }
        true
    }

    /// Links the oldest unlinked node from this replay to `dest`.
    fn tie(&mut self, pending: &mut usize, dest: usize) {
        if *pending < self.nodes.len() && *pending != dest {
            self.nodes[*pending].link = S::from_usize(dest);
            *pending += 1;
        }
    }

    /// Steps the active point to the next latent suffix.
    fn advance(&mut self) {
        if self.active_node != 0 {
            self.active_node = self.nodes[self.active_node].link.to_usize();
        } else {
            self.active_char += 1;
        }
    }
}
