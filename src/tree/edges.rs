//! Edge containers for suffix tree nodes.
//!
//! Every node owns one outgoing-edge container keyed by the first element
//! of each edge label. [`EdgeMap`] is the seam between the tree and the
//! container so the branching strategy is a compile-time choice:
//!
//! - [`HashedEdges`] for large alphabets, O(1) expected lookup
//! - [`SortedEdges`] for small alphabets and for deterministic traversal
//!   order (children iterate in ascending element order)
//!
//! A container also names the equality policy consistent with its lookup:
//! hashing implies the element's own `==`, ordering implies the derived
//! equivalence. The tree compares label elements with that same policy, so
//! edge lookup and label matching can never disagree.

use super::EdgeTarget;
use crate::policy::{Equal, Equivalence, NaturalEq, NaturalOrder, Order};
use ahash::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Outgoing edges of one node, keyed by the first element of each label.
pub trait EdgeMap<T, S: Copy>: Default {
    /// Equality policy consistent with this container's key lookup.
    type Equal: Equal<T> + Default;

    /// The edge whose label starts with `key`, if any.
    fn get(&self, key: &T) -> Option<EdgeTarget<S>>;

    /// Insert or replace the edge whose label starts with `key`.
    fn set(&mut self, key: T, target: EdgeTarget<S>);

    /// Edge targets in this container's iteration order.
    fn targets(&self) -> impl Iterator<Item = EdgeTarget<S>> + '_;
}

/// Flat sorted edge container with a pluggable ordering policy.
///
/// Keys are kept in ascending policy order inside one vector, so lookups
/// are binary searches and iteration is ordered. Suffix tree nodes rarely
/// hold more than a handful of edges, which keeps the insertion shifts
/// cheap and the layout cache-friendly.
#[derive(Debug, Clone)]
pub struct SortedEdges<T, S, C = NaturalOrder> {
    entries: Vec<(T, EdgeTarget<S>)>,
    cmp: C,
}

impl<T, S, C: Default> Default for SortedEdges<T, S, C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            cmp: C::default(),
        }
    }
}

impl<T, S: Copy, C: Order<T> + Default> EdgeMap<T, S> for SortedEdges<T, S, C> {
    type Equal = Equivalence<C>;

    fn get(&self, key: &T) -> Option<EdgeTarget<S>> {
        self.entries
            .binary_search_by(|(k, _)| self.cmp.ordering(k, key))
            .ok()
            .map(|i| self.entries[i].1)
    }

    fn set(&mut self, key: T, target: EdgeTarget<S>) {
        match self.entries.binary_search_by(|(k, _)| self.cmp.ordering(k, &key)) {
            Ok(i) => self.entries[i].1 = target,
            Err(i) => self.entries.insert(i, (key, target)),
        }
    }

    fn targets(&self) -> impl Iterator<Item = EdgeTarget<S>> + '_ {
        self.entries.iter().map(|(_, target)| *target)
    }
}

/// Hash-addressed edge container, the default for unconstrained alphabets.
///
/// Iteration order is arbitrary, so traversal-order-sensitive callers
/// should prefer [`SortedEdges`].
#[derive(Debug, Clone)]
pub struct HashedEdges<T, S, H = RandomState> {
    entries: HashMap<T, EdgeTarget<S>, H>,
}

impl<T, S, H: Default + BuildHasher> Default for HashedEdges<T, S, H> {
    fn default() -> Self {
        Self {
            entries: HashMap::default(),
        }
    }
}

impl<T: Eq + Hash, S: Copy, H: BuildHasher + Default> EdgeMap<T, S> for HashedEdges<T, S, H> {
    type Equal = NaturalEq;

    fn get(&self, key: &T) -> Option<EdgeTarget<S>> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: T, target: EdgeTarget<S>) {
        self.entries.insert(key, target);
    }

    fn targets(&self) -> impl Iterator<Item = EdgeTarget<S>> + '_ {
        self.entries.values().copied()
    }
}
