//! Ordering and equality policies.
//!
//! The index structures never compare elements directly; they go through a
//! policy value resolved at compile time:
//!
//! - [`Order`] supplies a strict weak ordering ("less than")
//! - [`Equal`] supplies an equivalence test
//!
//! [`NaturalOrder`] and [`NaturalEq`] delegate to the element type's own
//! `Ord`/`PartialEq`. When a structure is configured with an ordering only,
//! [`Equivalence`] derives the matching equivalence from it, so lookups and
//! comparisons can never disagree about which elements are the same.

use std::cmp::Ordering;

/// A strict weak ordering over elements of type `T`.
pub trait Order<T> {
    /// Whether `lhs` orders strictly before `rhs`.
    fn less(&self, lhs: &T, rhs: &T) -> bool;

    /// Three-way comparison derived from [`less`](Self::less).
    fn ordering(&self, lhs: &T, rhs: &T) -> Ordering {
        if self.less(lhs, rhs) {
            Ordering::Less
        } else if self.less(rhs, lhs) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// An equivalence relation over elements of type `T`.
pub trait Equal<T> {
    /// Whether `lhs` and `rhs` are equivalent.
    fn equal(&self, lhs: &T, rhs: &T) -> bool;
}

impl<T, C: Order<T> + ?Sized> Order<T> for &C {
    #[inline]
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        (**self).less(lhs, rhs)
    }
}

impl<T, E: Equal<T> + ?Sized> Equal<T> for &E {
    #[inline]
    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        (**self).equal(lhs, rhs)
    }
}

/// Ordering by the element type's own `Ord`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl<T: Ord> Order<T> for NaturalOrder {
    #[inline]
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

/// Equality by the element type's own `PartialEq`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalEq;

impl<T: PartialEq> Equal<T> for NaturalEq {
    #[inline]
    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}

/// Equivalence derived from an ordering: two elements are equivalent when
/// neither orders before the other.
#[derive(Debug, Default, Clone, Copy)]
pub struct Equivalence<C>(pub C);

impl<T, C: Order<T>> Equal<T> for Equivalence<C> {
    #[inline]
    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        !self.0.less(lhs, rhs) && !self.0.less(rhs, lhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CaseFold;

    impl Order<u8> for CaseFold {
        fn less(&self, lhs: &u8, rhs: &u8) -> bool {
            lhs.to_ascii_lowercase() < rhs.to_ascii_lowercase()
        }
    }

    #[test]
    fn test_natural_order_matches_ord() {
        assert!(NaturalOrder.less(&1, &2));
        assert!(!NaturalOrder.less(&2, &1));
        assert_eq!(NaturalOrder.ordering(&3, &3), Ordering::Equal);
    }

    #[test]
    fn test_equivalence_follows_the_ordering() {
        let eq = Equivalence(CaseFold);
        assert!(eq.equal(&b'a', &b'A'));
        assert!(!eq.equal(&b'a', &b'b'));
    }

    #[test]
    fn test_borrowed_policies_delegate() {
        let cmp = CaseFold;
        assert_eq!((&cmp).ordering(&b'B', &b'a'), Ordering::Greater);
        assert!(Equivalence(&cmp).equal(&b'X', &b'x'));
    }
}
