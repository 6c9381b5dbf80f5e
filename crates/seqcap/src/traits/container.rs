use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// Capability: membership of a value can be tested without modifying `self`.
///
/// Every [`Sequence`](crate::Sequence) is a `Container` of its element type
/// through a blanket impl that routes to [`Sequence::contains`](crate::Sequence::contains).
/// Non-sequence types with a faster lookup implement it directly.
pub trait Container<U: ?Sized> {
    fn contains(&self, value: &U) -> bool;
}

impl<T, S> Container<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }
}

impl<T: Ord> Container<T> for BTreeSet<T> {
    #[inline]
    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }
}
