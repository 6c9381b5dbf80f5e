use std::collections::{BTreeSet, HashSet, VecDeque, btree_set, hash_set, vec_deque};
use std::slice;

/// Capability: the type can be traversed without being modified.
///
/// The cursor is a plain [`Iterator`]: `next()` advances, `None` is the end
/// sentinel and every yielded item is a shared reference into `self`.
pub trait ConstIterable {
    /// The element type yielded by the cursor.
    type Item;

    /// Read-only cursor borrowed from `self`.
    type Cursor<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Returns a cursor positioned at the first element.
    fn iter(&self) -> Self::Cursor<'_>;
}

/// Shorthand for the element type of a [`ConstIterable`].
pub type Element<T> = <T as ConstIterable>::Item;

impl<T> ConstIterable for Vec<T> {
    type Item = T;
    type Cursor<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Cursor<'_> {
        self.as_slice().iter()
    }
}

impl<T> ConstIterable for [T] {
    type Item = T;
    type Cursor<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Cursor<'_> {
        <[T]>::iter(self)
    }
}

impl<T, const N: usize> ConstIterable for [T; N] {
    type Item = T;
    type Cursor<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Cursor<'_> {
        self.as_slice().iter()
    }
}

impl<T> ConstIterable for VecDeque<T> {
    type Item = T;
    type Cursor<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Cursor<'_> {
        VecDeque::iter(self)
    }
}

impl<T, S> ConstIterable for HashSet<T, S> {
    type Item = T;
    type Cursor<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Cursor<'_> {
        HashSet::iter(self)
    }
}

impl<T> ConstIterable for BTreeSet<T> {
    type Item = T;
    type Cursor<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Cursor<'_> {
        BTreeSet::iter(self)
    }
}
