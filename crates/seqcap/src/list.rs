use std::ops::Index;
use std::slice;

use crate::{ConstIterable, RandomAccess, Sequence, Size};

/// An immutable vector.
///
/// Owns its elements and never hands out mutable access, so it conforms to
/// [`Size`], [`ConstIterable`], [`RandomAccess`] and [`Sequence`] but not to
/// [`MutIterable`](crate::MutIterable). All `Sequence` algorithms are the
/// trait defaults.
///
/// ```
/// use seqcap::{List, Sequence};
///
/// let list = List::new(vec!["a", "b", "a"]);
/// assert_eq!(list.count(&"a"), 2);
/// assert_eq!(list.index(&"b"), 1);
/// assert_eq!(list[2], "a");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> List<T> {
    #[inline]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for List<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.as_slice().iter()
    }
}

impl<T> Size for List<T> {
    #[inline]
    fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> ConstIterable for List<T> {
    type Item = T;
    type Cursor<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Cursor<'_> {
        self.items.as_slice().iter()
    }
}

impl<T> RandomAccess for List<T> {
    type Item = T;

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T: PartialEq> Sequence for List<T> {}
