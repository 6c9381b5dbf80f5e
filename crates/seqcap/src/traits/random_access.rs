use std::collections::VecDeque;

/// Capability: any element can be read by position in constant time.
///
/// Forward-only cursors are not enough for [`Sequence::index`](crate::Sequence::index),
/// which looks elements up by position. Implementations decide what happens
/// for `index >= size()`; the std impls panic like slice indexing. Use
/// [`Sequence::checked_at`](crate::Sequence::checked_at) for a checked read.
pub trait RandomAccess {
    type Item;

    fn at(&self, index: usize) -> &Self::Item;
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccess for [T] {
    type Item = T;

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> RandomAccess for [T; N] {
    type Item = T;

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccess for VecDeque<T> {
    type Item = T;

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}
