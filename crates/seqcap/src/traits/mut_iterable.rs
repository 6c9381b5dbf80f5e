use std::collections::{VecDeque, vec_deque};
use std::slice;

/// Capability: the type can be traversed with write access to each element.
pub trait MutIterable {
    type Item;

    /// Mutable cursor borrowed from `self`.
    type CursorMut<'a>: Iterator<Item = &'a mut Self::Item>
    where
        Self: 'a;

    fn iter_mut(&mut self) -> Self::CursorMut<'_>;
}

impl<T> MutIterable for Vec<T> {
    type Item = T;
    type CursorMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter_mut(&mut self) -> Self::CursorMut<'_> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> MutIterable for [T] {
    type Item = T;
    type CursorMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter_mut(&mut self) -> Self::CursorMut<'_> {
        <[T]>::iter_mut(self)
    }
}

impl<T, const N: usize> MutIterable for [T; N] {
    type Item = T;
    type CursorMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter_mut(&mut self) -> Self::CursorMut<'_> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> MutIterable for VecDeque<T> {
    type Item = T;
    type CursorMut<'a>
        = vec_deque::IterMut<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter_mut(&mut self) -> Self::CursorMut<'_> {
        VecDeque::iter_mut(self)
    }
}
