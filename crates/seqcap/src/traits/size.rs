use std::collections::{BTreeSet, HashSet, VecDeque};

/// Capability: the element count can be queried.
///
/// `size` must not have side effects and must agree with the number of
/// elements the type's cursors yield.
pub trait Size {
    fn size(&self) -> usize;

    /// Returns `true` if `size()` is zero.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T> Size for Vec<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Size for [T] {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Size for [T; N] {
    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T> Size for VecDeque<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, S> Size for HashSet<T, S> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Size for BTreeSet<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}
