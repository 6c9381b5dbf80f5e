use std::collections::VecDeque;
use std::iter::FusedIterator;

use log::debug;

use crate::{ConstIterable, Container, Element, Error, RandomAccess, Result, Size};

/// A finite, ordered, indexable collection with lookup algorithms for free.
///
/// `Sequence` asks for three capabilities: [`Size`], [`ConstIterable`] over a
/// `PartialEq` element and [`RandomAccess`] over the same element. Every
/// method has a default body built only on those, so conformance is usually
/// an empty impl:
///
/// ```
/// use seqcap::{ConstIterable, RandomAccess, Sequence, Size};
///
/// struct Digits(Vec<u8>);
///
/// impl Size for Digits {
///     fn size(&self) -> usize {
///         self.0.len()
///     }
/// }
///
/// impl ConstIterable for Digits {
///     type Item = u8;
///     type Cursor<'a> = std::slice::Iter<'a, u8> where Self: 'a;
///
///     fn iter(&self) -> Self::Cursor<'_> {
///         self.0.as_slice().iter()
///     }
/// }
///
/// impl RandomAccess for Digits {
///     type Item = u8;
///
///     fn at(&self, index: usize) -> &u8 {
///         &self.0[index]
///     }
/// }
///
/// impl Sequence for Digits {}
///
/// let digits = Digits(vec![3, 1, 4, 1, 5]);
/// assert!(digits.contains(&4));
/// assert_eq!(digits.index(&1), 1);
/// assert_eq!(digits.count(&1), 2);
/// assert_eq!(digits.index(&9), -1);
/// ```
///
/// A missing capability is a build error at the `impl Sequence` line, never a
/// runtime failure. Without [`Size`]:
///
/// ```compile_fail
/// use seqcap::{ConstIterable, RandomAccess, Sequence};
///
/// struct Unmeasured(Vec<u8>);
///
/// impl ConstIterable for Unmeasured {
///     type Item = u8;
///     type Cursor<'a> = std::slice::Iter<'a, u8> where Self: 'a;
///
///     fn iter(&self) -> Self::Cursor<'_> {
///         self.0.as_slice().iter()
///     }
/// }
///
/// impl RandomAccess for Unmeasured {
///     type Item = u8;
///
///     fn at(&self, index: usize) -> &u8 {
///         &self.0[index]
///     }
/// }
///
/// impl Sequence for Unmeasured {}
/// ```
///
/// A forward-only type cannot be a `Sequence` either, since [`Sequence::index`]
/// reads by position:
///
/// ```compile_fail
/// use seqcap::{ConstIterable, Sequence, Size};
///
/// struct ForwardOnly(Vec<u8>);
///
/// impl Size for ForwardOnly {
///     fn size(&self) -> usize {
///         self.0.len()
///     }
/// }
///
/// impl ConstIterable for ForwardOnly {
///     type Item = u8;
///     type Cursor<'a> = std::slice::Iter<'a, u8> where Self: 'a;
///
///     fn iter(&self) -> Self::Cursor<'_> {
///         self.0.as_slice().iter()
///     }
/// }
///
/// impl Sequence for ForwardOnly {}
/// ```
///
/// Both `Sequence` and [`Container`] expose `contains`; with both traits in
/// scope, call it as `Sequence::contains(&seq, &value)`.
///
/// All methods assume the implementor is well behaved: `size()` matches the
/// number of elements the cursor yields and nothing changes during a call.
pub trait Sequence:
    Size + ConstIterable<Item: PartialEq> + RandomAccess<Item = <Self as ConstIterable>::Item>
{
    /// Returns `true` if any element equals `value`.
    ///
    /// Single pass over the const cursor, stops at the first match. Override
    /// it when the type has a faster lookup (a hash index, sorted storage).
    #[inline]
    fn contains(&self, value: &Element<Self>) -> bool {
        self.iter().any(|elem| elem == value)
    }

    /// Returns the first position holding `value`, or `None`.
    #[inline]
    fn position(&self, value: &Element<Self>) -> Option<usize> {
        (0..self.size()).find(|&i| self.at(i) == value)
    }

    /// Returns the first position holding `value`, or `-1` if there is none.
    ///
    /// # Panics
    ///
    /// Panics if the position does not fit in an `isize`. Use
    /// [`Sequence::position`] for sequences that large.
    #[inline]
    fn index(&self, value: &Element<Self>) -> isize {
        match self.position(value).map(isize::try_from) {
            None => -1,
            Some(Ok(i)) => i,
            Some(Err(_)) => panic!("sequence position does not fit in isize"),
        }
    }

    /// Returns the number of elements equal to `value`.
    #[inline]
    fn count(&self, value: &Element<Self>) -> usize {
        self.iter().filter(|elem| *elem == value).count()
    }

    /// Returns the first position in `[from, to)` holding `value`.
    fn index_between(&self, value: &Element<Self>, from: usize, to: usize) -> Result<usize> {
        let len = self.size();
        if from > to || to > len {
            debug!("Rejected range {from}..{to} over a sequence of len {len}");
            return Err(Error::InvalidRange { from, to, len });
        }
        (from..to)
            .find(|&i| self.at(i) == value)
            .ok_or(Error::ValueNotFound)
    }

    /// Bounds-checked read at `index`.
    #[inline]
    fn checked_at(&self, index: usize) -> Result<&Element<Self>> {
        let len = self.size();
        if index >= len {
            return Err(Error::IndexTooHigh { index, len });
        }
        Ok(self.at(index))
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    fn first(&self) -> Option<&Element<Self>> {
        if self.is_empty() { None } else { Some(self.at(0)) }
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    fn last(&self) -> Option<&Element<Self>> {
        let len = self.size();
        if len > 0 { Some(self.at(len - 1)) } else { None }
    }

    /// Iterates from the last element to the first.
    #[inline]
    fn reversed(&self) -> Reversed<'_, Self> {
        Reversed::new(self)
    }
}

impl<S> Container<<S as ConstIterable>::Item> for S
where
    S: Sequence + ?Sized,
{
    #[inline]
    fn contains(&self, value: &Element<S>) -> bool {
        Sequence::contains(self, value)
    }
}

impl<T: PartialEq> Sequence for Vec<T> {}

impl<T: PartialEq> Sequence for [T] {}

impl<T: PartialEq, const N: usize> Sequence for [T; N] {}

impl<T: PartialEq> Sequence for VecDeque<T> {}

/// Iterator over a [`Sequence`] from back to front, driven by [`RandomAccess`].
///
/// Created by [`Sequence::reversed`].
pub struct Reversed<'a, S: ?Sized> {
    seq: &'a S,
    /// Next position `next_back` yields.
    front: usize,
    /// One past the next position `next` yields.
    back: usize,
}

impl<'a, S> Reversed<'a, S>
where
    S: Size + RandomAccess + ?Sized,
{
    #[inline]
    pub(crate) fn new(seq: &'a S) -> Self {
        Self {
            seq,
            front: 0,
            back: seq.size(),
        }
    }
}

impl<'a, S> Iterator for Reversed<'a, S>
where
    S: RandomAccess + ?Sized,
{
    type Item = &'a S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.seq.at(self.back))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S> DoubleEndedIterator for Reversed<'_, S>
where
    S: RandomAccess + ?Sized,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        Some(self.seq.at(index))
    }
}

impl<S> ExactSizeIterator for Reversed<'_, S> where S: RandomAccess + ?Sized {}

impl<S> FusedIterator for Reversed<'_, S> where S: RandomAccess + ?Sized {}
