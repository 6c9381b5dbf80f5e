use std::fmt;

use log::trace;

use crate::{ConstIterable, Element, RandomAccess, Result, Sequence, Size, short_type_name};

/// Non-owning adapter exposing the [`Sequence`] algorithms of a borrowed value.
///
/// The view holds a single shared reference, set once in [`SequenceView::new`]
/// and never reseated. The borrow checker keeps the referent alive and
/// unmodified for as long as the view exists. Every call is forwarded to the
/// referent's own `Sequence` impl, so a type that overrides
/// [`Sequence::contains`] gets its faster lookup through the view as well.
///
/// ```
/// use seqcap::{List, SequenceView};
///
/// let list: List<i32> = (0..10).chain([6]).collect();
/// let view = SequenceView::new(&list);
///
/// assert_eq!(view.size(), 11);
/// assert!(view.contains(&5));
/// assert_eq!(view.index(&4), 4);
/// assert_eq!(view.count(&6), 2);
/// assert_eq!(view.index(&42), -1);
/// ```
///
/// Wrapping a type that is not a [`Sequence`] does not compile:
///
/// ```compile_fail
/// use std::collections::HashSet;
/// use seqcap::SequenceView;
///
/// let set: HashSet<i32> = (0..10).collect();
/// let view = SequenceView::new(&set);
/// ```
pub struct SequenceView<'a, T: ?Sized> {
    obj: &'a T,
}

static_assertions::assert_eq_size!(SequenceView<'static, Vec<u8>>, usize);
static_assertions::assert_eq_size!(SequenceView<'static, [u8]>, (usize, usize));

impl<'a, T> SequenceView<'a, T>
where
    T: Sequence + ?Sized,
{
    pub fn new(obj: &'a T) -> Self {
        trace!(
            "SequenceView over {} ({} elements)",
            std::any::type_name::<T>(),
            obj.size()
        );
        Self { obj }
    }

    /// Returns the borrowed value.
    #[inline]
    pub fn inner(&self) -> &'a T {
        self.obj
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.obj.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.obj.is_empty()
    }

    /// See [`Sequence::contains`].
    #[inline]
    pub fn contains(&self, value: &Element<T>) -> bool {
        Sequence::contains(self.obj, value)
    }

    /// See [`Sequence::index`].
    #[inline]
    pub fn index(&self, value: &Element<T>) -> isize {
        Sequence::index(self.obj, value)
    }

    /// See [`Sequence::count`].
    #[inline]
    pub fn count(&self, value: &Element<T>) -> usize {
        Sequence::count(self.obj, value)
    }
}

impl<T: ?Sized> Clone for SequenceView<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for SequenceView<'_, T> {}

impl<T> fmt::Debug for SequenceView<'_, T>
where
    T: Size + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SequenceView<{}> {{ size: {} }}",
            short_type_name::<T>(),
            self.obj.size()
        )
    }
}

impl<T> Size for SequenceView<'_, T>
where
    T: Size + ?Sized,
{
    #[inline]
    fn size(&self) -> usize {
        self.obj.size()
    }
}

impl<'a, T> ConstIterable for SequenceView<'a, T>
where
    T: ConstIterable + ?Sized,
{
    type Item = T::Item;
    type Cursor<'b>
        = T::Cursor<'b>
    where
        Self: 'b;

    #[inline]
    fn iter(&self) -> Self::Cursor<'_> {
        self.obj.iter()
    }
}

impl<T> RandomAccess for SequenceView<'_, T>
where
    T: RandomAccess + ?Sized,
{
    type Item = T::Item;

    #[inline]
    fn at(&self, index: usize) -> &T::Item {
        self.obj.at(index)
    }
}

impl<T> Sequence for SequenceView<'_, T>
where
    T: Sequence + ?Sized,
{
    #[inline]
    fn contains(&self, value: &Element<Self>) -> bool {
        Sequence::contains(self.obj, value)
    }

    #[inline]
    fn position(&self, value: &Element<Self>) -> Option<usize> {
        self.obj.position(value)
    }

    #[inline]
    fn index(&self, value: &Element<Self>) -> isize {
        Sequence::index(self.obj, value)
    }

    #[inline]
    fn count(&self, value: &Element<Self>) -> usize {
        Sequence::count(self.obj, value)
    }

    #[inline]
    fn index_between(&self, value: &Element<Self>, from: usize, to: usize) -> Result<usize> {
        self.obj.index_between(value, from, to)
    }

    #[inline]
    fn checked_at(&self, index: usize) -> Result<&Element<Self>> {
        self.obj.checked_at(index)
    }
}

impl<'a, T> IntoIterator for SequenceView<'a, T>
where
    T: ConstIterable + ?Sized,
{
    type Item = &'a T::Item;
    type IntoIter = T::Cursor<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.obj.iter()
    }
}
