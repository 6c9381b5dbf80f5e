use std::cell::Cell;
use std::collections::VecDeque;
use std::slice;

use seqcap::{
    ConstIterable, Element, Error, Iterable, List, MutIterable, RandomAccess, Result, Sequence,
    SequenceView, Size,
};

#[derive(Debug, Size, ConstIterable, RandomAccess, Sequence)]
struct Scores(Vec<u32>);

#[derive(Debug, Size, ConstIterable, MutIterable, RandomAccess, Sequence)]
struct Ring<T>(VecDeque<T>);

// Wrapping an immutable type: no `MutIterable` to forward.
#[derive(Size, ConstIterable, RandomAccess, Sequence)]
struct Frozen(List<char>);

// Nested newtypes forward through each other.
#[derive(Size, ConstIterable, RandomAccess, Sequence)]
struct Outer(Scores);

static_assertions::assert_impl_all!(Scores: Sequence, seqcap::Container<u32>);
static_assertions::assert_not_impl_any!(Scores: MutIterable);
static_assertions::assert_impl_all!(Ring<i64>: Iterable, Sequence);
static_assertions::assert_not_impl_any!(Frozen: MutIterable);

#[test]
fn test_derive_sequence_concrete() {
    let scores = Scores(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 6]);

    assert_eq!(scores.size(), 11);
    assert!(Sequence::contains(&scores, &5));
    assert_eq!(scores.index(&4), 4);
    assert_eq!(scores.count(&6), 2);
    assert_eq!(scores.index(&42), -1);
    assert_eq!(scores.count(&42), 0);
    assert_eq!(scores.at(9), &9);
}

#[test]
fn test_derive_sequence_generic() {
    let mut ring = Ring(VecDeque::from(vec![3_i64, 1, 3]));

    for value in ring.iter_mut() {
        *value *= 10;
    }

    assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![30, 10, 30]);
    assert_eq!(ring.count(&30), 2);
    assert_eq!(ring.index(&10), 1);
    assert_eq!(ring.last(), Some(&30));
}

#[test]
fn test_derive_wrapping_list() {
    let frozen = Frozen("abcab".chars().collect());

    assert_eq!(frozen.count(&'a'), 2);
    assert_eq!(frozen.index(&'c'), 2);
    assert_eq!(frozen.reversed().collect::<String>(), "bacba");
}

#[test]
fn test_derive_nested_and_view() {
    let outer = Outer(Scores(vec![5, 4, 5]));
    let view = SequenceView::new(&outer);

    assert_eq!(view.size(), 3);
    assert_eq!(view.count(&5), 2);
    assert_eq!(view.index(&4), 1);
    assert!(!view.contains(&0));
}

/// Counts every call that reaches its own lookups instead of the defaults.
struct Tally {
    items: Vec<u8>,
    calls: Cell<usize>,
}

impl Tally {
    fn new(items: Vec<u8>) -> Self {
        Self {
            items,
            calls: Cell::new(0),
        }
    }

    fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl Size for Tally {
    fn size(&self) -> usize {
        self.items.len()
    }
}

impl ConstIterable for Tally {
    type Item = u8;
    type Cursor<'a>
        = slice::Iter<'a, u8>
    where
        Self: 'a;

    fn iter(&self) -> Self::Cursor<'_> {
        self.items.as_slice().iter()
    }
}

impl RandomAccess for Tally {
    type Item = u8;

    fn at(&self, index: usize) -> &u8 {
        &self.items[index]
    }
}

impl Sequence for Tally {
    fn contains(&self, value: &Element<Self>) -> bool {
        self.hit();
        self.items.contains(value)
    }

    fn position(&self, value: &Element<Self>) -> Option<usize> {
        self.hit();
        self.items.iter().position(|v| v == value)
    }

    fn count(&self, value: &Element<Self>) -> usize {
        self.hit();
        self.items.iter().filter(|v| *v == value).count()
    }

    fn index_between(&self, value: &Element<Self>, from: usize, to: usize) -> Result<usize> {
        self.hit();
        let len = self.items.len();
        let window = self
            .items
            .get(from..to)
            .ok_or(Error::InvalidRange { from, to, len })?;
        window
            .iter()
            .position(|v| v == value)
            .map(|i| from + i)
            .ok_or(Error::ValueNotFound)
    }

    fn checked_at(&self, index: usize) -> Result<&Element<Self>> {
        self.hit();
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(Error::IndexTooHigh { index, len })
    }
}

#[derive(Size, ConstIterable, RandomAccess, Sequence)]
struct Tallied(Tally);

#[test]
fn test_derive_forwards_overrides() -> Result<()> {
    let tallied = Tallied(Tally::new(vec![7, 8, 7, 9]));
    let calls = || tallied.0.calls.get();

    assert!(Sequence::contains(&tallied, &9));
    assert_eq!(calls(), 1);
    assert_eq!(tallied.position(&8), Some(1));
    assert_eq!(calls(), 2);
    // `index` reaches the inner `position` override.
    assert_eq!(tallied.index(&7), 0);
    assert_eq!(calls(), 3);
    assert_eq!(tallied.count(&7), 2);
    assert_eq!(calls(), 4);
    assert_eq!(tallied.index_between(&7, 1, 4)?, 2);
    assert_eq!(calls(), 5);
    assert_eq!(tallied.checked_at(3)?, &9);
    assert_eq!(calls(), 6);
    assert!(matches!(
        tallied.checked_at(4),
        Err(Error::IndexTooHigh { index: 4, len: 4 })
    ));
    assert_eq!(calls(), 7);

    // And through a view over the wrapper.
    let view = SequenceView::new(&tallied);
    assert_eq!(view.count(&9), 1);
    assert_eq!(calls(), 8);

    Ok(())
}
