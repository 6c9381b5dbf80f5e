use proptest::prelude::*;
use seqcap::{Error, List, RandomAccess, Sequence, SequenceView, Size};

// Small alphabet so that values repeat and both hits and misses are common.
fn values() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0_u8..8, 0..64)
}

proptest! {
    #[test]
    fn contains_agrees_with_index(items in values(), value in 0_u8..10) {
        let list = List::new(items);
        prop_assert_eq!(Sequence::contains(&list, &value), list.index(&value) != -1);
    }

    #[test]
    fn count_zero_iff_not_found(items in values(), value in 0_u8..10) {
        let list = List::new(items);
        prop_assert_eq!(list.count(&value) == 0, list.index(&value) == -1);
        prop_assert_eq!(list.count(&value) >= 1, Sequence::contains(&list, &value));
    }

    #[test]
    fn index_is_smallest_match(items in values(), value in 0_u8..10) {
        let list = List::new(items.clone());
        let index = list.index(&value);
        if index != -1 {
            let i = index as usize;
            prop_assert!(i < list.size());
            prop_assert_eq!(list.at(i), &value);
            prop_assert!(items[..i].iter().all(|v| *v != value));
        }
        prop_assert_eq!(list.position(&value), usize::try_from(index).ok());
    }

    #[test]
    fn count_is_multiplicity(items in values(), value in 0_u8..10) {
        let expected = items.iter().filter(|v| **v == value).count();
        let list = List::new(items);
        prop_assert_eq!(list.count(&value), expected);
    }

    #[test]
    fn view_matches_referent(items in values(), value in 0_u8..10) {
        let view = SequenceView::new(&items);
        prop_assert_eq!(view.size(), items.len());
        prop_assert_eq!(view.contains(&value), items.contains(&value));
        prop_assert_eq!(view.index(&value), Sequence::index(&items, &value));
        prop_assert_eq!(view.count(&value), Sequence::count(&items, &value));
    }

    #[test]
    fn full_range_search_matches_position(items in values(), value in 0_u8..10) {
        let list = List::new(items);
        match list.index_between(&value, 0, list.size()) {
            Ok(i) => prop_assert_eq!(Some(i), list.position(&value)),
            Err(Error::ValueNotFound) => prop_assert_eq!(list.position(&value), None),
            Err(e) => prop_assert!(false, "unexpected error: {e}"),
        }
    }

    #[test]
    fn checked_at_agrees_with_at(items in values(), index in 0_usize..80) {
        let list = List::new(items);
        match list.checked_at(index) {
            Ok(v) => prop_assert_eq!(v, list.at(index)),
            Err(Error::IndexTooHigh { len, .. }) => {
                prop_assert!(index >= list.size());
                prop_assert_eq!(len, list.size());
            }
            Err(e) => prop_assert!(false, "unexpected error: {e}"),
        }
    }

    #[test]
    fn reversed_is_reverse(items in values()) {
        let list = List::new(items.clone());
        let reversed: Vec<u8> = list.reversed().copied().collect();
        let expected: Vec<u8> = items.into_iter().rev().collect();
        prop_assert_eq!(reversed, expected);
    }
}
