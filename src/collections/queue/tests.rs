#![cfg(test)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::hash::{BuildHasher, RandomState};
use std::iter;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;
use crate::deque;
use crate::util::alloc::{CountedClone, CountedDrop};
use crate::util::panic::assert_panics;

/// Builds a deque with values in both buffers: `0..split` in the outgoing buffer and `split..len`
/// in the incoming buffer.
fn split_deque(split: usize, len: usize) -> AmortizedDeque<usize> {
    let mut deque = AmortizedDeque::from_iter(0..split);
    deque.extend(split..len);
    assert_eq!(deque.outgoing.len(), split);
    assert_eq!(deque.incoming.len(), len - split);
    deque
}

#[test]
fn test_fifo_order() {
    let mut deque = AmortizedDeque::new();
    for i in 1..=3 {
        deque.enqueue(i);
    }

    assert_eq!(deque.dequeue(), Some(1));
    assert_eq!(deque.dequeue(), Some(2));
    assert_eq!(deque.dequeue(), Some(3));
    assert_eq!(deque.dequeue(), None, "An empty deque should dequeue None.");
    assert_eq!(deque.dequeue(), None, "Dequeueing when empty should be repeatable.");
    assert!(deque.is_empty());
}

#[test]
fn test_rebalance() {
    let mut deque = AmortizedDeque::new();
    deque.extend(0..4);
    assert!(deque.outgoing.is_empty(), "Enqueueing should only touch the incoming buffer.");

    assert_eq!(deque.dequeue(), Some(0));
    assert_eq!(
        deque.outgoing,
        [3, 2, 1],
        "Dequeueing from an empty outgoing buffer should reverse the incoming buffer into it."
    );
    assert!(deque.incoming.is_empty());

    deque.enqueue(4);
    assert_eq!(deque.dequeue(), Some(1));
    assert_eq!(
        deque.incoming,
        [4],
        "Dequeueing with a non-empty outgoing buffer shouldn't rebalance."
    );

    let dequeued: Vec<_> = iter::from_fn(|| deque.dequeue()).collect();
    assert_eq!(dequeued, [2, 3, 4]);
}

#[test]
fn test_index_consistency() {
    let mut deque = AmortizedDeque::new();
    deque.enqueue("a");
    deque.enqueue("b");
    assert_eq!(deque.dequeue(), Some("a"));
    deque.enqueue("c");

    assert_eq!(deque[0], "b");
    assert_eq!(deque[1], "c");
    assert_eq!(deque.len(), 2);

    let deque = split_deque(3, 7);
    for i in 0..7 {
        assert_eq!(
            deque[i], i,
            "Indexing should map onto both buffers in logical order."
        );
    }

    let mut canonical = deque.clone();
    canonical.canonicalize();
    assert!(canonical.outgoing.is_empty());
    assert_eq!(
        canonical, deque,
        "Canonicalizing shouldn't change the logical sequence."
    );
    for i in 0..7 {
        assert_eq!(canonical[i], deque[i]);
    }
}

#[test]
fn test_bounds() {
    let deque = split_deque(2, 4);

    assert_eq!(
        deque.try_get(4),
        Err(IndexOutOfBounds { index: 4, len: 4 }),
        "Indexing at len should fail."
    );
    assert_eq!(AmortizedDeque::<u8>::new().try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(deque.try_get(usize::MAX).map_err(|e| e.len), Err(4));

    assert_panics!({ deque.get(4); }, "Index 4 out of bounds for collection with 4 elements!");
    assert_panics!({ let _ = deque[10]; });
}

#[test]
fn test_front_back_and_mut() {
    let mut deque = split_deque(2, 4);
    assert_eq!(deque.front(), Some(&0));
    assert_eq!(deque.back(), Some(&3));

    *deque.front_mut().unwrap() = 10;
    *deque.back_mut().unwrap() = 30;
    deque[1] += 10;
    *deque.get_mut(2) += 10;
    assert_eq!(deque, deque![10, 11, 12, 30]);

    let mut only_incoming = AmortizedDeque::new();
    only_incoming.extend([1, 2]);
    assert_eq!(only_incoming.front(), Some(&1), "Peeking shouldn't need a rebalance.");
    assert!(only_incoming.outgoing.is_empty(), "Peeking should never rebalance.");

    let only_outgoing = deque![1, 2];
    assert_eq!(only_outgoing.back(), Some(&2));

    let empty = AmortizedDeque::<u8>::new();
    assert_eq!(empty.front(), None);
    assert_eq!(empty.back(), None);
}

#[test]
fn test_replace_range() {
    let mut deque = split_deque(3, 6);
    deque.replace_range(2..4, [20, 30, 35]);
    assert_eq!(deque, deque![0, 1, 20, 30, 35, 4, 5]);

    let mut deque = split_deque(3, 6);
    deque.replace_range(4..=5, []);
    assert_eq!(deque, deque![0, 1, 2, 3]);
    assert_eq!(
        deque.outgoing.len(),
        3,
        "Ranges within the incoming buffer shouldn't canonicalize."
    );

    let mut deque = split_deque(3, 6);
    deque.replace_range(.., ['a', 'b'].map(|c| c as usize));
    assert_eq!(deque, deque![97, 98]);

    let mut deque = split_deque(3, 6);
    assert_eq!(
        deque.try_replace_range(4..2, []),
        Err(RangeOutOfBounds { start: 4, end: 2, len: 6 }),
        "Inverted ranges should fail."
    );
    assert_eq!(
        deque.try_replace_range(5..7, []),
        Err(RangeOutOfBounds { start: 5, end: 7, len: 6 }),
        "Ranges past the end should fail."
    );
    assert_eq!(
        deque.try_replace_range(..=6, []),
        Err(RangeOutOfBounds { start: 0, end: 7, len: 6 }),
        "Inclusive ranges should be reported as half-open."
    );
    assert!(deque.try_replace_range(6..6, []).is_ok(), "The empty range at the end is valid.");
    assert_eq!(deque, split_deque(3, 6), "A failed replacement shouldn't modify the deque.");

    assert_panics!({ split_deque(1, 2).replace_range(1..3, [0]); });
}

#[test]
fn test_derived_operations() {
    let mut deque = split_deque(2, 5);
    deque.remove_all();
    assert_eq!(deque.len(), 0, "Removing all should leave nothing behind.");
    assert!(deque.is_empty());

    let mut deque = split_deque(2, 5);
    deque.append(99);
    assert_eq!(deque.len(), 6);
    assert_eq!(deque[deque.len() - 1], 99, "Appended values should be found at the back.");

    deque.append_all([100, 101]);
    assert_eq!(deque.back(), Some(&101));

    let original = split_deque(2, 5);
    for i in 0..=original.len() {
        let mut deque = original.clone();
        deque.insert(i, 42);
        assert_eq!(deque[i], 42);
        assert_eq!(deque.len(), original.len() + 1);
        assert_eq!(deque.remove(i), 42);
        assert_eq!(deque, original, "Inserting then removing should restore the sequence.");
    }

    let mut deque = split_deque(2, 5);
    assert_eq!(deque.try_insert(6, 0), Err(IndexOutOfBounds { index: 6, len: 5 }));
    assert_eq!(deque.try_remove(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(deque.remove(0), 0);
    assert_eq!(deque.remove(3), 4);
    assert_eq!(deque, deque![1, 2, 3]);

    let mut deque = split_deque(2, 5);
    deque.remove_range(1..3);
    assert_eq!(deque, deque![0, 3, 4]);
    assert!(deque.try_remove_range(2..4).is_err());
    deque.clear();
    assert_eq!(deque, deque![]);
}

#[test]
fn test_construction() {
    let literal = deque![1, 2, 3];
    assert_eq!(literal.outgoing, [3, 2, 1], "Literals should start out in the outgoing buffer.");
    assert!(literal.incoming.is_empty());

    assert_eq!(literal, AmortizedDeque::from(vec![1, 2, 3]));
    assert_eq!(literal, AmortizedDeque::from_iter(1..=3));
    assert_eq!(literal, [1, 2, 3].into_iter().collect::<AmortizedDeque<_>>());
    assert_eq!(Vec::from(split_deque(2, 4)), [0, 1, 2, 3]);
    assert_eq!(Vec::from(literal), [1, 2, 3]);

    let empty: AmortizedDeque<u8> = deque![];
    assert!(empty.is_empty());
    assert!(AmortizedDeque::<u8>::with_cap(8).incoming.capacity() >= 8);
    assert_eq!(AmortizedDeque::<u8>::default(), AmortizedDeque::new());
}

#[test]
fn test_iterators() {
    let mut deque = split_deque(2, 5);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    assert_eq!(deque.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
    assert_eq!(deque.iter().len(), 5);

    let before = (deque.outgoing.clone(), deque.incoming.clone());
    let _ = deque.iter().count();
    assert_eq!(
        (deque.outgoing.clone(), deque.incoming.clone()),
        before,
        "Iterating shouldn't rebalance."
    );

    for value in deque.iter_mut() {
        *value *= 2;
    }
    assert_eq!(deque, deque![0, 2, 4, 6, 8]);

    let restarted: Vec<_> = deque.iter().chain(deque.iter()).copied().collect();
    assert_eq!(restarted, [0, 2, 4, 6, 8, 0, 2, 4, 6, 8], "Iteration should be restartable.");

    let mut iter = deque.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_equality_and_hash() {
    let split = split_deque(2, 5);
    let literal = deque![0, 1, 2, 3, 4];
    assert_ne!(split.outgoing, literal.outgoing);
    assert_eq!(split, literal, "Equality should only depend on the logical sequence.");
    assert_ne!(split, deque![0, 1, 2, 3]);

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&split),
        state.hash_one(&literal),
        "Equal deques should produce the same hash."
    );

    assert_eq!(split.index_of(&3), Some(3));
    assert_eq!(split.index_of(&7), None);
    assert!(split.contains(&0));
    assert!(!split.contains(&5));
}

#[test]
fn test_formatting() {
    let deque = split_deque(1, 3);
    assert_eq!(format!("{deque}"), "[0, 1, 2]");
    assert_eq!(format!("{deque:?}"), "AmortizedDeque { contents: [0, 1, 2], len: 3 }");
}

#[test]
fn test_drop() {
    let counter = Rc::new(Cell::new(0));
    let values = || iter::repeat_with(|| CountedDrop::new(&counter)).take(4);
    let mut deque = AmortizedDeque::from_iter(values());
    deque.extend(values());

    deque.remove_range(2..6);
    assert_eq!(counter.get(), 4, "Replaced values should be dropped.");

    drop(deque.dequeue());
    assert_eq!(counter.get(), 5);

    drop(deque);
    assert_eq!(counter.get(), 8, "Dropping the deque should drop the remaining values.");
}

#[test]
fn test_shared_deque_isolation() {
    let mut original = SharedDeque::from_iter([1, 2, 3]);
    let copy = original.clone();
    assert!(original.shares_with(&copy));

    original.enqueue(4);
    assert!(!original.shares_with(&copy), "Modifying a shared deque should detach it.");
    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(original.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);

    assert_eq!(original.dequeue(), Some(1));
    assert_eq!(copy.front(), Some(&1));

    let mut cleared = copy.clone();
    cleared.clear();
    assert!(cleared.is_empty());
    assert_eq!(copy.len(), 3, "Clearing a copy shouldn't affect the original.");

    assert_eq!(copy.clone().into_deque(), deque![1, 2, 3]);
}

#[test]
fn test_shared_deque_minimal_copies() {
    let value = CountedClone::new(7);
    let mut deque = SharedDeque::from_iter([value.clone()]);
    let clones = value.clones();

    deque.enqueue(CountedClone::new(8));
    deque.insert(0, CountedClone::new(6));
    assert_eq!(value.clones(), clones, "A unique deque should be modified in place.");

    let copy = deque.clone();
    deque.get_mut(1).value = 70;
    assert_eq!(value.clones(), clones + 1, "Detaching should clone each value once.");
    assert_eq!(copy.get(1).value, 7);

    deque.remove(0);
    deque.replace_range(0..1, [CountedClone::new(1)]);
    assert_eq!(value.clones(), clones + 1, "A detached deque shouldn't clone again.");

    let mut shared = copy.clone();
    assert!(shared.try_remove(3).is_err());
    assert!(shared.try_insert(4, CountedClone::new(0)).is_err());
    assert!(shared.try_replace_range(2..1, []).is_err());
    assert!(shared.shares_with(&copy), "A failed modification shouldn't detach.");

    let mut empty: SharedDeque<CountedClone> = SharedDeque::new();
    let empty_copy = empty.clone();
    assert_eq!(empty.dequeue(), None);
    assert!(empty.shares_with(&empty_copy), "Dequeueing from an empty deque shouldn't detach.");
}

#[derive(Debug, Clone)]
enum Op {
    Enqueue(u8),
    Dequeue,
    Insert(usize, u8),
    Remove(usize),
    Replace(usize, usize, Vec<u8>),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u8>().prop_map(Op::Enqueue),
        3 => Just(Op::Dequeue),
        1 => (any::<usize>(), any::<u8>()).prop_map(|(i, v)| Op::Insert(i, v)),
        1 => any::<usize>().prop_map(Op::Remove),
        1 => (any::<usize>(), any::<usize>(), prop::collection::vec(any::<u8>(), 0..4))
            .prop_map(|(a, b, values)| Op::Replace(a, b, values)),
    ]
}

proptest! {
    #[test]
    fn prop_matches_reference(ops in prop::collection::vec(op(), 0..200)) {
        let mut deque = AmortizedDeque::new();
        let mut reference = VecDeque::new();

        for op in ops {
            match op {
                Op::Enqueue(value) => {
                    deque.enqueue(value);
                    reference.push_back(value);
                },
                Op::Dequeue => {
                    prop_assert_eq!(deque.dequeue(), reference.pop_front());
                },
                Op::Insert(index, value) => {
                    let index = index % (reference.len() + 1);
                    deque.insert(index, value);
                    reference.insert(index, value);
                },
                Op::Remove(index) => {
                    if reference.is_empty() {
                        prop_assert!(deque.try_remove(index).is_err());
                    } else {
                        let index = index % reference.len();
                        prop_assert_eq!(Some(deque.remove(index)), reference.remove(index));
                    }
                },
                Op::Replace(a, b, values) => {
                    let a = a % (reference.len() + 1);
                    let b = b % (reference.len() + 1);
                    let (start, end) = (a.min(b), a.max(b));
                    deque.replace_range(start..end, values.iter().copied());
                    reference.drain(start..end);
                    for (offset, value) in values.into_iter().enumerate() {
                        reference.insert(start + offset, value);
                    }
                },
            }

            prop_assert_eq!(deque.len(), reference.len());
            for (i, value) in reference.iter().enumerate() {
                prop_assert_eq!(&deque[i], value);
            }
            prop_assert!(deque.try_get(reference.len()).is_err());
        }

        prop_assert!(deque.into_iter().eq(reference));
    }

    #[test]
    fn prop_rebalance_is_transparent(
        first in prop::collection::vec(any::<u16>(), 0..50),
        second in prop::collection::vec(any::<u16>(), 0..50),
    ) {
        let mut deque = AmortizedDeque::from(first.clone());
        let mut dequeued = Vec::new();
        while let Some(value) = deque.dequeue() {
            dequeued.push(value);
        }
        prop_assert!(deque.outgoing.is_empty() && deque.incoming.is_empty());

        deque.extend(second.iter().copied());
        while let Some(value) = deque.dequeue() {
            dequeued.push(value);
        }

        let expected: Vec<_> = first.into_iter().chain(second).collect();
        prop_assert_eq!(dequeued, expected);
    }
}
