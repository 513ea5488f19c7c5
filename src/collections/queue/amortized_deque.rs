use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;
use std::ops::{Bound, Index, IndexMut, RangeBounds};
use std::vec;

use super::{Iter, IterMut};
#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, RangeOutOfBounds};
use crate::util::log::trace;
use crate::util::result::ResultExtension;

/// A first-in-first-out queue built from two stacks, with indexed access and range replacement.
///
/// Values are [`enqueue`](AmortizedDeque::enqueue)d onto an incoming buffer, which holds them in
/// logical order. [`dequeue`](AmortizedDeque::dequeue) pops from an outgoing buffer, which holds
/// its values in reverse so that the logical front is always the last element. When the outgoing
/// buffer runs dry, the whole incoming buffer is reversed into it in one go. Each value is moved by
/// such a rebalance at most once between being enqueued and dequeued, so the cost is amortized to
/// `O(1)` per value.
///
/// Rebalancing never changes the logical sequence, which always reads `reverse(outgoing) ++
/// incoming` from front to back. Every observable operation, including indexing and equality, is
/// defined against the logical sequence only.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the AmortizedDeque.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being inserted.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(1)`* |
/// | `dequeue` | `O(1)`*, `O(n)` |
/// | `get` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `replace_range` | `O(n+m)`, `O(n-i+m)`** |
/// | `insert` | `O(n)`, `O(n-i)`** |
/// | `remove` | `O(n)`, `O(n-i)`** |
/// | `append` | `O(1)`* |
/// | `contains` | `O(n)` |
///
/// \* Amortized. `dequeue` takes `O(n)` when it has to rebalance, which happens at most once per
/// `n` dequeues.
///
/// \** When the affected range lies entirely within the incoming buffer, no rebalancing is needed
/// and only the values after the range are moved.
pub struct AmortizedDeque<T> {
    /// Values awaiting dequeue, stored back-to-front.
    pub(crate) outgoing: Vec<T>,
    /// Values enqueued since the last rebalance, stored front-to-back.
    pub(crate) incoming: Vec<T>,
}

/// The physical location of a logical index.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Outgoing(usize),
    Incoming(usize),
}

impl<T> AmortizedDeque<T> {
    /// Creates a new, empty AmortizedDeque. Nothing is allocated until values are added.
    ///
    /// # Examples
    /// ```
    /// # use two_stack::collections::queue::AmortizedDeque;
    /// let deque: AmortizedDeque<u8> = AmortizedDeque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub const fn new() -> AmortizedDeque<T> {
        AmortizedDeque {
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Creates a new, empty AmortizedDeque that can take `cap` values before the incoming buffer
    /// reallocates.
    pub fn with_cap(cap: usize) -> AmortizedDeque<T> {
        AmortizedDeque {
            outgoing: Vec::new(),
            incoming: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of values in the AmortizedDeque.
    ///
    /// # Examples
    /// ```
    /// # use two_stack::deque;
    /// let mut deque = deque![1, 2, 3];
    /// deque.enqueue(4);
    /// assert_eq!(deque.len(), 4);
    /// ```
    pub fn len(&self) -> usize {
        self.outgoing.len() + self.incoming.len()
    }

    /// Returns true if the AmortizedDeque contains no values.
    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty() && self.incoming.is_empty()
    }

    /// Adds the provided value to the back of the AmortizedDeque.
    ///
    /// # Examples
    /// ```
    /// # use two_stack::collections::queue::AmortizedDeque;
    /// let mut deque = AmortizedDeque::new();
    /// deque.enqueue('a');
    /// deque.enqueue('b');
    /// assert_eq!(deque.back(), Some(&'b'));
    /// assert_eq!(deque.front(), Some(&'a'));
    /// ```
    pub fn enqueue(&mut self, value: T) {
        self.incoming.push(value);
    }

    /// Removes the value at the front of the AmortizedDeque and returns it, or returns [`None`] if
    /// the AmortizedDeque is empty.
    ///
    /// # Examples
    /// ```
    /// # use two_stack::collections::queue::AmortizedDeque;
    /// let mut deque = AmortizedDeque::new();
    /// deque.enqueue("a");
    /// deque.enqueue("b");
    /// assert_eq!(deque.dequeue(), Some("a"));
    /// deque.enqueue("c");
    /// assert_eq!(deque.dequeue(), Some("b"));
    /// assert_eq!(deque.dequeue(), Some("c"));
    /// assert_eq!(deque.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        if self.outgoing.is_empty() {
            self.rebalance();
        }
        self.outgoing.pop()
    }

    /// Returns a reference to the value at the front of the AmortizedDeque, if there is one.
    pub fn front(&self) -> Option<&T> {
        match self.outgoing.last() {
            Some(value) => Some(value),
            None => self.incoming.first(),
        }
    }

    /// Returns a mutable reference to the value at the front of the AmortizedDeque, if there is
    /// one.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.outgoing.last_mut() {
            Some(value) => Some(value),
            None => self.incoming.first_mut(),
        }
    }

    /// Returns a reference to the value at the back of the AmortizedDeque, if there is one.
    pub fn back(&self) -> Option<&T> {
        match self.incoming.last() {
            Some(value) => Some(value),
            None => self.outgoing.first(),
        }
    }

    /// Returns a mutable reference to the value at the back of the AmortizedDeque, if there is
    /// one.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.incoming.last_mut() {
            Some(value) => Some(value),
            None => self.outgoing.first_mut(),
        }
    }

    /// Returns a reference to the value at the provided `index`, counted from the front, panicking
    /// on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the AmortizedDeque.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the value at the provided `index`, counted from the front, returning
    /// an [`Err`] on a failure rather than panicking.
    ///
    /// # Examples
    /// ```
    /// # use two_stack::collections::queue::AmortizedDeque;
    /// let mut deque = AmortizedDeque::new();
    /// deque.enqueue("a");
    /// deque.enqueue("b");
    /// deque.dequeue();
    /// deque.enqueue("c");
    /// assert_eq!(deque.try_get(0), Ok(&"b"));
    /// assert_eq!(deque.try_get(1), Ok(&"c"));
    /// assert!(deque.try_get(2).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(match self.checked_slot(index)? {
            Slot::Outgoing(slot) => &self.outgoing[slot],
            Slot::Incoming(slot) => &self.incoming[slot],
        })
    }

    /// Returns a mutable reference to the value at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the AmortizedDeque.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the value at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(match self.checked_slot(index)? {
            Slot::Outgoing(slot) => &mut self.outgoing[slot],
            Slot::Incoming(slot) => &mut self.incoming[slot],
        })
    }

    /// Replaces the values in `range` with those produced by `replace_with`, shifting any following
    /// values to fit, panicking on a failure.
    ///
    /// This is the primitive that [`append`](AmortizedDeque::append),
    /// [`append_all`](AmortizedDeque::append_all), [`insert`](AmortizedDeque::insert),
    /// [`remove`](AmortizedDeque::remove), [`remove_range`](AmortizedDeque::remove_range) and
    /// [`remove_all`](AmortizedDeque::remove_all) are built on.
    ///
    /// # Panics
    /// Panics if the start of `range` is after its end, or if its end is after the end of the
    /// AmortizedDeque.
    ///
    /// # Examples
    /// ```
    /// # use two_stack::deque;
    /// let mut deque = deque![1, 2, 3, 4];
    /// deque.replace_range(1..3, [20, 25, 30]);
    /// assert_eq!(deque, deque![1, 20, 25, 30, 4]);
    /// ```
    pub fn replace_range<R, I>(&mut self, range: R, replace_with: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        self.try_replace_range(range, replace_with).throw()
    }

    /// Replaces the values in `range` with those produced by `replace_with`, returning an [`Err`]
    /// on a failure rather than panicking. The AmortizedDeque is left untouched on a failure.
    pub fn try_replace_range<R, I>(
        &mut self,
        range: R,
        replace_with: I,
    ) -> Result<(), RangeOutOfBounds>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        let (start, end) = self.checked_range(range)?;
        // Dropping the Splice finishes the replacement and drops the removed values.
        self.splice(start, end, replace_with).for_each(drop);
        Ok(())
    }

    /// Adds the provided value to the back of the AmortizedDeque, as a replacement of the empty
    /// range at its end.
    pub fn append(&mut self, value: T) {
        let len = self.len();
        self.replace_range(len..len, iter::once(value));
    }

    /// Adds all values produced by `values` to the back of the AmortizedDeque, in order.
    pub fn append_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let len = self.len();
        self.replace_range(len..len, values);
    }

    /// Inserts the provided value at the given index, so that it is found at `index` afterwards,
    /// panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the AmortizedDeque.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an [`Err`] on a failure rather
    /// than panicking. An `index` equal to the length appends the value.
    ///
    /// # Examples
    /// ```
    /// # use two_stack::deque;
    /// let mut deque = deque!['a', 'c'];
    /// assert!(deque.try_insert(1, 'b').is_ok());
    /// assert!(deque.try_insert(3, 'd').is_ok());
    /// assert!(deque.try_insert(5, 'f').is_err());
    /// assert_eq!(deque, deque!['a', 'b', 'c', 'd']);
    /// ```
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }
        self.splice(index, index, iter::once(value)).for_each(drop);
        Ok(())
    }

    /// Removes the value at the provided index and returns it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the AmortizedDeque.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the value at the provided index and returns it, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len();
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }
        let mut removed = self.splice(index, index + 1, iter::empty());
        removed.next().ok_or(IndexOutOfBounds { index, len })
    }

    /// Removes all values in `range`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the start of `range` is after its end, or if its end is after the end of the
    /// AmortizedDeque.
    pub fn remove_range<R: RangeBounds<usize>>(&mut self, range: R) {
        self.try_remove_range(range).throw()
    }

    /// Removes all values in `range`, returning an [`Err`] on a failure rather than panicking.
    pub fn try_remove_range<R: RangeBounds<usize>>(
        &mut self,
        range: R,
    ) -> Result<(), RangeOutOfBounds> {
        self.try_replace_range(range, iter::empty())
    }

    /// Removes all values from the AmortizedDeque, as a replacement of its full range.
    pub fn remove_all(&mut self) {
        self.replace_range(.., iter::empty());
    }

    /// Removes all values from the AmortizedDeque. An alias of
    /// [`remove_all`](AmortizedDeque::remove_all).
    pub fn clear(&mut self) {
        self.remove_all();
    }

    /// Ensures that at least `extra` more values can be enqueued without reallocating.
    pub fn reserve(&mut self, extra: usize) {
        self.incoming.reserve(extra);
    }

    /// Returns an iterator over references to all values, from front to back. Iterating never
    /// rebalances the AmortizedDeque.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to all values, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> AmortizedDeque<T> {
    /// Returns the index of the first value equal to `item`, counted from the front.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|value| value == item)
    }

    /// Returns true if any value in the AmortizedDeque is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T> AmortizedDeque<T> {
    /// Moves the incoming buffer into the empty outgoing buffer, reversing it. The emptied
    /// incoming buffer takes over the old outgoing allocation.
    pub(crate) fn rebalance(&mut self) {
        debug_assert!(self.outgoing.is_empty());
        if self.incoming.is_empty() { return; }

        trace!("queue", "rebalancing {} values into the outgoing buffer", self.incoming.len());
        mem::swap(&mut self.outgoing, &mut self.incoming);
        self.outgoing.reverse();
    }

    /// Flattens both buffers into the incoming buffer, in logical order. Afterwards, the outgoing
    /// buffer is empty and every logical index equals its physical index.
    pub(crate) fn canonicalize(&mut self) {
        if self.outgoing.is_empty() { return; }

        trace!(
            "queue",
            "canonicalizing {} outgoing and {} incoming values",
            self.outgoing.len(),
            self.incoming.len(),
        );
        self.outgoing.reverse();
        self.outgoing.append(&mut self.incoming);
        mem::swap(&mut self.outgoing, &mut self.incoming);
    }

    /// Splices the logical range `start..end`, which must already be checked. Ranges that lie
    /// entirely within the incoming buffer are spliced in place; anything else is canonicalized
    /// first.
    pub(crate) fn splice<I>(
        &mut self,
        start: usize,
        end: usize,
        replace_with: I,
    ) -> vec::Splice<'_, I::IntoIter>
    where
        I: IntoIterator<Item = T>,
    {
        if start < self.outgoing.len() {
            self.canonicalize();
        }

        let offset = self.outgoing.len();
        self.incoming.splice((start - offset)..(end - offset), replace_with)
    }

    /// Maps a logical index onto the buffer holding it.
    fn checked_slot(&self, index: usize) -> Result<Slot, IndexOutOfBounds> {
        let outgoing = self.outgoing.len();
        if index < outgoing {
            Ok(Slot::Outgoing(outgoing - 1 - index))
        } else if index - outgoing < self.incoming.len() {
            Ok(Slot::Incoming(index - outgoing))
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    /// Resolves `range` into a half-open `(start, end)` pair within `0..=len`.
    pub(crate) fn checked_range<R: RangeBounds<usize>>(
        &self,
        range: R,
    ) -> Result<(usize, usize), RangeOutOfBounds> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => Some(start),
            Bound::Excluded(&start) => start.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1),
            Bound::Excluded(&end) => Some(end),
            Bound::Unbounded => Some(len),
        };

        match (start, end) {
            (Some(start), Some(end)) if start <= end && end <= len => Ok((start, end)),
            (start, end) => Err(RangeOutOfBounds {
                start: start.unwrap_or(usize::MAX),
                end: end.unwrap_or(usize::MAX),
                len,
            }),
        }
    }
}

impl<T> Index<usize> for AmortizedDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for AmortizedDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for AmortizedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.incoming.extend(iter);
    }
}

impl<T> FromIterator<T> for AmortizedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        AmortizedDeque::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> From<Vec<T>> for AmortizedDeque<T> {
    /// Builds an AmortizedDeque with `value[0]` at the front. All values start out in the outgoing
    /// buffer, ready for dequeueing.
    fn from(mut value: Vec<T>) -> Self {
        value.reverse();
        AmortizedDeque {
            outgoing: value,
            incoming: Vec::new(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for AmortizedDeque<T> {
    fn from(value: [T; N]) -> Self {
        AmortizedDeque {
            outgoing: value.into_iter().rev().collect(),
            incoming: Vec::new(),
        }
    }
}

impl<T> From<AmortizedDeque<T>> for Vec<T> {
    fn from(mut value: AmortizedDeque<T>) -> Self {
        value.canonicalize();
        value.incoming
    }
}

impl<T> Default for AmortizedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for AmortizedDeque<T> {
    fn clone(&self) -> Self {
        AmortizedDeque {
            outgoing: self.outgoing.clone(),
            incoming: self.incoming.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for AmortizedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AmortizedDeque<T> {}

impl<T: Hash> Hash for AmortizedDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for AmortizedDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmortizedDeque")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for AmortizedDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Creates an [`AmortizedDeque`] containing the provided values, with the first value at the front.
///
/// # Examples
/// ```
/// # use two_stack::deque;
/// let mut deque = deque![1, 2, 3];
/// assert_eq!(deque.dequeue(), Some(1));
/// assert_eq!(deque.len(), 2);
/// ```
#[macro_export]
macro_rules! deque {
    () => {
        $crate::collections::queue::AmortizedDeque::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::collections::queue::AmortizedDeque::from([$($value),+])
    };
}
