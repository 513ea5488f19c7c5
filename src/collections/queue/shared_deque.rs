use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::RangeBounds;

use super::{AmortizedDeque, Iter};
use crate::collections::cow::RcBox;
use crate::util::error::{IndexOutOfBounds, RangeOutOfBounds};
use crate::util::result::ResultExtension;

/// An [`AmortizedDeque`] stored in an [`RcBox`], so that cloning it is `O(1)`.
///
/// Clones share one AmortizedDeque until either of them is modified. The first modification made
/// through a shared SharedDeque clones the AmortizedDeque (`O(n)`) and detaches from its siblings;
/// after that, modifications happen in place with the costs listed on [`AmortizedDeque`]. Reading
/// never clones.
///
/// Because every modification may need to clone the contents, modifying methods require
/// `T: Clone`.
///
/// # Examples
/// ```
/// # use two_stack::collections::queue::SharedDeque;
/// let mut jobs = SharedDeque::from_iter(["build", "test"]);
/// let snapshot = jobs.clone();
/// assert!(jobs.shares_with(&snapshot));
///
/// jobs.enqueue("deploy");
/// assert_eq!(jobs.dequeue(), Some("build"));
///
/// assert!(!jobs.shares_with(&snapshot));
/// assert_eq!(snapshot.len(), 2);
/// assert_eq!(snapshot.front(), Some(&"build"));
/// ```
pub struct SharedDeque<T> {
    pub(crate) inner: RcBox<AmortizedDeque<T>>,
}

impl<T> SharedDeque<T> {
    /// Creates a new, empty SharedDeque.
    pub fn new() -> SharedDeque<T> {
        SharedDeque {
            inner: RcBox::new(AmortizedDeque::new()),
        }
    }

    /// Returns the number of values in the SharedDeque.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the SharedDeque contains no values.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a reference to the value at the front of the SharedDeque, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.inner.front()
    }

    /// Returns a reference to the value at the back of the SharedDeque, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.inner.back()
    }

    /// Returns a reference to the value at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SharedDeque.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the value at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.inner.try_get(index)
    }

    /// Returns an iterator over references to all values, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }

    /// Returns a reference to the underlying AmortizedDeque.
    pub fn as_deque(&self) -> &AmortizedDeque<T> {
        self.inner.read()
    }

    /// Returns true if `self` and `other` still share their contents.
    pub fn shares_with(&self, other: &SharedDeque<T>) -> bool {
        self.inner.ptr_eq(&other.inner)
    }

    /// Returns true if no other SharedDeque shares this one's contents, meaning that the next
    /// modification won't clone.
    pub fn is_unique(&mut self) -> bool {
        self.inner.is_unique()
    }
}

impl<T: Clone> SharedDeque<T> {
    /// Adds the provided value to the back of the SharedDeque.
    pub fn enqueue(&mut self, value: T) {
        self.inner.write().enqueue(value);
    }

    /// Removes the value at the front of the SharedDeque and returns it, or returns [`None`] if the
    /// SharedDeque is empty. An empty SharedDeque is never cloned by this.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.inner.write().dequeue()
    }

    /// Returns a mutable reference to the value at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SharedDeque.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the value at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking. Nothing is cloned on a failure.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len();
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }
        self.inner.write().try_get_mut(index)
    }

    /// Replaces the values in `range` with those produced by `replace_with`, panicking on a
    /// failure.
    ///
    /// # Panics
    /// Panics if the start of `range` is after its end, or if its end is after the end of the
    /// SharedDeque.
    pub fn replace_range<R, I>(&mut self, range: R, replace_with: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        self.try_replace_range(range, replace_with).throw()
    }

    /// Replaces the values in `range` with those produced by `replace_with`, returning an [`Err`]
    /// on a failure rather than panicking. Nothing is cloned on a failure.
    pub fn try_replace_range<R, I>(
        &mut self,
        range: R,
        replace_with: I,
    ) -> Result<(), RangeOutOfBounds>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        let (start, end) = self.inner.checked_range(range)?;
        self.inner.write().try_replace_range(start..end, replace_with)
    }

    /// Inserts the provided value at the given index, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the SharedDeque.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an [`Err`] on a failure rather
    /// than panicking. Nothing is cloned on a failure.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }
        self.inner.write().try_insert(index, value)
    }

    /// Removes the value at the provided index and returns it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SharedDeque.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the value at the provided index and returns it, returning an [`Err`] on a failure
    /// rather than panicking. Nothing is cloned on a failure.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len();
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }
        self.inner.write().try_remove(index)
    }

    /// Removes all values from the SharedDeque. A shared SharedDeque is detached by swapping in a
    /// new, empty AmortizedDeque rather than by cloning.
    pub fn clear(&mut self) {
        if self.inner.is_unique() {
            self.inner.write().remove_all();
        } else {
            self.inner.set(AmortizedDeque::new());
        }
    }

    /// Returns the underlying AmortizedDeque, cloning it only if it is still shared.
    pub fn into_deque(self) -> AmortizedDeque<T> {
        self.inner.into_inner()
    }
}

impl<T> Default for SharedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SharedDeque<T> {
    fn clone(&self) -> Self {
        SharedDeque {
            inner: self.inner.clone(),
        }
    }
}

impl<T> From<AmortizedDeque<T>> for SharedDeque<T> {
    fn from(value: AmortizedDeque<T>) -> Self {
        SharedDeque {
            inner: RcBox::new(value),
        }
    }
}

impl<T> FromIterator<T> for SharedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SharedDeque::from(AmortizedDeque::from_iter(iter))
    }
}

impl<'a, T> IntoIterator for &'a SharedDeque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for SharedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for SharedDeque<T> {}

impl<T: Hash> Hash for SharedDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<T: Debug> Debug for SharedDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedDeque")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .field("shares", &self.inner.share_count())
            .finish()
    }
}

impl<T: Debug> Display for SharedDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_deque(), f)
    }
}
