use std::fmt::{self, Debug, Formatter};
use std::iter::{FusedIterator, Rev};
use std::slice;
use std::vec;

use super::AmortizedDeque;

// All iterators walk the outgoing buffer backwards, then the incoming buffer forwards, which is
// exactly the logical order. Neither buffer is rebalanced along the way.

impl<T> IntoIterator for AmortizedDeque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            outgoing: self.outgoing.into_iter().rev(),
            incoming: self.incoming.into_iter(),
        }
    }
}

/// An owned iterator over the values of an [`AmortizedDeque`], from front to back.
pub struct IntoIter<T> {
    pub(crate) outgoing: Rev<vec::IntoIter<T>>,
    pub(crate) incoming: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.outgoing.next().or_else(|| self.incoming.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.incoming.next_back().or_else(|| self.outgoing.next_back())
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.outgoing.len() + self.incoming.len()
    }
}

impl<'a, T> IntoIterator for &'a AmortizedDeque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            outgoing: self.outgoing.iter().rev(),
            incoming: self.incoming.iter(),
        }
    }
}

/// A borrowed iterator over the values of an [`AmortizedDeque`], from front to back.
///
/// The iterator holds a shared borrow of the AmortizedDeque, so the AmortizedDeque can't be
/// modified until the iterator is dropped.
pub struct Iter<'a, T> {
    pub(crate) outgoing: Rev<slice::Iter<'a, T>>,
    pub(crate) incoming: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.outgoing.next().or_else(|| self.incoming.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.incoming.next_back().or_else(|| self.outgoing.next_back())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.outgoing.len() + self.incoming.len()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            outgoing: self.outgoing.clone(),
            incoming: self.incoming.clone(),
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> IntoIterator for &'a mut AmortizedDeque<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            outgoing: self.outgoing.iter_mut().rev(),
            incoming: self.incoming.iter_mut(),
        }
    }
}

/// A mutable borrowed iterator over the values of an [`AmortizedDeque`], from front to back.
pub struct IterMut<'a, T> {
    pub(crate) outgoing: Rev<slice::IterMut<'a, T>>,
    pub(crate) incoming: slice::IterMut<'a, T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.outgoing.next().or_else(|| self.incoming.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.incoming.next_back().or_else(|| self.outgoing.next_back())
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.outgoing.len() + self.incoming.len()
    }
}
