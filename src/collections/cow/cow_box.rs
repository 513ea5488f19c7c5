use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;
use std::rc::Rc;
use std::sync::Arc;

use super::SharedPtr;
use crate::util::log::trace;

/// A [`CopyOnWriteBox`] backed by an [`Rc`], for values that stay on one thread.
pub type RcBox<T> = CopyOnWriteBox<T, Rc<T>>;

/// A [`CopyOnWriteBox`] backed by an [`Arc`], for values that are shared between threads.
pub type ArcBox<T> = CopyOnWriteBox<T, Arc<T>>;

/// A value with value semantics, stored behind a shared handle.
///
/// Cloning a CopyOnWriteBox only clones the handle, so every clone shares the same value until one
/// of them is written to. [`read`](CopyOnWriteBox::read) never copies. Before
/// [`write`](CopyOnWriteBox::write) hands out a mutable reference, it checks whether the handle is
/// shared and, if so, moves this box onto a private clone of the value. Siblings keep the old
/// handle and never observe the write.
///
/// Once a box holds the only handle to its value, further writes happen in place.
///
/// # Examples
/// ```
/// # use two_stack::collections::cow::RcBox;
/// let original = RcBox::new(vec![1, 2, 3]);
/// let mut copy = original.clone();
/// assert!(copy.ptr_eq(&original));
///
/// copy.write().push(4);
/// assert_eq!(*original, [1, 2, 3]);
/// assert_eq!(*copy, [1, 2, 3, 4]);
/// assert!(!copy.ptr_eq(&original));
/// ```
pub struct CopyOnWriteBox<T, P: SharedPtr<T> = Rc<T>> {
    pub(crate) storage: P,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, P: SharedPtr<T>> CopyOnWriteBox<T, P> {
    /// Creates a new CopyOnWriteBox holding the only handle to `value`.
    pub fn new(value: T) -> CopyOnWriteBox<T, P> {
        CopyOnWriteBox {
            storage: P::new(value),
            _phantom: PhantomData,
        }
    }

    /// Returns a shared reference to the current value. This never copies.
    pub fn read(&self) -> &T {
        &self.storage
    }

    /// Replaces the value without looking at the old one. Any siblings keep the old value.
    pub fn set(&mut self, value: T) {
        self.storage = P::new(value);
    }

    /// Returns true if no other box shares this box's value.
    pub fn is_unique(&mut self) -> bool {
        P::is_unique(&mut self.storage)
    }

    /// Returns true if both boxes share the same value, rather than equal values.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        P::ptr_eq(&self.storage, &other.storage)
    }

    /// Returns the number of boxes sharing this box's value, including this one.
    pub fn share_count(&self) -> usize {
        P::strong_count(&self.storage)
    }
}

impl<T: Clone, P: SharedPtr<T>> CopyOnWriteBox<T, P> {
    /// Returns a mutable reference to the value, first moving this box onto a private clone if the
    /// value is shared.
    ///
    /// # Examples
    /// ```
    /// # use two_stack::collections::cow::RcBox;
    /// let mut a = RcBox::new(String::from("Hello"));
    /// let b = a.clone();
    /// a.write().push_str(", world!");
    /// assert_eq!(a.read(), "Hello, world!");
    /// assert_eq!(b.read(), "Hello");
    /// ```
    pub fn write(&mut self) -> &mut T {
        if !P::is_unique(&mut self.storage) {
            trace!(
                "cow",
                "value shared by {} handles, cloning before write",
                P::strong_count(&self.storage),
            );
            self.storage = P::new(T::clone(&self.storage));
        }

        match P::get_mut(&mut self.storage) {
            Some(value) => value,
            // A handle created above, or one that just passed the uniqueness check, can't have
            // been shared since: doing so would need a borrow of self.
            None => unreachable!("copy-on-write storage was shared during a write"),
        }
    }

    /// Returns the value, moving it out if this box is the only one holding it and cloning it
    /// otherwise.
    pub fn into_inner(self) -> T {
        match P::try_unwrap(self.storage) {
            Ok(value) => value,
            Err(shared) => T::clone(&shared),
        }
    }
}

impl<T, P: SharedPtr<T>> Clone for CopyOnWriteBox<T, P> {
    fn clone(&self) -> Self {
        CopyOnWriteBox {
            storage: self.storage.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, P: SharedPtr<T>> Deref for CopyOnWriteBox<T, P> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.read()
    }
}

impl<T, P: SharedPtr<T>> AsRef<T> for CopyOnWriteBox<T, P> {
    fn as_ref(&self) -> &T {
        self.read()
    }
}

impl<T, P: SharedPtr<T>> Borrow<T> for CopyOnWriteBox<T, P> {
    fn borrow(&self) -> &T {
        self.read()
    }
}

impl<T, P: SharedPtr<T>> From<T> for CopyOnWriteBox<T, P> {
    fn from(value: T) -> Self {
        CopyOnWriteBox::new(value)
    }
}

impl<T: Default, P: SharedPtr<T>> Default for CopyOnWriteBox<T, P> {
    fn default() -> Self {
        CopyOnWriteBox::new(T::default())
    }
}

impl<T: PartialEq, P: SharedPtr<T>> PartialEq for CopyOnWriteBox<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.read() == other.read()
    }
}

impl<T: Eq, P: SharedPtr<T>> Eq for CopyOnWriteBox<T, P> {}

impl<T: Hash, P: SharedPtr<T>> Hash for CopyOnWriteBox<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.read().hash(state);
    }
}

impl<T: Debug, P: SharedPtr<T>> Debug for CopyOnWriteBox<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyOnWriteBox")
            .field("value", self.read())
            .field("shares", &self.share_count())
            .finish()
    }
}

impl<T: Display, P: SharedPtr<T>> Display for CopyOnWriteBox<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.read(), f)
    }
}
