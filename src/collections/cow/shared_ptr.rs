use std::ops::Deref;
use std::rc::Rc;
use std::sync::Arc;

/// A reference-counted owning handle that can answer whether it is the only handle to its value.
///
/// Implemented for [`Rc`] and [`Arc`]. All methods take the handle explicitly rather than as a
/// receiver, so that they never shadow methods of the pointed-to value.
pub trait SharedPtr<T>: Clone + Deref<Target = T> {
    /// Moves `value` into a new allocation, owned by a single handle.
    fn new(value: T) -> Self;

    /// Returns true if `this` is the only handle that can reach its value. A `false` result may
    /// be spurious (for example, while weak references exist), but a `true` result is exact.
    fn is_unique(this: &mut Self) -> bool {
        Self::get_mut(this).is_some()
    }

    /// Returns a mutable reference to the value if `this` is unique, checking and borrowing in a
    /// single step.
    fn get_mut(this: &mut Self) -> Option<&mut T>;

    /// Returns true if both handles point to the same allocation.
    fn ptr_eq(this: &Self, other: &Self) -> bool;

    /// Returns the number of strong handles to the value, including `this`.
    fn strong_count(this: &Self) -> usize;

    /// Returns the value if `this` is the only handle to it, otherwise gives the handle back.
    fn try_unwrap(this: Self) -> Result<T, Self>;
}

impl<T> SharedPtr<T> for Rc<T> {
    fn new(value: T) -> Self {
        Rc::new(value)
    }

    fn get_mut(this: &mut Self) -> Option<&mut T> {
        Rc::get_mut(this)
    }

    fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(this, other)
    }

    fn strong_count(this: &Self) -> usize {
        Rc::strong_count(this)
    }

    fn try_unwrap(this: Self) -> Result<T, Self> {
        Rc::try_unwrap(this)
    }
}

impl<T> SharedPtr<T> for Arc<T> {
    fn new(value: T) -> Self {
        Arc::new(value)
    }

    // Arc::get_mut checks uniqueness with acquire ordering and hands out the reference in the same
    // call, so no other thread can clone the handle in between.
    fn get_mut(this: &mut Self) -> Option<&mut T> {
        Arc::get_mut(this)
    }

    fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(this, other)
    }

    fn strong_count(this: &Self) -> usize {
        Arc::strong_count(this)
    }

    fn try_unwrap(this: Self) -> Result<T, Self> {
        Arc::try_unwrap(this)
    }
}
