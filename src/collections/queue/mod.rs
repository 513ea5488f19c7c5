//! A module containing [`AmortizedDeque`], [`SharedDeque`] and associated types.
//!
//! [`IntoIter`] provides owned iteration, while [`Iter`] and [`IterMut`] provide borrowed
//! iteration, all from front to back. [`SharedDeque`] is an AmortizedDeque behind a
//! [`CopyOnWriteBox`](crate::collections::cow::CopyOnWriteBox), for when clones should be cheap.
//!
//! [`AmortizedDeque`] and [`SharedDeque`] are also re-exported under the parent module.

mod amortized_deque;
mod iter;
mod shared_deque;
mod tests;

pub use amortized_deque::*;
pub use iter::*;
pub use shared_deque::*;
