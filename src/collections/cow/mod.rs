//! A module containing [`CopyOnWriteBox`] and the [`SharedPtr`] trait it is generic over.
//!
//! [`RcBox`] and [`ArcBox`] are the two provided flavours. RcBox is the cheaper of the two and
//! should be preferred unless boxes are sent between threads.
//!
//! [`CopyOnWriteBox`] is also re-exported under the parent module.

mod cow_box;
mod shared_ptr;

pub use cow_box::*;
pub use shared_ptr::*;
