//! Collection types for first-in-first-out workloads, and the copy-on-write wrapper that gives
//! shared storage value semantics.
//!
//! # Method
//! Storage is delegated to [`Vec`], which the types here treat as a plain stack. All ordering,
//! indexing and sharing logic lives on top of it.

#[cfg(feature = "cow")]
pub mod cow;
#[cfg(feature = "queue")]
pub mod queue;

#[cfg(feature = "cow")]
#[doc(inline)]
pub use cow::CopyOnWriteBox;
#[cfg(feature = "queue")]
#[doc(inline)]
pub use queue::{AmortizedDeque, SharedDeque};
