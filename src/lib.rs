//! This crate provides a first-in-first-out queue built from two stacks, and the copy-on-write box
//! that lets shared storage behave like a plain value.
//!
//! # Queue
//! [`AmortizedDeque`](collections::queue::AmortizedDeque) keeps an incoming buffer for values
//! being enqueued and an outgoing buffer, stored in reverse, for values being dequeued. Values are
//! only ever moved between the two in whole batches, and only when the outgoing buffer runs out,
//! so both ends work in amortized `O(1)`. The queue also supports indexing from the front and
//! splicing arbitrary ranges, from which insertion and removal at any index are derived.
//!
//! # Copy-On-Write
//! Rust collections already have value semantics: cloning one copies its contents. Where that copy
//! is too expensive, [`CopyOnWriteBox`](collections::cow::CopyOnWriteBox) stores a value behind an
//! [`Rc`](std::rc::Rc) or [`Arc`](std::sync::Arc), so cloning only clones the handle. Writing
//! through a box that shares its value first moves the box onto a private copy, so no other box
//! ever sees the write. [`SharedDeque`](collections::queue::SharedDeque) combines the two.
//!
//! # Error Handling
//! Methods that can fail come in pairs. `try_` methods return a [`Result`] with a small error
//! struct that implements [`Error`](std::error::Error), while their counterparts panic with that
//! error's message, which is more ergonomic when the caller already knows the input is valid. An
//! empty queue isn't an error: [`dequeue`](collections::queue::AmortizedDeque::dequeue) returns
//! an [`Option`].
//!
//! # Logging
//! Rebalancing, canonicalization and copy-on-write clones are recorded at trace level through the
//! [`log`] facade, under the `two_stack::queue` and `two_stack::cow` targets.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
