//! Internal logging helpers. The crate only emits through the [`log`] facade and never installs a
//! logger of its own.

/// Trace-level record tagged with the collection it came from.
macro_rules! trace {
    ($collection:literal, $($arg:tt)+) => {
        ::log::trace!(target: concat!("two_stack::", $collection), $($arg)+)
    };
}

pub(crate) use trace;
