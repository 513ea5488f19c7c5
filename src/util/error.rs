use derive_more::{Display, Error};

/// An index was outside of the valid range for the collection it was used with. Point accesses
/// accept indices in `0..len`, while insertions also accept `len` itself.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A half-open range was inverted, or extended past the end of the collection it was used with.
/// The range is reported after resolving its bounds, so `start..=end` is reported as
/// `start..end + 1`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Range {start}..{end} out of bounds for collection with {len} elements!")]
pub struct RangeOutOfBounds {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}
