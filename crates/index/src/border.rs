//! Range endpoints for index queries.

use quill_core::Bytes;

/// One endpoint of a range query: a bound value plus whether the bound
/// itself belongs to the range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Border {
    pub bound: Bytes,
    pub inclusive: bool,
}

impl Border {
    /// Creates an endpoint.
    pub fn new(bound: impl Into<Bytes>, inclusive: bool) -> Self {
        Self {
            bound: bound.into(),
            inclusive,
        }
    }

    /// An inclusive endpoint; `lo = hi = inclusive(v)` is a point query.
    pub fn inclusive(bound: impl Into<Bytes>) -> Self {
        Self::new(bound, true)
    }

    /// An exclusive endpoint.
    pub fn exclusive(bound: impl Into<Bytes>) -> Self {
        Self::new(bound, false)
    }
}
