//! Error taxonomy for range parsing and search.
//!
//! Every error is detected before the search starts and surfaced
//! synchronously; nothing fails mid-search. Coordinate arithmetic is `i64`
//! end to end, which keeps every intermediate value at puzzle scale
//! (coordinates and radii up to ~1e8) far below the overflow boundary, so
//! there is no runtime overflow variant.

use thiserror::Error;

/// Malformed range-set input, rejected by [`RangeSet::new`] before any
/// search state is built.
///
/// [`RangeSet::new`]: crate::RangeSet::new
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The range set holds no records; the search is undefined without at
    /// least one range.
    #[error("range set is empty; the search needs at least one range")]
    EmptySet,

    /// A record carries a negative radius.
    #[error("range {index} has negative radius {radius}")]
    NegativeRadius {
        /// Zero-based position of the offending record.
        index: usize,
        /// The rejected radius value.
        radius: i64,
    },
}

/// Malformed text at the record-parsing layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A line did not match the `pos=<x,y,z>, r=R` record format.
    #[error("line {line_no}: malformed range record `{record}` (expected `pos=<x,y,z>, r=R`)")]
    Line {
        /// One-based source line number.
        line_no: usize,
        /// The offending line, as read.
        record: String,
    },
}
