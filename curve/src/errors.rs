//! Error types for text parsing of scalars and curve points.

use thiserror::Error;

/// Errors produced when converting text into integers or curve points.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The numeric base is outside `2..=36`.
    #[error("unsupported radix: {0}")]
    UnsupportedRadix(u32),
    /// The text is empty or contains a digit that is invalid in the base.
    #[error("invalid numeral for the requested radix")]
    InvalidNumeral,
    /// The text does not split into the expected number of `:`-delimited fields.
    #[error("expected {expected} ':'-delimited fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    /// A coordinate is not reduced modulo the field prime.
    #[error("coordinate out of range")]
    CoordinateOutOfRange,
    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,
}
