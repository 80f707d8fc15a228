//! Error types for the ECDSA implementation.

use curve::FormatError;
use thiserror::Error;

/// Errors that can occur during key generation, signing and deserialization.
///
/// Verification never fails with an error: every rejected signature is
/// reported as `false`, whatever the reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The secure random source failed to produce bytes.
    #[error("secure randomness unavailable: {0}")]
    Randomness(String),
    /// Every signing attempt produced `r == 0` or `s == 0`.
    ///
    /// Only a faulty RNG can cause this in practice.
    #[error("signing exhausted {0} attempts on degenerate values")]
    ExhaustedRetries(usize),
    /// Text could not be parsed as a key or signature.
    #[error(transparent)]
    Format(#[from] FormatError),
}
