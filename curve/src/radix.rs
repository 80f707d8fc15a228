//! Radix text encoding of arbitrary-precision integers.

use num_bigint::BigUint;
use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::errors::FormatError;

/// Delimiter between the fields of a multi-component text encoding.
pub const FIELD_DELIMITER: char = ':';

/// A validated numeric base for text (de)serialization.
///
/// Digits above 9 use the letters `a..z`, so bases beyond 36 have no
/// encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Self = Radix(2);
    pub const DECIMAL: Self = Radix(10);
    pub const HEX: Self = Radix(16);

    /// Creates a radix, rejecting bases outside `2..=36`.
    pub fn new(base: u32) -> Result<Self, FormatError> {
        if (2..=36).contains(&base) {
            Ok(Radix(base))
        } else {
            Err(FormatError::UnsupportedRadix(base))
        }
    }

    #[inline]
    pub fn base(&self) -> u32 {
        self.0
    }

    /// Encodes `value` as lowercase digits in this base, without prefix.
    pub fn format(&self, value: &BigUint) -> String {
        value.to_str_radix(self.0)
    }

    /// Parses an unsigned numeral in this base.
    ///
    /// Signs and empty input are rejected.
    pub fn parse(&self, text: &str) -> Result<BigUint, FormatError> {
        if text.is_empty() || text.starts_with(['+', '-']) {
            return Err(FormatError::InvalidNumeral);
        }
        BigUint::from_str_radix(text, self.0).map_err(|_| FormatError::InvalidNumeral)
    }
}

impl TryFrom<u32> for Radix {
    type Error = FormatError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        Radix::new(base)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

/// Splits `text` on [`FIELD_DELIMITER`] and requires exactly `N` fields.
pub fn split_fields<const N: usize>(text: &str) -> Result<[&str; N], FormatError> {
    let fields: Vec<&str> = text.split(FIELD_DELIMITER).collect();
    let found = fields.len();
    fields
        .try_into()
        .map_err(|_| FormatError::FieldCount { expected: N, found })
}
