//! Text encoding of keys and signatures in a caller-chosen base.
//!
//! - private key: the scalar as a numeral, e.g. `"bb072d57...621d"` in hex
//! - public key: whatever the curve defines; `"<x>:<y>"` for [`curve::WeierstrassCurve`]
//! - signature: `"<r>:<s>"`
//!
//! Decoding is purely textual. An out-of-range private key or signature
//! component parses fine and is left to the signer or verifier.

use curve::{CurveGroup, FIELD_DELIMITER, FormatError, Radix, split_fields};
use num_bigint::BigUint;

use crate::signatures::Signature;

pub fn serialize_private_key(private_key: &BigUint, radix: Radix) -> String {
    radix.format(private_key)
}

pub fn deserialize_private_key(text: &str, radix: Radix) -> Result<BigUint, FormatError> {
    radix.parse(text)
}

pub fn serialize_public_key<C: CurveGroup>(curve: &C, public_key: &C::Point, radix: Radix) -> String {
    curve.point_to_text(public_key, radix)
}

/// Parses a public point, rejecting text that does not describe a point on `curve`.
pub fn deserialize_public_key<C: CurveGroup>(
    curve: &C,
    text: &str,
    radix: Radix,
) -> Result<C::Point, FormatError> {
    curve.text_to_point(text, radix)
}

pub fn serialize_signature(signature: &Signature, radix: Radix) -> String {
    format!(
        "{}{}{}",
        radix.format(signature.r()),
        FIELD_DELIMITER,
        radix.format(signature.s())
    )
}

/// Parses `"<r>:<s>"`.
///
/// # Errors
///
/// [`FormatError::FieldCount`] unless the text holds exactly one `:`, and
/// [`FormatError::InvalidNumeral`] if either field is not a numeral in `radix`.
pub fn deserialize_signature(text: &str, radix: Radix) -> Result<Signature, FormatError> {
    let [r, s] = split_fields::<2>(text)?;
    Ok(Signature::new(radix.parse(r)?, radix.parse(s)?))
}
