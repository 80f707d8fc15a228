//! Prime-order elliptic curve groups over arbitrary-precision integers.
//!
//! This crate provides the group-arithmetic capability used by the ECDSA
//! crate: modular field arithmetic, affine and Jacobian points on
//! short-Weierstrass curves, the NIST P-256 domain parameters, radix text
//! encoding of integers and points, and uniform sampling below a bound.
//!
//! None of the arithmetic here runs in constant time.

mod affine;
mod errors;
mod field;
mod group;
mod params;
mod projective;
mod radix;
mod random;
mod weierstrass;

pub use affine::Affine;
pub use errors::FormatError;
pub use field::PrimeField;
pub use group::CurveGroup;
pub use num_bigint::BigUint;
pub use params::CurveParams;
pub use radix::{split_fields, Radix, FIELD_DELIMITER};
pub use random::random_below;
pub use weierstrass::WeierstrassCurve;
