use num_bigint::BigUint;
use num_traits::Zero;

use crate::radix::{Radix, FIELD_DELIMITER};

/// Affine point on a short-Weierstrass curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
///
/// Points carry no reference to their curve; arithmetic goes through
/// [`crate::WeierstrassCurve`]. Points cannot be built from outside the
/// crate: external input enters only through
/// [`crate::CurveGroup::text_to_point`], which validates it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Affine {
    /// The x-coordinate of the point
    pub(crate) x: BigUint,
    /// The y-coordinate of the point
    pub(crate) y: BigUint,
    /// Whether this point is the point at infinity (identity element)
    pub(crate) is_infinity: bool,
}

impl Affine {
    /// The point at infinity (identity element), with both coordinates zero.
    pub fn infinity() -> Self {
        Affine {
            x: BigUint::zero(),
            y: BigUint::zero(),
            is_infinity: true,
        }
    }

    /// Create a new affine point. The caller is responsible for the
    /// coordinates lying on the curve.
    pub(crate) fn new(x: BigUint, y: BigUint) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// The affine x-coordinate, or `None` for the point at infinity.
    #[inline]
    pub fn x(&self) -> Option<&BigUint> {
        (!self.is_infinity).then_some(&self.x)
    }

    /// The affine y-coordinate, or `None` for the point at infinity.
    #[inline]
    pub fn y(&self) -> Option<&BigUint> {
        (!self.is_infinity).then_some(&self.y)
    }

    /// Encodes the point as `"<x>:<y>"`. The point at infinity encodes as `"0:0"`.
    pub fn to_text(&self, radix: Radix) -> String {
        format!(
            "{}{}{}",
            radix.format(&self.x),
            FIELD_DELIMITER,
            radix.format(&self.y)
        )
    }
}
