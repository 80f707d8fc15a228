use core::fmt::Debug;

use num_bigint::BigUint;

use crate::errors::FormatError;
use crate::radix::Radix;

/// Group-arithmetic capability over a fixed prime-order curve group.
///
/// Implementors are immutable once constructed, so a single instance can be
/// shared by reference between threads.
pub trait CurveGroup {
    type Point: Clone + Debug + PartialEq + Eq;

    /// Order `n` of the group generated by the base point.
    fn order(&self) -> &BigUint;

    /// Fixed generator `G`.
    fn base_point(&self) -> &Self::Point;

    fn scalar_mult(&self, scalar: &BigUint, point: &Self::Point) -> Self::Point;

    /// `scalar * G`. Implementations may override this with a precomputed table.
    #[inline]
    fn mul_base(&self, scalar: &BigUint) -> Self::Point {
        self.scalar_mult(scalar, self.base_point())
    }

    fn add(&self, a: &Self::Point, b: &Self::Point) -> Self::Point;

    /// Affine x-coordinate, or `None` for the identity.
    fn affine_x(&self, point: &Self::Point) -> Option<BigUint>;

    fn point_to_text(&self, point: &Self::Point, radix: Radix) -> String;

    fn text_to_point(&self, text: &str, radix: Radix) -> Result<Self::Point, FormatError>;
}
