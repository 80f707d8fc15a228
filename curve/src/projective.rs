use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::affine::Affine;
use crate::weierstrass::WeierstrassCurve;

/// Jacobian point on a short-Weierstrass curve.
/// Represents a point (X:Y:Z) where (x,y) = (X/Z^2, Y/Z^3).
/// The point at infinity is represented as (1:1:0).
#[derive(Clone, Debug)]
pub(crate) struct Projective {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl Projective {
    /// The point at infinity (identity element): (1:1:0)
    pub(crate) fn infinity() -> Self {
        Projective {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub(crate) fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert from affine coordinates.
    pub(crate) fn from_affine(point: &Affine) -> Self {
        if point.is_infinity() {
            return Self::infinity();
        }

        Projective {
            x: point.x.clone(),
            y: point.y.clone(),
            z: BigUint::one(),
        }
    }

    /// Convert to affine coordinates with a single field inversion.
    pub(crate) fn to_affine(&self, curve: &WeierstrassCurve) -> Affine {
        let fp = curve.field();
        let z_inv = match fp.inverse(&self.z) {
            Some(inv) => inv,
            None => return Affine::infinity(),
        };

        let z_inv2 = fp.square(&z_inv);
        let z_inv3 = fp.mul(&z_inv2, &z_inv);

        Affine::new(fp.mul(&self.x, &z_inv2), fp.mul(&self.y, &z_inv3))
    }

    /// Point doubling for a general `a` coefficient.
    ///
    /// S = 4*X*Y^2, M = 3*X^2 + a*Z^4
    /// X' = M^2 - 2*S, Y' = M*(S - X') - 8*Y^4, Z' = 2*Y*Z
    pub(crate) fn double(&self, curve: &WeierstrassCurve) -> Self {
        if self.is_infinity() {
            return self.clone();
        }

        let fp = curve.field();
        let yy = fp.square(&self.y);
        let yyyy = fp.square(&yy);
        let zz = fp.square(&self.z);

        let s = fp.mul_small(&fp.mul(&self.x, &yy), 4);
        let xx3 = fp.mul_small(&fp.square(&self.x), 3);
        let m = fp.add(&xx3, &fp.mul(curve.a(), &fp.square(&zz)));

        let x3 = fp.sub(&fp.square(&m), &fp.double(&s));
        let y3 = fp.sub(&fp.mul(&m, &fp.sub(&s, &x3)), &fp.mul_small(&yyyy, 8));
        let z3 = fp.double(&fp.mul(&self.y, &self.z));

        // A point with y = 0 has order two and doubles to (_:_:0).
        Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Full Jacobian addition, falling back to doubling for equal inputs.
    pub(crate) fn add(&self, other: &Self, curve: &WeierstrassCurve) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }

        let fp = curve.field();
        let z1_sq = fp.square(&self.z);
        let z2_sq = fp.square(&other.z);
        let z1_cu = fp.mul(&z1_sq, &self.z);
        let z2_cu = fp.mul(&z2_sq, &other.z);

        // U1 = X1*Z2^2, U2 = X2*Z1^2
        let u1 = fp.mul(&self.x, &z2_sq);
        let u2 = fp.mul(&other.x, &z1_sq);

        // S1 = Y1*Z2^3, S2 = Y2*Z1^3
        let s1 = fp.mul(&self.y, &z2_cu);
        let s2 = fp.mul(&other.y, &z1_cu);

        let h = fp.sub(&u2, &u1);
        let r = fp.sub(&s2, &s1);

        if h.is_zero() {
            return if r.is_zero() {
                self.double(curve)
            } else {
                Self::infinity()
            };
        }

        let h_sq = fp.square(&h);
        let h_cu = fp.mul(&h_sq, &h);
        let u1_h_sq = fp.mul(&u1, &h_sq);

        // X3 = R^2 - H^3 - 2*U1*H^2
        let x3 = fp.sub(&fp.sub(&fp.square(&r), &h_cu), &fp.double(&u1_h_sq));
        // Y3 = R*(U1*H^2 - X3) - S1*H^3
        let y3 = fp.sub(&fp.mul(&r, &fp.sub(&u1_h_sq, &x3)), &fp.mul(&s1, &h_cu));
        // Z3 = Z1*Z2*H
        let z3 = fp.mul(&fp.mul(&self.z, &other.z), &h);

        Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}
