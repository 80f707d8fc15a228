//! Domain parameters of short-Weierstrass curves `y^2 = x^3 + a*x + b`.

use num_bigint::BigUint;
use num_traits::Num;

// NIST P-256 (SP 800-186 / SEC 2 secp256r1)
const P256_P: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";
const P256_A: &str = "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc";
const P256_B: &str = "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b";
const P256_GX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
const P256_GY: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";
const P256_N: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

/// Parameters of a prime-order curve with cofactor 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Field prime
    pub p: BigUint,
    pub a: BigUint,
    pub b: BigUint,
    /// Base point x-coordinate
    pub gx: BigUint,
    /// Base point y-coordinate
    pub gy: BigUint,
    /// Order of the group generated by the base point
    pub n: BigUint,
}

impl CurveParams {
    /// NIST P-256.
    pub fn p256() -> Self {
        CurveParams {
            p: hex(P256_P),
            a: hex(P256_A),
            b: hex(P256_B),
            gx: hex(P256_GX),
            gy: hex(P256_GY),
            n: hex(P256_N),
        }
    }

    /// `y^2 = x^3 + 2x + 2` over `F_17` with base point `(5, 1)` of order 19.
    ///
    /// Far too small for any security; its tiny order makes degenerate
    /// signing values (`r == 0`, nonce zero) frequent enough to test.
    pub fn toy() -> Self {
        CurveParams {
            p: BigUint::from(17u32),
            a: BigUint::from(2u32),
            b: BigUint::from(2u32),
            gx: BigUint::from(5u32),
            gy: BigUint::from(1u32),
            n: BigUint::from(19u32),
        }
    }
}

fn hex(digits: &str) -> BigUint {
    BigUint::from_str_radix(digits, 16).expect("curve constants are valid hex")
}
