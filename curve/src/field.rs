//! Arithmetic modulo a prime.
//!
//! The same type serves the coordinate field `F_p` of a curve and the scalar
//! field `Z_n` of its prime-order group. Inputs to `add` must already be
//! reduced; every other operation accepts any value.

use num_bigint::BigUint;
use num_traits::Zero;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Wraps a prime modulus. Primality is not checked.
    pub fn new(modulus: BigUint) -> Self {
        PrimeField { modulus }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether `a` is a canonical element, i.e. `0 <= a < modulus`.
    #[inline]
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.modulus
    }

    #[inline]
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let sum = a + b;
        if sum >= self.modulus {
            sum - &self.modulus
        } else {
            sum
        }
    }

    #[inline]
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a >= b {
            let diff = a - b;
            if self.contains(&diff) {
                diff
            } else {
                self.reduce(&diff)
            }
        } else {
            self.neg(&(b - a))
        }
    }

    /// Accepts unreduced input; the result is always canonical.
    #[inline]
    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);
        if a.is_zero() {
            BigUint::zero()
        } else {
            &self.modulus - a
        }
    }

    #[inline]
    pub fn double(&self, a: &BigUint) -> BigUint {
        self.add(a, a)
    }

    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    #[inline]
    pub fn mul_small(&self, a: &BigUint, k: u32) -> BigUint {
        (a * k) % &self.modulus
    }

    #[inline]
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Multiplicative inverse via Fermat's little theorem, `a^(m-2) mod m`.
    ///
    /// Returns `None` when `a` is congruent to zero.
    pub fn inverse(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return None;
        }
        let exponent = &self.modulus - 2u32;
        Some(a.modpow(&exponent, &self.modulus))
    }
}
