//! Signature type, signing and verification.

use curve::{CurveGroup, random_below};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::TryCryptoRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::context::Ecdsa;
use crate::errors::Error;

/// An ECDSA signature `(r, s)`.
///
/// Signatures produced by [`Ecdsa::sign`] have both components in
/// `[1, n)`. Signatures built with [`Signature::new`] or deserialized from
/// text are untrusted; [`Ecdsa::verify`] range-checks them before use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    #[inline]
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    #[inline]
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

/// SHA-256 of `message`, read as a big-endian integer.
///
/// The digest is not truncated to the bit length of the group order.
pub(crate) fn hash_message(message: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&Sha256::digest(message))
}

impl<C: CurveGroup> Ecdsa<'_, C> {
    /// Signs `message` with `private_key`.
    ///
    /// Each attempt draws a fresh nonce `k` from `rng` and computes
    /// `r = x(k * G) mod n` and `s = k^-1 * (H(m) + d * r) mod n`.
    /// Attempts yielding `r == 0` or `s == 0` are discarded.
    ///
    /// # Errors
    ///
    /// - [`Error::Randomness`] if `rng` fails; this is never retried.
    /// - [`Error::ExhaustedRetries`] if every one of
    ///   [`crate::Config::max_sign_attempts`] attempts was degenerate.
    pub fn sign<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        message: &[u8],
        private_key: &BigUint,
    ) -> Result<Signature, Error> {
        let digest = hash_message(message);
        let max_attempts = self.config.max_sign_attempts.get();

        for attempt in 1..=max_attempts {
            if let Some(signature) = self.sign_attempt(rng, &digest, private_key)? {
                return Ok(signature);
            }
            debug!(attempt, max_attempts, "degenerate signature, retrying with a fresh nonce");
        }

        Err(Error::ExhaustedRetries(max_attempts))
    }

    /// One signing attempt; `None` when the nonce produced a degenerate value.
    fn sign_attempt<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        digest: &BigUint,
        private_key: &BigUint,
    ) -> Result<Option<Signature>, Error> {
        let zn = &self.scalars;
        let nonce = random_below(rng, self.curve.order())
            .map_err(|err| Error::Randomness(err.to_string()))?;

        // A zero nonce maps to the identity, which has no x-coordinate.
        let Some(x) = self.curve.affine_x(&self.curve.mul_base(&nonce)) else {
            return Ok(None);
        };
        let r = zn.reduce(&x);
        if r.is_zero() {
            return Ok(None);
        }

        let Some(nonce_inv) = zn.inverse(&nonce) else {
            return Ok(None);
        };
        let s = zn.mul(&nonce_inv, &zn.reduce(&(digest + private_key * &r)));
        if s.is_zero() {
            return Ok(None);
        }

        Ok(Some(Signature { r, s }))
    }

    /// Verifies `signature` over `message` against `public_key`.
    ///
    /// Checks `r == x(u1 * G + u2 * Q) mod n` with `c = s^-1`,
    /// `u1 = H(m) * c` and `u2 = r * c`. Components outside `[0, n)`, a zero
    /// `s`, a result at infinity and a plain mismatch all yield `false`;
    /// the caller cannot tell them apart.
    pub fn verify(&self, message: &[u8], public_key: &C::Point, signature: &Signature) -> bool {
        let zn = &self.scalars;
        let Signature { r, s } = signature;

        if !zn.contains(r) || !zn.contains(s) {
            debug!("signature component out of range");
            return false;
        }

        let Some(c) = zn.inverse(s) else {
            return false;
        };

        let digest = hash_message(message);
        let u1 = zn.mul(&digest, &c);
        let u2 = zn.mul(r, &c);

        let point = self.curve.add(
            &self.curve.mul_base(&u1),
            &self.curve.scalar_mult(&u2, public_key),
        );

        match self.curve.affine_x(&point) {
            Some(x) => zn.reduce(&x) == *r,
            None => false,
        }
    }
}
