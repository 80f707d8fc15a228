//! Key pairs and key generation.

use core::fmt::{self, Debug, Formatter};

use curve::{CurveGroup, random_below};
use num_bigint::BigUint;
use rand::TryCryptoRng;

use crate::context::Ecdsa;
use crate::errors::Error;

/// A private scalar `d` together with its public point `Q = d * G`.
///
/// The private scalar must be kept secret; the `Debug` output redacts it.
#[derive(Clone)]
pub struct KeyPair<P> {
    private_key: BigUint,
    public_key: P,
}

impl<P> KeyPair<P> {
    /// Pairs a private scalar with its public point. The caller is
    /// responsible for `public_key == private_key * G`; use
    /// [`Ecdsa::key_pair_from_private`] to derive it instead.
    pub fn new(private_key: BigUint, public_key: P) -> Self {
        KeyPair {
            private_key,
            public_key,
        }
    }

    #[inline]
    pub fn private_key(&self) -> &BigUint {
        &self.private_key
    }

    #[inline]
    pub fn public_key(&self) -> &P {
        &self.public_key
    }
}

impl<P: Debug> Debug for KeyPair<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

impl<C: CurveGroup> Ecdsa<'_, C> {
    /// Generates a key pair with `d` drawn uniformly from `[0, n)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Randomness`] if `rng` fails to produce bytes.
    pub fn generate_keys<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<KeyPair<C::Point>, Error> {
        let private_key = random_below(rng, self.curve.order())
            .map_err(|err| Error::Randomness(err.to_string()))?;
        Ok(self.key_pair_from_private(private_key))
    }

    /// Derives the public point for a known private scalar.
    pub fn key_pair_from_private(&self, private_key: BigUint) -> KeyPair<C::Point> {
        let public_key = self.curve.mul_base(&private_key);
        KeyPair::new(private_key, public_key)
    }
}
