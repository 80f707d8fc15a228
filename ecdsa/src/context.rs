use curve::{CurveGroup, PrimeField};

use crate::config::Config;

/// ECDSA over a fixed curve group.
///
/// The context borrows the group-arithmetic capability, so one curve built
/// at startup can back any number of contexts and threads. Key generation
/// is in [`crate::keys`]; signing and verification are in
/// [`crate::signatures`].
///
/// # Example
///
/// ```
/// use ecdsa::{Ecdsa, WeierstrassCurve};
/// use rand::rngs::OsRng;
///
/// let curve = WeierstrassCurve::p256();
/// let ecdsa = Ecdsa::new(&curve);
///
/// let keys = ecdsa.generate_keys(&mut OsRng).expect("keygen");
/// let sig = ecdsa.sign(&mut OsRng, b"hello", keys.private_key()).expect("sign");
/// assert!(ecdsa.verify(b"hello", keys.public_key(), &sig));
/// ```
#[derive(Clone, Debug)]
pub struct Ecdsa<'a, C: CurveGroup> {
    pub(crate) curve: &'a C,
    /// Arithmetic modulo the group order
    pub(crate) scalars: PrimeField,
    pub(crate) config: Config,
}

impl<'a, C: CurveGroup> Ecdsa<'a, C> {
    pub fn new(curve: &'a C) -> Self {
        Self::with_config(curve, Config::default())
    }

    pub fn with_config(curve: &'a C, config: Config) -> Self {
        Ecdsa {
            curve,
            scalars: PrimeField::new(curve.order().clone()),
            config,
        }
    }

    #[inline]
    pub fn curve(&self) -> &'a C {
        self.curve
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
