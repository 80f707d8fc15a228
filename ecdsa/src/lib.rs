//! ECDSA over a prime-order elliptic curve group.
//!
//! This library implements key generation, signing and verification using:
//! - Any group implementing [`curve::CurveGroup`], NIST P-256 by default
//! - SHA-256 for message digests
//! - A caller-provided cryptographically secure RNG for keys and nonces
//!
//! Keys and signatures convert to and from text in a caller-chosen base;
//! see [`codec`].
//!
//! # Example
//!
//! ```
//! use ecdsa::{Ecdsa, Radix, WeierstrassCurve, codec};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let curve = WeierstrassCurve::p256();
//! let ecdsa = Ecdsa::new(&curve);
//! let mut rng = StdRng::from_os_rng();
//!
//! // Generate a key pair and sign a message
//! let keys = ecdsa.generate_keys(&mut rng).expect("keygen failed");
//! let signature = ecdsa.sign(&mut rng, b"Send $100 to Bob now!", keys.private_key()).expect("signing failed");
//!
//! // Ship the public key and signature as hex text
//! let public_text = codec::serialize_public_key(&curve, keys.public_key(), Radix::HEX);
//! let signature_text = codec::serialize_signature(&signature, Radix::HEX);
//!
//! // Verify on the other side
//! let public_key = codec::deserialize_public_key(&curve, &public_text, Radix::HEX).expect("bad key");
//! let signature = codec::deserialize_signature(&signature_text, Radix::HEX).expect("bad signature");
//! assert!(ecdsa.verify(b"Send $100 to Bob now!", &public_key, &signature));
//! ```
//!
//! # Security Considerations
//!
//! - Nonces are random, not RFC 6979 deterministic: a weak RNG leaks the key
//! - Arithmetic is not constant time
//! - Verification reports only `true` or `false`, never why a signature failed

pub mod codec;
mod config;
mod constants;
mod context;
mod errors;
mod keys;
mod signatures;


pub use config::Config;
pub use constants::DEFAULT_MAX_SIGN_ATTEMPTS;
pub use context::Ecdsa;
pub use curve::{Affine, BigUint, CurveGroup, FormatError, Radix, WeierstrassCurve};
pub use errors::Error;
pub use keys::KeyPair;
pub use signatures::Signature;
