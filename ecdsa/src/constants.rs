//! Constants used in the ECDSA implementation.

use core::num::NonZeroUsize;

/// Default upper bound on signing attempts.
///
/// An attempt is discarded when its nonce yields `r == 0` or `s == 0`.
/// With a working RNG over a 256-bit group the chance of even one discarded
/// attempt is about `2^-255`, so reaching this bound means the RNG is broken.
pub const DEFAULT_MAX_SIGN_ATTEMPTS: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(attempts) => attempts,
    None => panic!("attempt bound must be nonzero"),
};
