use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_SIGN_ATTEMPTS;

/// Tunables for an [`crate::Ecdsa`] context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Signing attempts allowed before [`crate::Error::ExhaustedRetries`].
    /// Zero is unrepresentable, so every `sign` draws at least one nonce.
    pub max_sign_attempts: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_sign_attempts: DEFAULT_MAX_SIGN_ATTEMPTS,
        }
    }
}
