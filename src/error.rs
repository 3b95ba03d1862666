//! Error taxonomy of the encryption engine.
//!
//! Every engine operation returns one of these three failures to its
//! immediate caller. Nothing is retried internally and no partial output
//! accompanies an error.

use thiserror::Error;

use crate::config::MIN_CONTAINER_SIZE;

/// Failures produced by key derivation, the cipher and the container codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input is too short to contain a salt and a nonce.
    ///
    /// Detected before any cryptographic work is done.
    #[error("invalid encrypted file format: expected at least {min} bytes, got {len}", min = MIN_CONTAINER_SIZE)]
    InvalidFormat {
        /// Length of the rejected input.
        len: usize,
    },

    /// The authentication tag did not verify.
    ///
    /// A wrong password and tampered data produce this same variant.
    #[error("decryption failed: wrong password or corrupted file")]
    AuthenticationFailed,

    /// A cryptographic primitive or the secure random source could not be used.
    #[error("cryptographic primitive unavailable: {0}")]
    CryptoUnavailable(&'static str),
}

/// Engine result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
