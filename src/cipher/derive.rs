//! # Key Derivation with PBKDF2
//!
//! Stretches a password into a 256-bit AES key using PBKDF2-HMAC-SHA256 with a
//! fixed work factor and a per-encryption random salt.
//!
//! ## Security Properties
//!
//! - **Salted**: a fresh 16-byte salt per encryption defeats precomputed tables
//! - **Slow**: 100 000 HMAC iterations raise the cost of every offline guess
//! - **Deterministic**: identical (password, salt) pairs always yield the same key

use hmac::Hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::config::{KEY_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
use crate::error::{Error, Result};
use crate::secret::DerivedKey;

/// Password-based key derivation.
///
/// Holds no state between calls; the type exists to mirror the other engine
/// stages and to give the derivation a home for its parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Derive;

impl Derive {
    /// Derives the AES-256 key for `password` and `salt`.
    ///
    /// The password may be empty. The salt length is fixed by its type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CryptoUnavailable`] if the PBKDF2 primitive rejects
    /// its output buffer. This does not happen with the built-in parameters.
    pub fn derive(password: &[u8], salt: &[u8; SALT_SIZE]) -> Result<DerivedKey> {
        Self::derive_with_rounds(password, salt, PBKDF2_ITERATIONS)
    }

    pub(crate) fn derive_with_rounds(password: &[u8], salt: &[u8], rounds: u32) -> Result<DerivedKey> {
        pbkdf2_sha256(password, salt, rounds).map(DerivedKey::new)
    }
}

/// PBKDF2-HMAC-SHA256 with an explicit iteration count.
///
/// Writes straight into the heap buffer that becomes the secret, so the key
/// never exists as a stack value.
fn pbkdf2_sha256(password: &[u8], salt: &[u8], rounds: u32) -> Result<Box<[u8; KEY_SIZE]>> {
    let mut key = Box::new([0u8; KEY_SIZE]);

    if pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, rounds, key.as_mut_slice()).is_err() {
        key.zeroize();
        return Err(Error::CryptoUnavailable("pbkdf2-hmac-sha256"));
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_answer_single_round() {
        // RFC 7914 section 11, first 32 bytes.
        let key = pbkdf2_sha256(b"passwd", b"salt", 1).unwrap();
        assert_eq!(hex::encode(key.as_slice()), "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc");
    }

    #[test]
    fn test_derived_key_holds_derivation_output() {
        let key = Derive::derive_with_rounds(b"passwd", b"salt", 1).unwrap();
        assert_eq!(hex::encode(key.expose_secret()), "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc");
    }

    #[test]
    fn test_derive_deterministic() {
        let salt = [7u8; SALT_SIZE];
        let first = Derive::derive(b"correct horse", &salt).unwrap();
        let second = Derive::derive(b"correct horse", &salt).unwrap();
        assert_eq!(first.expose_secret(), second.expose_secret());
    }

    #[test]
    fn test_derive_depends_on_salt_and_password() {
        let base = Derive::derive(b"password", &[0u8; SALT_SIZE]).unwrap();
        let other_salt = Derive::derive(b"password", &[1u8; SALT_SIZE]).unwrap();
        let other_password = Derive::derive(b"passwore", &[0u8; SALT_SIZE]).unwrap();

        assert_ne!(base.expose_secret(), other_salt.expose_secret());
        assert_ne!(base.expose_secret(), other_password.expose_secret());
    }

    #[test]
    fn test_derive_empty_password() {
        let key = Derive::derive(b"", &[0u8; SALT_SIZE]).unwrap();
        assert_ne!(key.expose_secret(), &[0u8; KEY_SIZE]);
    }
}
