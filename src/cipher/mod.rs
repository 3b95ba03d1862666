//! # Cryptographic Operations Module
//!
//! The two cryptographic stages of the engine plus the randomness they consume:
//!
//! - [`Derive`]: PBKDF2-HMAC-SHA256 turning a password and salt into a key
//! - [`AesGcm`]: AES-256-GCM authenticated encryption under that key
//! - [`RandomSource`]: injected capability producing salts and nonces
//!
//! Key derivation and the cipher are independent of each other and of the
//! container layout; [`Cipher`] ties a derived key to the cipher for one
//! encrypt or decrypt call.

mod aes_gcm;
mod derive;
pub mod random;

pub use self::aes_gcm::AesGcm;
pub use derive::Derive;
pub use random::{RandomSource, SystemRandom};

use crate::config::{NONCE_SIZE, SALT_SIZE};
use crate::error::Result;
use crate::secret::Password;

/// AES-256-GCM keyed from a password and salt.
///
/// Lives for a single operation; the derived key is dropped (and zeroized)
/// together with it.
pub struct Cipher {
    aes: AesGcm,
}

impl Cipher {
    /// Derives the key for `password` and `salt` and initialises the cipher.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::CryptoUnavailable`] from derivation or cipher setup.
    pub fn new(password: &Password, salt: &[u8; SALT_SIZE]) -> Result<Self> {
        let key = Derive::derive(password.as_bytes(), salt)?;
        Ok(Self { aes: AesGcm::new(&key)? })
    }

    /// Same as [`Cipher::new`] with a non-standard PBKDF2 iteration count.
    pub(crate) fn with_rounds(password: &Password, salt: &[u8; SALT_SIZE], rounds: u32) -> Result<Self> {
        let key = Derive::derive_with_rounds(password.as_bytes(), salt, rounds)?;
        Ok(Self { aes: AesGcm::new(&key)? })
    }

    #[inline]
    pub fn encrypt(&self, plaintext: &[u8], nonce: &[u8; NONCE_SIZE]) -> Result<Vec<u8>> {
        self.aes.encrypt(plaintext, nonce)
    }

    #[inline]
    pub fn decrypt(&self, ciphertext: &[u8], nonce: &[u8; NONCE_SIZE]) -> Result<Vec<u8>> {
        self.aes.decrypt(ciphertext, nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_same_password_and_salt_interoperate() {
        let salt = [4u8; SALT_SIZE];
        let nonce = [5u8; NONCE_SIZE];

        let sealed = Cipher::new(&Password::new("pw"), &salt).unwrap().encrypt(b"data", &nonce).unwrap();
        let opened = Cipher::new(&Password::new("pw"), &salt).unwrap().decrypt(&sealed, &nonce).unwrap();

        assert_eq!(opened, b"data");
    }

    #[test]
    fn test_different_salt_fails_authentication() {
        let nonce = [5u8; NONCE_SIZE];
        let sealed = Cipher::new(&Password::new("pw"), &[4u8; SALT_SIZE]).unwrap().encrypt(b"data", &nonce).unwrap();
        let result = Cipher::new(&Password::new("pw"), &[6u8; SALT_SIZE]).unwrap().decrypt(&sealed, &nonce);

        assert_eq!(result.unwrap_err(), Error::AuthenticationFailed);
    }
}
