use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::config::{NONCE_SIZE, TAG_SIZE};
use crate::error::{Error, Result};
use crate::secret::DerivedKey;

/// AES-256-GCM without associated data.
///
/// Output layout is `ciphertext || tag`. The nonce is supplied by the caller
/// and is never stored here.
pub struct AesGcm {
    inner: Aes256Gcm,
}

impl AesGcm {
    #[inline]
    pub fn new(key: &DerivedKey) -> Result<Self> {
        let inner = Aes256Gcm::new_from_slice(key.expose_secret()).map_err(|_| Error::CryptoUnavailable("aes-256-gcm"))?;
        Ok(Self { inner })
    }

    /// Encrypts `plaintext`, returning `plaintext.len() + TAG_SIZE` bytes.
    ///
    /// Empty plaintext is valid and yields a bare tag.
    #[inline]
    pub fn encrypt(&self, plaintext: &[u8], nonce: &[u8; NONCE_SIZE]) -> Result<Vec<u8>> {
        self.inner.encrypt(Nonce::from_slice(nonce), plaintext).map_err(|_| Error::CryptoUnavailable("aes-256-gcm"))
    }

    /// Verifies the trailing tag and decrypts.
    ///
    /// Inputs shorter than the tag, a wrong key and modified bytes all
    /// fail the same way.
    #[inline]
    pub fn decrypt(&self, ciphertext: &[u8], nonce: &[u8; NONCE_SIZE]) -> Result<Vec<u8>> {
        if ciphertext.len() < TAG_SIZE {
            return Err(Error::AuthenticationFailed);
        }

        self.inner.decrypt(Nonce::from_slice(nonce), ciphertext).map_err(|_| Error::AuthenticationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KEY_SIZE;

    fn cipher(byte: u8) -> AesGcm {
        AesGcm::new(&DerivedKey::new(Box::new([byte; KEY_SIZE]))).unwrap()
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let cipher = cipher(0);
        let nonce = [1u8; NONCE_SIZE];
        let plaintext = b"Hello, AES-GCM!";

        let ciphertext = cipher.encrypt(plaintext, &nonce).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len() + TAG_SIZE);
        assert_ne!(&ciphertext[..plaintext.len()], plaintext);

        let decrypted = cipher.decrypt(&ciphertext, &nonce).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_encrypt_is_deterministic_for_fixed_nonce() {
        let cipher = cipher(3);
        let nonce = [9u8; NONCE_SIZE];
        assert_eq!(cipher.encrypt(b"same", &nonce).unwrap(), cipher.encrypt(b"same", &nonce).unwrap());
    }

    #[test]
    fn test_empty_plaintext() {
        let cipher = cipher(0);
        let nonce = [0u8; NONCE_SIZE];

        let ciphertext = cipher.encrypt(&[], &nonce).unwrap();
        assert_eq!(ciphertext.len(), TAG_SIZE);
        assert!(cipher.decrypt(&ciphertext, &nonce).unwrap().is_empty());
    }

    #[test]
    fn test_nist_vector_zero_key_empty_plaintext() {
        // McGrew-Viega GCM test case 13: 256-bit zero key, zero IV, empty plaintext.
        let cipher = cipher(0);
        let tag = cipher.encrypt(&[], &[0u8; NONCE_SIZE]).unwrap();
        assert_eq!(hex::encode(tag), "530f8afbc74536b9a963b4f1c4cb738b");
    }

    #[test]
    fn test_decrypt_too_short() {
        let cipher = cipher(0);
        let result = cipher.decrypt(&[0u8; TAG_SIZE - 1], &[0u8; NONCE_SIZE]);
        assert_eq!(result.unwrap_err(), Error::AuthenticationFailed);
    }

    #[test]
    fn test_decrypt_tampered_ciphertext() {
        let cipher = cipher(0);
        let nonce = [2u8; NONCE_SIZE];
        let mut ciphertext = cipher.encrypt(b"Secret Message", &nonce).unwrap();

        ciphertext[0] ^= 0x01;

        assert_eq!(cipher.decrypt(&ciphertext, &nonce).unwrap_err(), Error::AuthenticationFailed);
    }

    #[test]
    fn test_decrypt_wrong_key_or_nonce() {
        let nonce = [2u8; NONCE_SIZE];
        let ciphertext = cipher(0).encrypt(b"Secret Message", &nonce).unwrap();

        assert_eq!(cipher(1).decrypt(&ciphertext, &nonce).unwrap_err(), Error::AuthenticationFailed);
        assert_eq!(cipher(0).decrypt(&ciphertext, &[3u8; NONCE_SIZE]).unwrap_err(), Error::AuthenticationFailed);
    }
}
