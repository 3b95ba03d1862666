//! Container codec.
//!
//! Frames a salt, a nonce and an AES-GCM ciphertext into one artifact:
//!
//! ```text
//! offset  0  len 16   salt
//! offset 16  len 12   nonce
//! offset 28  len n+16 ciphertext || tag
//! ```
//!
//! Every field before the ciphertext has a fixed size, so there are no length
//! prefixes, delimiters or version bytes. Decoding only checks structure;
//! authenticity is established later by the cipher.

use crate::config::{CIPHERTEXT_OFFSET, MIN_CONTAINER_SIZE, NONCE_SIZE, SALT_SIZE};
use crate::error::{Error, Result};

/// A parsed container borrowing its fields from the decoded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container<'a> {
    salt: &'a [u8; SALT_SIZE],
    nonce: &'a [u8; NONCE_SIZE],
    ciphertext: &'a [u8],
}

impl<'a> Container<'a> {
    /// Splits `bytes` into salt, nonce and ciphertext without copying.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] when `bytes` is shorter than salt
    /// plus nonce. Any longer input decodes, whether or not it is authentic.
    pub fn decode(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < MIN_CONTAINER_SIZE {
            return Err(Error::InvalidFormat { len: bytes.len() });
        }

        let (salt, rest) = bytes.split_at(SALT_SIZE);
        let (nonce, ciphertext) = rest.split_at(NONCE_SIZE);

        Ok(Self {
            salt: salt.try_into().map_err(|_| Error::InvalidFormat { len: bytes.len() })?,
            nonce: nonce.try_into().map_err(|_| Error::InvalidFormat { len: bytes.len() })?,
            ciphertext,
        })
    }

    /// Serialises the container.
    pub fn to_bytes(&self) -> Vec<u8> {
        encode(self.salt, self.nonce, self.ciphertext)
    }

    #[inline]
    pub fn salt(&self) -> &'a [u8; SALT_SIZE] {
        self.salt
    }

    #[inline]
    pub fn nonce(&self) -> &'a [u8; NONCE_SIZE] {
        self.nonce
    }

    #[inline]
    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }
}

/// Concatenates `salt || nonce || ciphertext`.
pub fn encode(salt: &[u8; SALT_SIZE], nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(CIPHERTEXT_OFFSET + ciphertext.len());
    bytes.extend_from_slice(salt);
    bytes.extend_from_slice(nonce);
    bytes.extend_from_slice(ciphertext);
    bytes
}

/// Decodes `bytes`; see [`Container::decode`].
#[inline]
pub fn decode(bytes: &[u8]) -> Result<Container<'_>> {
    Container::decode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MIN_AUTHENTIC_CONTAINER_SIZE, NONCE_OFFSET, TAG_SIZE};

    #[test]
    fn test_encode_layout() {
        let bytes = encode(&[0x11; SALT_SIZE], &[0x22; NONCE_SIZE], &[0x33; 5]);

        assert_eq!(bytes.len(), SALT_SIZE + NONCE_SIZE + 5);
        assert!(bytes[..16].iter().all(|&b| b == 0x11));
        assert!(bytes[NONCE_OFFSET..CIPHERTEXT_OFFSET].iter().all(|&b| b == 0x22));
        assert!(bytes[28..].iter().all(|&b| b == 0x33));
    }

    #[test]
    fn test_decode_splits_fields() {
        let bytes = encode(&[1; SALT_SIZE], &[2; NONCE_SIZE], b"ciphertext-and-tag");
        let container = decode(&bytes).unwrap();

        assert_eq!(container.salt(), &[1; SALT_SIZE]);
        assert_eq!(container.nonce(), &[2; NONCE_SIZE]);
        assert_eq!(container.ciphertext(), b"ciphertext-and-tag");
        assert_eq!(container.to_bytes(), bytes);
    }

    #[test]
    fn test_decode_borrows_input() {
        let bytes = encode(&[1; SALT_SIZE], &[2; NONCE_SIZE], &[3; 4096]);
        let container = decode(&bytes).unwrap();

        assert!(std::ptr::eq(container.salt().as_ptr(), bytes.as_ptr()));
        assert!(std::ptr::eq(container.ciphertext().as_ptr(), bytes[CIPHERTEXT_OFFSET..].as_ptr()));
    }

    #[test]
    fn test_decode_rejects_short_input() {
        for len in [0, 1, 5, MIN_CONTAINER_SIZE - 1] {
            assert_eq!(decode(&vec![0u8; len]).unwrap_err(), Error::InvalidFormat { len });
        }
    }

    #[test]
    fn test_decode_accepts_bare_salt_and_nonce() {
        let container = decode(&[9u8; MIN_CONTAINER_SIZE]).unwrap();
        assert!(container.ciphertext().is_empty());
    }

    #[test]
    fn test_decode_accepts_unauthentic_lengths() {
        // Parses structurally; the cipher rejects it later.
        let container = decode(&[0u8; MIN_AUTHENTIC_CONTAINER_SIZE - 1]).unwrap();
        assert_eq!(container.ciphertext().len(), TAG_SIZE - 1);
    }
}
