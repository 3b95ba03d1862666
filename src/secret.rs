use secrecy::{ExposeSecret, SecretBox, SecretString};

use crate::config::KEY_SIZE;

/// A user password, zeroized on drop.
///
/// The engine does not validate strength or emptiness; that policy lives in
/// the front end.
pub struct Password {
    inner: SecretString,
}

impl Password {
    pub fn new(password: &str) -> Self {
        Self { inner: SecretString::from(password.to_owned()) }
    }

    pub fn from_string(password: String) -> Self {
        Self { inner: SecretString::from(password) }
    }

    pub fn expose_secret(&self) -> &str {
        self.inner.expose_secret()
    }

    /// UTF-8 bytes fed to key derivation.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.expose_secret().as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.expose_secret().is_empty()
    }
}

impl From<SecretString> for Password {
    fn from(secret: SecretString) -> Self {
        Self { inner: secret }
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

/// A 256-bit key derived from a password, zeroized on drop.
pub struct DerivedKey {
    inner: SecretBox<[u8; KEY_SIZE]>,
}

impl DerivedKey {
    /// Takes ownership of a key already on the heap; it is zeroized on drop.
    pub fn new(key: Box<[u8; KEY_SIZE]>) -> Self {
        Self { inner: SecretBox::new(key) }
    }

    pub fn expose_secret(&self) -> &[u8; KEY_SIZE] {
        self.inner.expose_secret()
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DerivedKey([... {KEY_SIZE} bytes ...])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_bytes_are_utf8() {
        let password = Password::new("pässword");
        assert_eq!(password.as_bytes(), "pässword".as_bytes());
        assert!(!password.is_empty());
        assert!(Password::new("").is_empty());
    }

    #[test]
    fn test_debug_does_not_leak() {
        let password = Password::from_string("hunter2".to_owned());
        assert!(!format!("{password:?}").contains("hunter2"));

        let key = DerivedKey::new(Box::new([0xAB; KEY_SIZE]));
        assert!(!format!("{key:?}").contains("ab"));
        assert_eq!(key.expose_secret(), &[0xAB; KEY_SIZE]);
    }
}
