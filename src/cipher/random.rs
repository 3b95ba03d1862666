//! Secure randomness for salts and nonces.
//!
//! The pipeline never reaches for a global generator; it is handed a
//! [`RandomSource`]. Production code uses [`SystemRandom`], tests can plug in
//! a deterministic source to build reproducible fixtures.

use aes_gcm::aead::OsRng;
use aes_gcm::aead::rand_core::RngCore;

use crate::error::{Error, Result};

/// Capability to fill buffers with random bytes.
///
/// Implementations must be safe to share between threads so that
/// independent encryptions can run concurrently.
pub trait RandomSource: Send + Sync {
    /// Fills `buf` entirely.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CryptoUnavailable`] when no randomness can be obtained.
    fn fill_random(&self, buf: &mut [u8]) -> Result<()>;

    /// Returns a freshly filled array.
    fn random_array<const N: usize>(&self) -> Result<[u8; N]>
    where
        Self: Sized,
    {
        let mut bytes = [0u8; N];
        self.fill_random(&mut bytes)?;
        Ok(bytes)
    }
}

/// The operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(buf).map_err(|_| Error::CryptoUnavailable("os random source"))
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_random(buf)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicU8, Ordering};

    use super::{RandomSource, Result};

    /// Deterministic source: every call fills with an incrementing byte.
    #[derive(Debug, Default)]
    pub struct CountingRandom {
        next: AtomicU8,
    }

    impl CountingRandom {
        pub fn starting_at(value: u8) -> Self {
            Self { next: AtomicU8::new(value) }
        }
    }

    impl RandomSource for CountingRandom {
        fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
            let value = self.next.fetch_add(1, Ordering::Relaxed);
            buf.fill(value);
            Ok(())
        }
    }

    /// Source that always fails.
    #[derive(Debug, Default)]
    pub struct BrokenRandom;

    impl RandomSource for BrokenRandom {
        fn fill_random(&self, _buf: &mut [u8]) -> Result<()> {
            Err(super::Error::CryptoUnavailable("broken test source"))
        }
    }
}
