//! End-to-end encryption and decryption.
//!
//! Encryption runs key derivation, the cipher and the container encoder in
//! that order; decryption validates the container structure first so that
//! malformed input is rejected before the expensive key derivation.
//!
//! The byte-level [`Processor`] is synchronous and pure apart from the random
//! source. The file-level helpers read the input, move the CPU-heavy work
//! onto a blocking thread and only create the output once the pipeline has
//! succeeded.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result as AnyResult};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::cipher::{Cipher, RandomSource, SystemRandom};
use crate::config::{NONCE_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
use crate::container::{self, Container};
use crate::error::Result;
use crate::file::{read_file, write_file};
use crate::secret::Password;
use crate::types::ProcessorMode;

/// Password-based container encryption.
pub struct Processor<R: RandomSource = SystemRandom> {
    random: R,
    rounds: u32,
}

impl Processor {
    /// A processor drawing salts and nonces from the operating system.
    pub fn new() -> Self {
        Self::with_random(SystemRandom)
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Processor<R> {
    pub fn with_random(random: R) -> Self {
        Self { random, rounds: PBKDF2_ITERATIONS }
    }

    #[cfg(test)]
    pub(crate) fn with_rounds(random: R, rounds: u32) -> Self {
        Self { random, rounds }
    }

    /// Encrypts `plaintext` into a fresh container.
    ///
    /// A new salt and nonce are drawn for every call, so encrypting the same
    /// input twice yields different containers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CryptoUnavailable`] if randomness or a primitive is unavailable.
    pub fn encrypt(&self, plaintext: &[u8], password: &Password) -> Result<Vec<u8>> {
        let salt: [u8; SALT_SIZE] = self.random.random_array()?;
        let nonce: [u8; NONCE_SIZE] = self.random.random_array()?;

        let ciphertext = Cipher::with_rounds(password, &salt, self.rounds)?.encrypt(plaintext, &nonce)?;
        debug!(plaintext = plaintext.len(), ciphertext = ciphertext.len(), "encrypted payload");

        Ok(container::encode(&salt, &nonce, &ciphertext))
    }

    /// Restores the plaintext sealed in `bytes`.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidFormat`] if `bytes` cannot hold a salt and nonce; no key is derived
    /// - [`crate::Error::AuthenticationFailed`] for a wrong password or modified container
    pub fn decrypt(&self, bytes: &[u8], password: &Password) -> Result<Vec<u8>> {
        let container = Container::decode(bytes)?;

        let plaintext = Cipher::with_rounds(password, container.salt(), self.rounds)?.decrypt(container.ciphertext(), container.nonce())?;
        debug!(container = bytes.len(), plaintext = plaintext.len(), "decrypted payload");

        Ok(plaintext)
    }

    /// Runs `mode` over `data`.
    pub fn process(&self, mode: ProcessorMode, data: &[u8], password: &Password) -> Result<Vec<u8>> {
        match mode {
            ProcessorMode::Encrypt => self.encrypt(data, password),
            ProcessorMode::Decrypt => self.decrypt(data, password),
        }
    }
}

/// Encrypts `plaintext` with the system random source.
///
/// # Errors
///
/// See [`Processor::encrypt`].
pub fn encrypt(plaintext: &[u8], password: &Password) -> Result<Vec<u8>> {
    Processor::new().encrypt(plaintext, password)
}

/// Decrypts a container produced by [`encrypt`].
///
/// # Errors
///
/// See [`Processor::decrypt`].
pub fn decrypt(container: &[u8], password: &Password) -> Result<Vec<u8>> {
    Processor::new().decrypt(container, password)
}

/// Processes one file from `input` into `output`.
///
/// Returns the number of bytes written. The engine error, if any, is kept as
/// the root cause so callers can downcast to [`crate::Error`].
pub async fn process_file(mode: ProcessorMode, input: &Path, output: &Path, password: Arc<Password>, overwrite: bool) -> AnyResult<u64> {
    let data = read_file(input).await?;
    info!(input = %input.display(), size = data.len(), "processing {}", mode.label().to_lowercase());

    let result = tokio::task::spawn_blocking(move || Processor::new().process(mode, &data, &password)).await.context("processing task failed")?;

    let result = match result {
        Ok(result) => result,
        Err(err) => {
            warn!(input = %input.display(), error = %err, "{} failed", mode.label().to_lowercase());
            return Err(err.into());
        }
    };

    write_file(output, &result, overwrite).await?;
    info!(output = %output.display(), size = result.len(), "wrote {} file", mode.past_tense());

    Ok(result.len() as u64)
}

/// One file of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Outcome of one [`Job`].
#[derive(Debug)]
pub struct JobResult {
    pub job: Job,
    pub result: AnyResult<u64>,
}

/// Processes independent files concurrently under one password.
///
/// Results come back in the order of `jobs`. A failure affects only its own
/// file. At most [`batch_concurrency`] jobs run at once, so only that many
/// inputs are held in memory together.
pub async fn process_batch(mode: ProcessorMode, jobs: Vec<Job>, password: Arc<Password>, overwrite: bool) -> Vec<JobResult> {
    run_bounded(jobs, batch_concurrency(), move |job| {
        let password = Arc::clone(&password);
        async move { process_file(mode, &job.input, &job.output, password, overwrite).await }
    })
    .await
}

/// Number of batch jobs allowed to run at once.
pub fn batch_concurrency() -> usize {
    thread::available_parallelism().map_or(4, NonZeroUsize::get)
}

/// Spawns one task per job, each waiting for a permit before it starts.
async fn run_bounded<F, Fut>(jobs: Vec<Job>, limit: usize, task: F) -> Vec<JobResult>
where
    F: Fn(Job) -> Fut,
    Fut: Future<Output = AnyResult<u64>> + Send + 'static,
{
    let permits = Arc::new(Semaphore::new(limit.max(1)));
    debug!(jobs = jobs.len(), limit, "starting bounded batch");

    let handles: Vec<_> = jobs
        .into_iter()
        .map(|job| {
            let permits = Arc::clone(&permits);
            let work = task(job.clone());
            let handle = tokio::spawn(async move {
                let _permit = permits.acquire_owned().await.context("batch limiter closed")?;
                work.await
            });
            (job, handle)
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (job, handle) in handles {
        let result = handle.await.context("batch task failed").and_then(|result| result);
        results.push(JobResult { job, result });
    }

    results
}
