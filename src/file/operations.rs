use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result, anyhow, bail};
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::config::{DECRYPTED_EXTENSION, FILE_EXTENSION};
use crate::types::{FileInfo, ProcessorMode};

/// Reads the whole input file into memory.
pub async fn read_file(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.with_context(|| format!("failed to read file: {}", path.display()))
}

/// Writes `data` to `path`, creating parent directories.
///
/// The data goes to a sibling temporary file that is synced and then renamed
/// over `path`, so readers see either the old file or the complete new one.
/// Refuses to replace an existing file unless `overwrite` is set.
pub async fn write_file(path: &Path, data: &[u8], overwrite: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    if !overwrite && tokio::fs::try_exists(path).await.with_context(|| format!("stat failed: {}", path.display()))? {
        bail!("output file already exists: {}", path.display());
    }

    let tmp = temp_path(path);
    if let Err(err) = write_and_rename(&tmp, path, data).await {
        match tokio::fs::remove_file(&tmp).await {
            Err(cleanup) if cleanup.kind() != ErrorKind::NotFound => warn!(path = %tmp.display(), error = %cleanup, "failed to remove temporary file"),
            _ => {}
        }
        return Err(err);
    }

    Ok(())
}

async fn write_and_rename(tmp: &Path, path: &Path, data: &[u8]) -> Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(tmp)
        .await
        .with_context(|| format!("failed to create file: {}", tmp.display()))?;

    file.write_all(data).await.with_context(|| format!("failed to write file: {}", tmp.display()))?;
    file.sync_all().await.with_context(|| format!("failed to sync file: {}", tmp.display()))?;
    drop(file);

    tokio::fs::rename(tmp, path).await.with_context(|| format!("failed to replace file: {}", path.display()))
}

/// Unique hidden sibling of `path`; concurrent writers never share one.
fn temp_path(path: &Path) -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let name = path.file_name().unwrap_or_default().to_string_lossy();
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!(".{name}.{}.{id}.tmp", std::process::id()))
}

pub async fn delete_file(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("not found: {}", path.display());
    }

    tokio::fs::remove_file(path).await.with_context(|| format!("cannot remove: {}", path.display()))
}

#[must_use = "the returned FileInfo should be used"]
pub fn get_file_info(path: &Path) -> Result<Option<FileInfo>> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("stat failed: {}", path.display())),
    };

    Ok(Some(FileInfo { path: path.to_path_buf(), size: meta.len(), is_encrypted: is_encrypted_file(path) }))
}

pub fn get_file_info_list(paths: &[PathBuf]) -> Result<Vec<FileInfo>> {
    paths.iter().map(|path| get_file_info(path)?.ok_or_else(|| anyhow!("file not found: {}", path.display()))).collect()
}

/// Default output path for `input`.
///
/// Encryption appends `.encrypted`. Decryption strips it, or appends
/// `.decrypted` when the input does not carry the suffix.
#[must_use]
pub fn get_output_path(input: &Path, mode: ProcessorMode) -> PathBuf {
    let suffix = match mode {
        ProcessorMode::Encrypt => FILE_EXTENSION,
        ProcessorMode::Decrypt => {
            let name = input.as_os_str().to_string_lossy();
            match name.strip_suffix(FILE_EXTENSION) {
                Some(stripped) if !stripped.is_empty() && !stripped.ends_with(['/', '\\']) => return PathBuf::from(stripped),
                _ => DECRYPTED_EXTENSION,
            }
        }
    };

    let mut name = input.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

#[inline]
#[must_use]
pub fn is_encrypted_file(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().ends_with(FILE_EXTENSION)
}
