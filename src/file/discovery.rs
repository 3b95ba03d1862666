use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::{DirEntry, WalkDir};

use crate::file::operations::is_encrypted_file;
use crate::file::validation::is_excluded;
use crate::types::ProcessorMode;

/// Lists files under `root` that can be processed in `mode`.
///
/// Hidden and excluded directories are not descended into. Unreadable
/// entries are skipped.
pub fn find_eligible_files(root: &Path, mode: ProcessorMode) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(DirEntry::into_path)
        .filter(|path| is_eligible(path.strip_prefix(root).unwrap_or(path), mode))
        .collect();

    files.sort();
    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && (entry.file_name().to_string_lossy().starts_with('.') || is_excluded(Path::new(entry.file_name())))
}

fn is_eligible(path: &Path, mode: ProcessorMode) -> bool {
    if let Some(name) = path.file_name()
        && name.to_string_lossy().starts_with('.')
    {
        return false;
    }

    if is_excluded(path) {
        return false;
    }

    let is_encrypted = is_encrypted_file(path);
    match mode {
        ProcessorMode::Encrypt => !is_encrypted,
        ProcessorMode::Decrypt => is_encrypted,
    }
}
