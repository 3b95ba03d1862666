use std::path::Path;

use anyhow::{Result, bail};
use fast_glob::glob_match;

use crate::config::EXCLUDED_PATTERNS;
use crate::file::operations::get_file_info;

/// Returns true if any component of `path` matches an excluded pattern.
pub fn is_excluded(path: &Path) -> bool {
    let path_str = path.to_string_lossy().replace('\\', "/");

    path_str.split('/').filter(|c| !c.is_empty() && *c != ".").any(|component| EXCLUDED_PATTERNS.iter().any(|pattern| glob_match(pattern, component)))
}

/// Checks an input (`must_exist`) or output path before processing.
///
/// Inputs must be existing regular files. Outputs must not exist yet.
/// Empty inputs are allowed: an empty file encrypts to a tag-only container.
pub fn validate_path(path: &Path, must_exist: bool) -> Result<()> {
    let info = get_file_info(path)?;

    if must_exist {
        if info.is_none() {
            bail!("file not found: {}", path.display());
        }
        if path.is_dir() {
            bail!("path is a directory: {}", path.display());
        }
    } else if info.is_some() {
        bail!("output file already exists: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_is_excluded_unix_paths() {
        assert!(is_excluded(Path::new("node_modules/package.json")));
        assert!(is_excluded(Path::new(".git/config")));
        assert!(is_excluded(Path::new("target/debug/binary")));
        assert!(is_excluded(Path::new("./.git/config")));
        assert!(is_excluded(Path::new("./docs/.ssh/id_ed25519")));
    }

    #[test]
    fn test_is_excluded_windows_paths() {
        assert!(is_excluded(Path::new(r".git\config")));
        assert!(is_excluded(Path::new(r".\node_modules\package.json")));
        assert!(is_excluded(Path::new(r"target\debug\binary")));
    }

    #[test]
    fn test_is_not_excluded() {
        assert!(!is_excluded(Path::new("document.txt")));
        assert!(!is_excluded(Path::new("./photos/holiday.jpg")));
        assert!(!is_excluded(Path::new("targets.csv")));
    }

    #[test]
    fn test_validate_path_not_found() {
        let path = PathBuf::from("/nonexistent/path/file.txt");
        assert!(validate_path(&path, true).is_err());
        assert!(validate_path(&path, false).is_ok());
    }

    #[test]
    fn test_validate_path_rules() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty.txt");
        std::fs::write(&empty, b"").unwrap();

        assert!(validate_path(&empty, true).is_ok());
        assert!(validate_path(&empty, false).is_err());
        assert!(validate_path(dir.path(), true).is_err());
    }
}
