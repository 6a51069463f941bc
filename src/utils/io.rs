//! File system primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Rename `from` to `to`, replacing an existing `to`.
///
/// Wraps `fs::rename` with `Error::rename_failed` formatting.
pub fn rename_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| {
        Error::rename_failed(
            from.display().to_string(),
            to.display().to_string(),
            e.to_string(),
        )
    })
}

/// Whether anything, file or directory, is at `path`.
pub fn entry_exists(path: &Path) -> bool {
    path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn rename_file_moves_content() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("a b.txt");
        let to = dir.path().join("a_b.txt");
        fs::write(&from, "content").unwrap();

        rename_file(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(&to).unwrap(), "content");
    }

    #[test]
    fn rename_file_overwrites_existing_target() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("new");
        let to = dir.path().join("old");
        fs::write(&from, "new").unwrap();
        fs::write(&to, "old").unwrap();

        rename_file(&from, &to).unwrap();

        assert_eq!(fs::read_to_string(&to).unwrap(), "new");
    }

    #[test]
    fn rename_file_returns_error_for_missing_source() {
        let dir = TempDir::new().unwrap();
        let err = rename_file(&dir.path().join("missing"), &dir.path().join("x")).unwrap_err();

        assert_eq!(err.code.as_str(), "file.rename_failed");
        assert!(err.details["from"].as_str().unwrap().ends_with("missing"));
    }

    #[test]
    fn entry_exists_sees_directories() {
        let dir = TempDir::new().unwrap();
        assert!(entry_exists(dir.path()));
        assert!(!entry_exists(&dir.path().join("nope")));
    }
}
