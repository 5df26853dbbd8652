//! Directory listing used to populate the slideshow.
//!
//! The state only depends on the [`DirectoryLister`] trait so tests can
//! substitute an in-memory listing for the real filesystem.

use crate::error::{AppError, Result};
use crate::file_utils::{PathExt, is_hidden};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Enumerates the direct children of a folder.
///
/// Implementations must not recurse, should skip hidden entries, and must
/// report any failure as a single [`AppError::DirectoryRead`] instead of
/// returning a partial listing.
pub trait DirectoryLister: Send + Sync {
    fn list(&self, folder: &Path) -> Result<Vec<PathBuf>>;
}

/// Lists folders on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectoryLister;

impl FsDirectoryLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        let read_failure = |err: std::io::Error| {
            AppError::DirectoryRead(format!(
                "The folder \u{201C}{}\u{201D} couldn\u{2019}t be opened: {}",
                folder.folder_name(),
                err
            ))
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(folder).map_err(read_failure)? {
            let entry = entry.map_err(read_failure)?;
            let path = entry.path();
            if is_hidden(&path) {
                continue;
            }
            // Follows symlinks so linked pictures still show up.
            if path.is_dir() {
                continue;
            }
            entries.push(path);
        }

        debug!(
            "Listed {} entries in {}",
            entries.len(),
            folder.format_for_log()
        );
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_direct_children_only() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("a.jpg"), b"a").expect("failed to write test file");
        fs::write(dir.path().join("notes.txt"), b"n").expect("failed to write test file");
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).expect("failed to create nested dir");
        fs::write(nested.join("deep.png"), b"d").expect("failed to write test file");

        let mut entries = FsDirectoryLister::new()
            .list(dir.path())
            .expect("listing failed");
        entries.sort();

        assert_eq!(
            entries,
            vec![dir.path().join("a.jpg"), dir.path().join("notes.txt")]
        );
    }

    #[test]
    fn skips_hidden_entries() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(".hidden.png"), b"h").expect("failed to write test file");
        fs::write(dir.path().join("shown.png"), b"s").expect("failed to write test file");

        let entries = FsDirectoryLister::new()
            .list(dir.path())
            .expect("listing failed");

        assert_eq!(entries, vec![dir.path().join("shown.png")]);
    }

    #[test]
    fn missing_folder_is_a_directory_read_failure() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("gone");

        match FsDirectoryLister::new().list(&missing) {
            Err(AppError::DirectoryRead(msg)) => assert!(msg.contains("gone")),
            other => panic!("expected DirectoryRead, got {:?}", other),
        }
    }
}
