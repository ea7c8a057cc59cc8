//! Local filesystem access

use crate::capability::Filesystem;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// [`Filesystem`] backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl OsFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for OsFilesystem {
    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn home_directory(&self) -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    fn write_new_file(&self, path: &Path, content: &str) -> io::Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Stage next to the target so the final link never crosses filesystems
        let mut staged = NamedTempFile::new_in(parent)?;
        staged.write_all(content.as_bytes())?;
        staged.flush()?;

        // Dropping the error's temp file removes the staged copy
        staged.persist_noclobber(path).map_err(|e| e.error)?;
        debug!("Wrote {} bytes to {:?}", content.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_new_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("abc.txt");

        OsFilesystem::new().write_new_file(&path, "abc").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "abc");
    }

    #[test]
    fn test_write_new_file_refuses_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("abc.txt");
        fs::write(&path, "original").unwrap();

        let err = OsFilesystem::new().write_new_file(&path, "new").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");

        // Only the original file remains, no staged leftovers
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_into_missing_folder_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("abc.txt");

        assert!(OsFilesystem::new().write_new_file(&path, "abc").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_path_exists() {
        let dir = TempDir::new().unwrap();
        let fs_cap = OsFilesystem::new();
        assert!(fs_cap.path_exists(dir.path()));
        assert!(!fs_cap.path_exists(&dir.path().join("nope")));
    }

    #[test]
    fn test_is_dir() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("cfg.txt");
        fs::write(&file, "x").unwrap();

        let fs_cap = OsFilesystem::new();
        assert!(fs_cap.is_dir(dir.path()));
        assert!(!fs_cap.is_dir(&file));
        assert!(!fs_cap.is_dir(&dir.path().join("nope")));
    }
}
