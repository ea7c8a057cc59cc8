//! Reference file creation

use crate::capability::Filesystem;
use crate::error::{GitRefError, Result};
use crate::types::CommitReference;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Line appended after the reference when credits are enabled
pub const CREDITS_LINE: &str = "Generated with gitref - https://github.com/gitref/gitref";

/// Full file content for `reference`
pub fn reference_content(reference: &CommitReference, include_credits: bool) -> String {
    if include_credits {
        format!("{}\n\n{}", reference, CREDITS_LINE)
    } else {
        reference.to_string()
    }
}

/// Write `reference` to `<folder>/<reference>.txt`, never replacing an existing file.
///
/// Returns the path written.
pub fn create_reference_file(
    fs: &dyn Filesystem,
    folder: &Path,
    reference: &CommitReference,
    include_credits: bool,
) -> Result<PathBuf> {
    let destination = folder.join(reference.file_name());
    let already_exists = || GitRefError::DestinationAlreadyExists {
        short: reference.short().to_string(),
        path: destination.clone(),
    };

    if fs.path_exists(&destination) {
        debug!("{:?} already exists, not writing", destination);
        return Err(already_exists());
    }

    let content = reference_content(reference, include_credits);
    fs.write_new_file(&destination, &content)
        .map_err(|e| match e.kind() {
            // Appeared between the check and the write
            io::ErrorKind::AlreadyExists => already_exists(),
            _ => GitRefError::Io(e)
                .with_context(format!("Failed to write {}", destination.display())),
        })?;

    info!("Wrote reference {} to {:?}", reference.short(), destination);
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::export::testing::FakeFilesystem;
    use crate::filesystem::OsFilesystem;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_content_without_credits() {
        let reference = CommitReference::new("abc123def456");
        assert_eq!(reference_content(&reference, false), "abc123def456");
    }

    #[test]
    fn test_content_with_credits() {
        let reference = CommitReference::new("abc123def456");
        assert_eq!(
            reference_content(&reference, true),
            format!("abc123def456\n\n{}", CREDITS_LINE)
        );
    }

    #[test]
    fn test_creates_named_file() {
        let dir = TempDir::new().unwrap();
        let reference = CommitReference::new("abc123def456");

        let path = create_reference_file(&OsFilesystem, dir.path(), &reference, false).unwrap();
        assert_eq!(path, dir.path().join("abc123def456.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "abc123def456");
    }

    #[test]
    fn test_creates_file_with_credits() {
        let dir = TempDir::new().unwrap();
        let reference = CommitReference::new("abc123def456");

        let path = create_reference_file(&OsFilesystem, dir.path(), &reference, true).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("abc123def456\n\n{}", CREDITS_LINE)
        );
    }

    #[test]
    fn test_second_call_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let reference = CommitReference::new("abc123def456");

        create_reference_file(&OsFilesystem, dir.path(), &reference, false).unwrap();
        let err = create_reference_file(&OsFilesystem, dir.path(), &reference, true).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DestinationAlreadyExists);
        assert!(err.to_string().contains("abc123de"));
        assert_eq!(
            fs::read_to_string(dir.path().join("abc123def456.txt")).unwrap(),
            "abc123def456"
        );
    }

    #[test]
    fn test_race_on_write_reports_existing() {
        let fs = FakeFilesystem::new("/home/dev")
            .with_dir("/out")
            .with_write_error(io::ErrorKind::AlreadyExists);
        let reference = CommitReference::new("abc123def456");

        let err = create_reference_file(&fs, Path::new("/out"), &reference, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DestinationAlreadyExists);
    }

    #[test]
    fn test_write_failure_is_unexpected() {
        let fs = FakeFilesystem::new("/home/dev")
            .with_dir("/out")
            .with_write_error(io::ErrorKind::PermissionDenied);
        let reference = CommitReference::new("abc123def456");

        let err = create_reference_file(&fs, Path::new("/out"), &reference, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(err.to_string().contains("Failed to write"));
        assert!(fs.written().is_empty());
    }
}
