//! Collaborators the exporter depends on
//!
//! Everything outside the export pipeline (source control, configuration,
//! the filesystem and the notification channel) is reached through these
//! traits so the pipeline can run against fakes in tests.

use crate::error::Result;
use crate::types::HeadState;
use std::path::{Path, PathBuf};

/// Configuration key for the destination folder override
pub const KEY_FOLDER_ABSOLUTE_PATH: &str = "folderAbsolutePath";

/// Configuration key toggling the credits line
pub const KEY_CREDITS: &str = "credits";

/// A repository known to the source-control provider
pub trait Repository {
    /// Working tree root
    fn root(&self) -> &Path;

    /// Hash of the commit currently checked out
    fn current_head_commit(&self) -> Result<String>;

    /// Full HEAD state including branch and upstream
    fn head(&self) -> Result<HeadState>;
}

/// Source-control provider
pub trait SourceControl {
    /// Whether the provider can be used at all
    fn is_enabled(&self) -> bool;

    /// Known repositories, in discovery order
    fn repositories(&self) -> Result<Vec<Box<dyn Repository>>>;
}

/// Read-only access to user settings
pub trait ConfigProvider {
    /// String value for `key`, `None` when unset
    fn get_string(&self, key: &str) -> Option<String>;

    /// Boolean value for `key`, `None` when unset
    fn get_bool(&self, key: &str) -> Option<bool>;
}

/// Filesystem primitives
pub trait Filesystem {
    /// Whether anything exists at `path`
    fn path_exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Home directory of the invoking user
    fn home_directory(&self) -> PathBuf;

    /// Write `content` to a new file at `path`.
    ///
    /// Must fail with [`std::io::ErrorKind::AlreadyExists`] rather than
    /// replace an existing file, and must not leave a partial file behind.
    fn write_new_file(&self, path: &Path, content: &str) -> std::io::Result<()>;
}

/// Where user-facing messages go
pub trait Notifier {
    fn show_info(&self, message: &str);
    fn show_warning(&self, message: &str);
    fn show_error(&self, message: &str);
}
