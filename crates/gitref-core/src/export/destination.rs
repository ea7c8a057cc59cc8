//! Destination folder resolution

use crate::capability::Filesystem;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the folder preferred inside the home directory
pub const DESKTOP_DIR: &str = "Desktop";

/// Pick the folder the reference file goes to.
///
/// A configured path is used as-is when it is an existing directory.
/// Anything else (unset, empty, missing, or a file) falls back to
/// [`default_destination`].
pub fn resolve_destination(user_defined: Option<&str>, fs: &dyn Filesystem) -> PathBuf {
    match user_defined {
        Some(path) if !path.is_empty() && fs.is_dir(Path::new(path)) => PathBuf::from(path),
        Some(path) if !path.is_empty() => {
            debug!("Configured folder {:?} is not a directory", path);
            default_destination(fs)
        }
        _ => default_destination(fs),
    }
}

/// `~/Desktop` when it is a directory, otherwise the home directory
pub fn default_destination(fs: &dyn Filesystem) -> PathBuf {
    let home = fs.home_directory();
    let desktop = home.join(DESKTOP_DIR);

    if fs.is_dir(&desktop) {
        desktop
    } else {
        home
    }
}
