//! Core type definitions for gitref

use std::fmt;

/// Extension appended to the reference to build the output file name
pub const REFERENCE_FILE_EXTENSION: &str = ".txt";

/// Number of characters shown when a reference is displayed to the user
pub const SHORT_REFERENCE_LEN: usize = 8;

/// Identifier of the commit checked out at HEAD when the command ran
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitReference(String);

impl CommitReference {
    /// Wrap a raw identifier as reported by source control
    pub fn new(id: impl Into<String>) -> Self {
        CommitReference(id.into())
    }

    /// The reference exactly as it was read
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form: the first eight characters, or everything if shorter
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_REFERENCE_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Name of the file the reference is written to
    pub fn file_name(&self) -> String {
        format!("{}{}", self.0, REFERENCE_FILE_EXTENSION)
    }
}

impl fmt::Display for CommitReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// HEAD of a repository: the commit plus what points at it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadState {
    /// Commit hash
    pub commit: String,
    /// Branch name, `None` when HEAD is detached
    pub name: Option<String>,
    /// Upstream tracking ref, if configured
    pub upstream: Option<String>,
}

impl HeadState {
    /// Whether HEAD points directly at a commit instead of a branch
    pub fn is_detached(&self) -> bool {
        self.name.is_none()
    }
}

/// Export settings read fresh for every invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportConfiguration {
    /// User supplied destination folder
    pub destination_path: Option<String>,
    /// Append the credits line after the reference
    pub include_credits: bool,
}
