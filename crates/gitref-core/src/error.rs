//! Error types for gitref

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gitref
#[derive(Debug, Error)]
pub enum GitRefError {
    /// Source control is disabled or git could not be found
    #[error("Source control is not available")]
    SourceControlUnavailable,

    /// No repository in the workspace folders
    #[error("No repository found")]
    NoRepositoryFound,

    /// The reference file was already written
    #[error("Reference file for {short} already exists: {}", .path.display())]
    DestinationAlreadyExists { short: String, path: PathBuf },

    /// Git operation error
    #[error("Git error: {0}")]
    Git(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// External command error
    #[error("Command '{command}' failed: {message}")]
    Command { command: String, message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<GitRefError>,
    },
}

/// Coarse classification of failures, one per user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SourceControlUnavailable,
    NoRepositoryFound,
    DestinationAlreadyExists,
    Unexpected,
}

impl GitRefError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        GitRefError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Classify the error, looking through any added context
    pub fn kind(&self) -> ErrorKind {
        match self {
            GitRefError::SourceControlUnavailable => ErrorKind::SourceControlUnavailable,
            GitRefError::NoRepositoryFound => ErrorKind::NoRepositoryFound,
            GitRefError::DestinationAlreadyExists { .. } => ErrorKind::DestinationAlreadyExists,
            GitRefError::WithContext { source, .. } => source.kind(),
            _ => ErrorKind::Unexpected,
        }
    }
}

impl From<toml::de::Error> for GitRefError {
    fn from(err: toml::de::Error) -> Self {
        GitRefError::Toml(err.to_string())
    }
}

/// Result type alias for gitref
pub type Result<T> = std::result::Result<T, GitRefError>;
