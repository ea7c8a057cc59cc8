//! Commit reference resolution

use crate::capability::SourceControl;
use crate::error::{GitRefError, Result};
use crate::types::CommitReference;
use std::path::PathBuf;
use tracing::{debug, info};

/// HEAD reference together with where it was read from
#[derive(Debug, Clone)]
pub struct ResolvedReference {
    pub reference: CommitReference,
    /// Root of the repository that was read
    pub root: PathBuf,
    /// How many repositories the provider reported
    pub repository_count: usize,
}

/// Read HEAD of the first repository the provider knows about
pub fn resolve_commit_reference(source_control: &dyn SourceControl) -> Result<CommitReference> {
    resolve_reference(source_control).map(|resolved| resolved.reference)
}

/// Like [`resolve_commit_reference`], keeping track of the repository used
pub fn resolve_reference(source_control: &dyn SourceControl) -> Result<ResolvedReference> {
    if !source_control.is_enabled() {
        return Err(GitRefError::SourceControlUnavailable);
    }

    let repositories = source_control.repositories()?;
    let repository = repositories.first().ok_or(GitRefError::NoRepositoryFound)?;

    if repositories.len() > 1 {
        info!(
            "{} repositories found, using {:?}",
            repositories.len(),
            repository.root()
        );
    }

    let commit = repository.current_head_commit()?;
    debug!("HEAD of {:?} is {}", repository.root(), commit);

    Ok(ResolvedReference {
        reference: CommitReference::new(commit),
        root: repository.root().to_path_buf(),
        repository_count: repositories.len(),
    })
}
