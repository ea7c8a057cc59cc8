//! The reference exporter: resolve, pick a folder, write, report

use super::destination::resolve_destination;
use super::reference::resolve_reference;
use super::writer::create_reference_file;
use crate::capability::{ConfigProvider, Filesystem, Notifier, SourceControl};
use crate::config::export_configuration;
use crate::error::{ErrorKind, GitRefError, Result};
use crate::types::CommitReference;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The reference file was written
    Created {
        reference: CommitReference,
        path: PathBuf,
    },
    /// The invocation stopped; the user has been told why
    Failed(ErrorKind),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Created { .. })
    }
}

/// Runs the export pipeline against injected collaborators.
///
/// Holds no state of its own, so one exporter can be invoked any number of
/// times and every run reads HEAD and configuration afresh.
pub struct ReferenceExporter<'a> {
    source_control: &'a dyn SourceControl,
    config: &'a dyn ConfigProvider,
    fs: &'a dyn Filesystem,
    notifier: &'a dyn Notifier,
}

impl<'a> ReferenceExporter<'a> {
    pub fn new(
        source_control: &'a dyn SourceControl,
        config: &'a dyn ConfigProvider,
        fs: &'a dyn Filesystem,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            source_control,
            config,
            fs,
            notifier,
        }
    }

    /// Run once and report the result through the notifier
    pub fn execute(&self) -> Outcome {
        match self.run() {
            Ok((reference, path)) => {
                self.notifier.show_info(&success_message(&reference, &path));
                Outcome::Created { reference, path }
            }
            Err(err) => {
                debug!("Reference export failed: {}", err);
                self.notifier.show_error(&failure_message(&err));
                Outcome::Failed(err.kind())
            }
        }
    }

    /// Run the pipeline, stopping at the first failure
    pub fn run(&self) -> Result<(CommitReference, PathBuf)> {
        let resolved = resolve_reference(self.source_control)?;
        if resolved.repository_count > 1 {
            self.notifier.show_warning(&format!(
                "{} repositories found, using {}",
                resolved.repository_count,
                resolved.root.display()
            ));
        }

        let settings = export_configuration(self.config);
        let folder = resolve_destination(settings.destination_path.as_deref(), self.fs);
        debug!("Destination folder: {:?}", folder);

        if let Some(configured) = settings.destination_path.as_deref() {
            if !configured.is_empty() && Path::new(configured) != folder {
                self.notifier.show_warning(&format!(
                    "Configured folder '{}' is not a directory, using {} instead",
                    configured,
                    folder.display()
                ));
            }
        }

        let path = create_reference_file(
            self.fs,
            &folder,
            &resolved.reference,
            settings.include_credits,
        )?;

        Ok((resolved.reference, path))
    }
}

/// Confirmation shown after a successful write
pub fn success_message(reference: &CommitReference, path: &Path) -> String {
    format!("Reference {} saved to {}", reference.short(), path.display())
}

/// User-facing explanation for a failed invocation
pub fn failure_message(err: &GitRefError) -> String {
    match err {
        GitRefError::WithContext { source, .. } if source.kind() != ErrorKind::Unexpected => {
            failure_message(source)
        }
        GitRefError::SourceControlUnavailable => {
            "Git is not available. Enable it in the configuration or install git, then try again."
                .to_string()
        }
        GitRefError::NoRepositoryFound => {
            "No git repository found. Run the command from inside a repository.".to_string()
        }
        GitRefError::DestinationAlreadyExists { short, path } => format!(
            "The reference file for {} already exists at {}",
            short,
            path.display()
        ),
        other => format!("Could not create the reference file: {}", other),
    }
}
