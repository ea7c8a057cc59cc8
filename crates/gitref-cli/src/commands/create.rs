//! Create command
//!
//! Write the HEAD commit reference to `<commit>.txt`.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use gitref_core::capability::{KEY_CREDITS, KEY_FOLDER_ABSOLUTE_PATH};
use gitref_core::config::{Config, OverrideConfig};
use gitref_core::export::ReferenceExporter;
use gitref_core::filesystem::OsFilesystem;
use gitref_core::git::GitCli;

use crate::notifier::ConsoleNotifier;

/// Arguments for the create command
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Folder to look for a repository in (repeatable, default: current directory)
    #[arg(long, short)]
    pub repo: Vec<PathBuf>,

    /// Folder to write the reference file to (overrides folderAbsolutePath)
    #[arg(long, short)]
    pub folder: Option<String>,

    /// Append the credits line
    #[arg(long, overrides_with = "no_credits")]
    pub credits: bool,

    /// Do not append the credits line
    #[arg(long, overrides_with = "credits")]
    pub no_credits: bool,
}

impl CreateArgs {
    /// Credits setting requested on the command line, if any
    fn credits_override(&self) -> Option<bool> {
        if self.credits {
            Some(true)
        } else if self.no_credits {
            Some(false)
        } else {
            None
        }
    }
}

/// Execute the create command
pub fn execute(args: CreateArgs, config_path: &Path) -> Result<bool> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    let mut settings = OverrideConfig::new(&config);
    if let Some(folder) = &args.folder {
        settings = settings.with_string(KEY_FOLDER_ABSOLUTE_PATH, folder.clone());
    }
    if let Some(credits) = args.credits_override() {
        settings = settings.with_bool(KEY_CREDITS, credits);
    }

    let git = GitCli::from_config(&settings, super::workspace_folders(&args.repo));
    let fs = OsFilesystem::new();
    let notifier = ConsoleNotifier;

    let outcome = ReferenceExporter::new(&git, &settings, &fs, &notifier).execute();
    Ok(outcome.is_success())
}
