//! Show command
//!
//! Print HEAD of the current repository without writing anything.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use gitref_core::capability::{Notifier, SourceControl};
use gitref_core::config::Config;
use gitref_core::error::GitRefError;
use gitref_core::export::failure_message;
use gitref_core::git::GitCli;
use gitref_core::{CommitReference, HeadState};

use crate::notifier::ConsoleNotifier;

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Folder to look for a repository in (default: current directory)
    #[arg(long, short)]
    pub repo: Vec<PathBuf>,

    /// Show as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the show command
pub fn execute(args: ShowArgs, config_path: &Path) -> Result<bool> {
    use colored::Colorize;

    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
    let git = GitCli::from_config(&config, super::workspace_folders(&args.repo));
    let notifier = ConsoleNotifier;

    if !git.is_enabled() {
        notifier.show_error(&failure_message(&GitRefError::SourceControlUnavailable));
        return Ok(false);
    }

    let repositories = git.repositories()?;
    let Some(repository) = repositories.first() else {
        notifier.show_error(&failure_message(&GitRefError::NoRepositoryFound));
        return Ok(false);
    };

    let head = repository.head()?;
    let reference = CommitReference::new(head.commit.clone());

    if args.json {
        let value = serde_json::json!({
            "repository": repository.root().display().to_string(),
            "commit": head.commit,
            "short": reference.short(),
            "branch": head.name,
            "upstream": head.upstream,
            "file": reference.file_name(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(true);
    }

    println!("{}", "HEAD:".bold().underline());
    println!("  {:<10} {}", "Repository", repository.root().display());
    println!("  {:<10} {}", "Commit", head.commit.cyan());
    println!("  {:<10} {}", "Short", reference.short().yellow());
    println!("  {:<10} {}", "Branch", branch_label(&head));
    println!(
        "  {:<10} {}",
        "Upstream",
        head.upstream.as_deref().unwrap_or("(none)")
    );

    if repositories.len() > 1 {
        notifier.show_warning(&format!(
            "{} repositories found, showing the first",
            repositories.len()
        ));
    }

    Ok(true)
}

fn branch_label(head: &HeadState) -> &str {
    match head.name.as_deref() {
        Some(name) if !head.is_detached() => name,
        _ => "(detached)",
    }
}
