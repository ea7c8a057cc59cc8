//! Doctor command
//!
//! Diagnose git, repository detection and destination folder.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use gitref_core::capability::{Filesystem, SourceControl};
use gitref_core::config::{export_configuration, Config};
use gitref_core::export::resolve_destination;
use gitref_core::filesystem::OsFilesystem;
use gitref_core::git::GitCli;
use gitref_core::CommitReference;

/// Arguments for the doctor command
#[derive(Debug, Args)]
pub struct DoctorArgs {
    /// Folder to look for a repository in (default: current directory)
    #[arg(long, short)]
    pub repo: Vec<PathBuf>,

    /// Show suggestions for every check
    #[arg(long)]
    pub suggestions: bool,
}

/// Check result
struct CheckResult {
    name: String,
    passed: bool,
    message: String,
    suggestion: Option<String>,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: message.to_string(),
            suggestion: None,
        }
    }

    fn fail(name: &str, message: &str, suggestion: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: message.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    fn warn(name: &str, message: &str, suggestion: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: format!("⚠ {}", message),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    fn is_warning(&self) -> bool {
        self.passed && self.message.starts_with('⚠')
    }
}

/// Execute the doctor command
pub fn execute(args: DoctorArgs, config_path: &Path) -> Result<bool> {
    use colored::Colorize;

    let mut results = vec![CheckResult::ok("gitref version", env!("CARGO_PKG_VERSION"))];

    let (config_result, config) = check_configuration(config_path);
    results.push(config_result);

    let git = GitCli::from_config(&config, super::workspace_folders(&args.repo));
    let (checks, reference) = check_repository(&git);
    results.extend(checks);
    results.extend(check_destination(&config, &OsFilesystem::new(), reference.as_ref()));

    for result in &results {
        let status = if !result.passed {
            "✗".red()
        } else if result.is_warning() {
            "⚠".yellow()
        } else {
            "✓".green()
        };

        println!("   {} {}: {}", status, result.name, result.message);

        if args.suggestions || !result.passed {
            if let Some(suggestion) = &result.suggestion {
                println!("     {}", suggestion.dimmed());
            }
        }
    }

    let warnings = results.iter().filter(|r| r.is_warning()).count();
    let errors = results.iter().filter(|r| !r.passed).count();

    println!(
        "\n{}: {} warnings, {} errors",
        "Summary".bold(),
        warnings.to_string().yellow(),
        errors.to_string().red()
    );

    if errors == 0 && warnings == 0 {
        println!("\n{} All checks passed!", "✓".green());
    }

    Ok(errors == 0)
}

fn check_configuration(config_path: &Path) -> (CheckResult, Config) {
    if !config_path.exists() {
        return (
            CheckResult::ok("Configuration", "not found, using defaults"),
            Config::default(),
        );
    }

    match Config::load(config_path) {
        Ok(config) => (
            CheckResult::ok("Configuration", &config_path.display().to_string()),
            config,
        ),
        Err(e) => (
            CheckResult::fail(
                "Configuration",
                &e.to_string(),
                Some("Fix the file or run 'gitref config reset'"),
            ),
            Config::default(),
        ),
    }
}

fn check_repository(git: &GitCli) -> (Vec<CheckResult>, Option<CommitReference>) {
    let mut results = Vec::new();

    if !git.is_enabled() {
        results.push(CheckResult::fail(
            "Git",
            "not available",
            Some("Install git (https://git-scm.com/) or set git.enabled = true"),
        ));
        return (results, None);
    }
    if let Ok(version) = git.version() {
        results.push(CheckResult::ok("Git version", &version));
    }

    let repositories = match git.repositories() {
        Ok(repositories) => repositories,
        Err(e) => {
            results.push(CheckResult::fail("Repository", &e.to_string(), None));
            return (results, None);
        }
    };

    let Some(repository) = repositories.first() else {
        results.push(CheckResult::fail(
            "Repository",
            "not found",
            Some("Run gitref from inside a repository or pass --repo"),
        ));
        return (results, None);
    };

    let root = repository.root().display().to_string();
    if repositories.len() > 1 {
        results.push(CheckResult::warn(
            "Repository",
            &format!("{} found, using {}", repositories.len(), root),
            Some("Pass --repo to pick a repository explicitly"),
        ));
    } else {
        results.push(CheckResult::ok("Repository", &root));
    }

    match repository.current_head_commit() {
        Ok(commit) => {
            let reference = CommitReference::new(commit);
            results.push(CheckResult::ok("HEAD", reference.short()));
            (results, Some(reference))
        }
        Err(e) => {
            results.push(CheckResult::fail(
                "HEAD",
                &e.to_string(),
                Some("Create a first commit"),
            ));
            (results, None)
        }
    }
}

fn check_destination(
    config: &Config,
    fs: &dyn Filesystem,
    reference: Option<&CommitReference>,
) -> Vec<CheckResult> {
    let mut results = Vec::new();
    let settings = export_configuration(config);
    let folder = resolve_destination(settings.destination_path.as_deref(), fs);

    match settings.destination_path.as_deref() {
        Some(configured) if !configured.is_empty() && Path::new(configured) != folder => {
            results.push(CheckResult::warn(
                "Destination",
                &format!("'{}' is not a directory, using {}", configured, folder.display()),
                Some("Create the folder or fix folderAbsolutePath"),
            ));
        }
        _ => results.push(CheckResult::ok(
            "Destination",
            &folder.display().to_string(),
        )),
    }

    if let Some(reference) = reference {
        let target = folder.join(reference.file_name());
        if fs.path_exists(&target) {
            results.push(CheckResult::warn(
                "Reference file",
                &format!("{} already exists", target.display()),
                Some("Remove it to write the reference again"),
            ));
        } else {
            results.push(CheckResult::ok("Reference file", "not written yet"));
        }
    }

    results
}
