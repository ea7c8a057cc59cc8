//! Git source-control provider
//!
//! Talks to git through its command line, one blocking child process per
//! query. Repositories are discovered from the workspace folders the
//! provider is created with.

use crate::capability::{ConfigProvider, Repository, SourceControl};
use crate::config::{KEY_GIT_ENABLED, KEY_GIT_PATH};
use crate::error::{GitRefError, Result};
use crate::types::HeadState;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Run git in `dir` and return its trimmed standard output
fn run_git(program: &str, dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| GitRefError::Command {
            command: format!("{} {}", program, args.join(" ")),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitRefError::Git(stderr.trim().to_string()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Git provider backed by the `git` executable
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    enabled: bool,
    workspace_folders: Vec<PathBuf>,
}

impl GitCli {
    /// Provider using `git` from PATH over the given folders
    pub fn new(workspace_folders: Vec<PathBuf>) -> Self {
        Self {
            program: "git".to_string(),
            enabled: true,
            workspace_folders,
        }
    }

    /// Provider honouring the `git.enabled` and `git.path` settings
    pub fn from_config(config: &dyn ConfigProvider, workspace_folders: Vec<PathBuf>) -> Self {
        Self {
            program: config
                .get_string(KEY_GIT_PATH)
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| "git".to_string()),
            enabled: config.get_bool(KEY_GIT_ENABLED).unwrap_or(true),
            workspace_folders,
        }
    }

    /// Installed git version, e.g. `2.43.0`
    pub fn version(&self) -> Result<String> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let version = run_git(&self.program, &cwd, &["--version"])?;
        Ok(version.replace("git version ", ""))
    }
}

impl SourceControl for GitCli {
    fn is_enabled(&self) -> bool {
        if !self.enabled {
            debug!("Git provider disabled by configuration");
            return false;
        }

        match self.version() {
            Ok(version) => {
                debug!("Using git {}", version);
                true
            }
            Err(e) => {
                debug!("Git is not usable: {}", e);
                false
            }
        }
    }

    fn repositories(&self) -> Result<Vec<Box<dyn Repository>>> {
        let mut roots: Vec<PathBuf> = Vec::new();

        for folder in &self.workspace_folders {
            if !folder.is_dir() {
                debug!("Skipping missing workspace folder {:?}", folder);
                continue;
            }

            match run_git(&self.program, folder, &["rev-parse", "--show-toplevel"]) {
                Ok(toplevel) => {
                    let root = PathBuf::from(toplevel);
                    if !roots.contains(&root) {
                        debug!("Found repository at {:?}", root);
                        roots.push(root);
                    }
                }
                Err(GitRefError::Git(message)) => {
                    debug!("{:?} is not inside a repository: {}", folder, message);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(roots
            .into_iter()
            .map(|root| {
                Box::new(GitRepository {
                    program: self.program.clone(),
                    root,
                }) as Box<dyn Repository>
            })
            .collect())
    }
}

/// A single working tree
#[derive(Debug, Clone)]
pub struct GitRepository {
    program: String,
    root: PathBuf,
}

impl GitRepository {
    fn git(&self, args: &[&str]) -> Result<String> {
        run_git(&self.program, &self.root, args)
    }
}

impl Repository for GitRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn current_head_commit(&self) -> Result<String> {
        self.git(&["rev-parse", "--verify", "HEAD"])
            .map_err(|e| e.with_context("Failed to read HEAD"))
    }

    fn head(&self) -> Result<HeadState> {
        let commit = self.current_head_commit()?;
        let name = self.git(&["symbolic-ref", "--short", "-q", "HEAD"]).ok();
        let upstream = self
            .git(&["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{upstream}"])
            .ok();

        Ok(HeadState {
            commit,
            name,
            upstream,
        })
    }
}
