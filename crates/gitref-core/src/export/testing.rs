//! In-memory collaborators for exercising the export pipeline

use crate::capability::{Filesystem, Notifier, Repository, SourceControl};
use crate::error::{GitRefError, Result};
use crate::types::HeadState;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// Repository with a canned HEAD
pub struct FakeRepository {
    root: PathBuf,
    head: std::result::Result<String, String>,
}

impl Repository for FakeRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn current_head_commit(&self) -> Result<String> {
        self.head.clone().map_err(GitRefError::Git)
    }

    fn head(&self) -> Result<HeadState> {
        Ok(HeadState {
            commit: self.current_head_commit()?,
            name: Some("main".to_string()),
            upstream: None,
        })
    }
}

/// Source control answering from a fixed list of HEADs
pub struct FakeSourceControl {
    enabled: bool,
    heads: Vec<std::result::Result<String, String>>,
}

impl FakeSourceControl {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            heads: vec![Ok("abc123def456".to_string())],
        }
    }

    pub fn with_heads(heads: &[&str]) -> Self {
        Self {
            enabled: true,
            heads: heads.iter().map(|h| Ok(h.to_string())).collect(),
        }
    }

    pub fn with_broken_head(message: &str) -> Self {
        Self {
            enabled: true,
            heads: vec![Err(message.to_string())],
        }
    }
}

impl SourceControl for FakeSourceControl {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn repositories(&self) -> Result<Vec<Box<dyn Repository>>> {
        Ok(self
            .heads
            .iter()
            .enumerate()
            .map(|(i, head)| {
                Box::new(FakeRepository {
                    root: PathBuf::from(format!("/work/repo{}", i)),
                    head: head.clone(),
                }) as Box<dyn Repository>
            })
            .collect())
    }
}

/// Filesystem kept entirely in memory
pub struct FakeFilesystem {
    home: PathBuf,
    dirs: HashSet<PathBuf>,
    files: RefCell<HashMap<PathBuf, String>>,
    write_error: Option<io::ErrorKind>,
}

impl FakeFilesystem {
    pub fn new(home: &str) -> Self {
        let home = PathBuf::from(home);
        let mut dirs = HashSet::new();
        dirs.insert(home.clone());
        Self {
            home,
            dirs,
            files: RefCell::new(HashMap::new()),
            write_error: None,
        }
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.dirs.insert(PathBuf::from(path));
        self
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    /// Make every write fail with `kind`
    pub fn with_write_error(mut self, kind: io::ErrorKind) -> Self {
        self.write_error = Some(kind);
        self
    }

    pub fn read(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn written(&self) -> HashMap<PathBuf, String> {
        self.files.borrow().clone()
    }
}

impl Filesystem for FakeFilesystem {
    fn path_exists(&self, path: &Path) -> bool {
        self.dirs.contains(path) || self.files.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn home_directory(&self) -> PathBuf {
        self.home.clone()
    }

    fn write_new_file(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(kind) = self.write_error {
            return Err(io::Error::new(kind, "simulated write failure"));
        }
        if self.path_exists(path) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "file exists"));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Notifier that keeps every message
#[derive(Default)]
pub struct RecordingNotifier {
    infos: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show_info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn show_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
