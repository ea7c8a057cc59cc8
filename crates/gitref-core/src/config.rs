//! Configuration management for gitref
//!
//! Settings live in a TOML file. The exporter never reads [`Config`]
//! directly; it asks a [`ConfigProvider`] for individual keys, which lets
//! command-line flags be layered over the file with [`OverrideConfig`].

use crate::capability::{ConfigProvider, KEY_CREDITS, KEY_FOLDER_ABSOLUTE_PATH};
use crate::error::{GitRefError, Result};
use crate::types::ExportConfiguration;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key enabling the git provider
pub const KEY_GIT_ENABLED: &str = "git.enabled";

/// Key naming the git executable
pub const KEY_GIT_PATH: &str = "git.path";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reference file settings
    #[serde(rename = "gitReferenceToTxt")]
    pub export: ExportConfig,
    /// Source control settings
    pub git: GitConfig,
}

/// Reference file settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    /// Folder the reference file is written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_absolute_path: Option<String>,
    /// Append the credits line
    pub credits: bool,
}

/// Source control settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Disable to turn the provider off entirely
    pub enabled: bool,
    /// Git executable
    pub path: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "git".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No configuration at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(GitRefError::from)
            .map_err(|e| e.with_context(format!("Invalid configuration in {}", path.display())))?;

        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Serialize to the on-disk format
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GitRefError::Toml(e.to_string()))
    }

    /// Default configuration file location.
    ///
    /// Uses the platform config directory, or `~/.gitref/config.toml` when
    /// that cannot be determined.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "gitref", "gitref")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".gitref")
                    .join("config.toml")
            })
    }
}

impl ConfigProvider for Config {
    fn get_string(&self, key: &str) -> Option<String> {
        match key {
            KEY_FOLDER_ABSOLUTE_PATH => self.export.folder_absolute_path.clone(),
            KEY_GIT_PATH => Some(self.git.path.clone()),
            _ => None,
        }
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match key {
            KEY_CREDITS => Some(self.export.credits),
            KEY_GIT_ENABLED => Some(self.git.enabled),
            _ => None,
        }
    }
}

/// Provider that answers from explicit overrides before asking `base`
pub struct OverrideConfig<'a> {
    base: &'a dyn ConfigProvider,
    strings: HashMap<String, String>,
    bools: HashMap<String, bool>,
}

impl<'a> OverrideConfig<'a> {
    pub fn new(base: &'a dyn ConfigProvider) -> Self {
        Self {
            base,
            strings: HashMap::new(),
            bools: HashMap::new(),
        }
    }

    /// Override a string key
    pub fn with_string(mut self, key: &str, value: impl Into<String>) -> Self {
        self.strings.insert(key.to_string(), value.into());
        self
    }

    /// Override a boolean key
    pub fn with_bool(mut self, key: &str, value: bool) -> Self {
        self.bools.insert(key.to_string(), value);
        self
    }
}

impl ConfigProvider for OverrideConfig<'_> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.strings
            .get(key)
            .cloned()
            .or_else(|| self.base.get_string(key))
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.bools
            .get(key)
            .copied()
            .or_else(|| self.base.get_bool(key))
    }
}

/// Read the export settings for one invocation
pub fn export_configuration(provider: &dyn ConfigProvider) -> ExportConfiguration {
    ExportConfiguration {
        destination_path: provider.get_string(KEY_FOLDER_ABSOLUTE_PATH),
        include_credits: provider.get_bool(KEY_CREDITS).unwrap_or(false),
    }
}
