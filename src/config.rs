use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseError, Result};

/// File name looked up in the repository root and the user config directory.
pub const CONFIG_FILE_NAME: &str = "release-notes.toml";

/// Represents the complete configuration for release-notes.
///
/// Every field has a default, so an absent or empty file is a valid config.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Changelog the release section is prepended to.
    #[serde(default = "default_changelog")]
    pub changelog: PathBuf,

    /// JSON manifest carrying the `version` field.
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Base URL that commit hashes are appended to in changelog links.
    #[serde(default = "default_commit_url")]
    pub commit_url: String,

    /// Prefix of release tag names, e.g. `version` for `version1.2.3`.
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

fn default_changelog() -> PathBuf {
    PathBuf::from("NEWS.md")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

fn default_commit_url() -> String {
    "https://github.com/Azure/azureml-sdk-for-r/commit".to_string()
}

fn default_tag_prefix() -> String {
    "version".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            changelog: default_changelog(),
            manifest: default_manifest(),
            commit_url: default_commit_url(),
            tag_prefix: default_tag_prefix(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ReleaseError::config(e.to_string()))
    }

    /// Changelog path resolved against the repository root
    pub fn changelog_path(&self, root: &Path) -> PathBuf {
        root.join(&self.changelog)
    }

    /// Manifest path resolved against the repository root
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-notes.toml` in the repository root
/// 3. `release-notes.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, repo_root: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let local = repo_root.join(CONFIG_FILE_NAME);
            if local.exists() {
                Some(local)
            } else {
                dirs::config_dir()
                    .map(|dir| dir.join(CONFIG_FILE_NAME))
                    .filter(|path| path.exists())
            }
        }
    };

    let Some(path) = path else {
        return Ok(Config::default());
    };

    let text = fs::read_to_string(&path)
        .map_err(|e| ReleaseError::config(format!("Cannot read {}: {}", path.display(), e)))?;
    Config::from_toml(&text).map_err(|e| match e {
        ReleaseError::Config(reason) => {
            ReleaseError::config(format!("{}: {}", path.display(), reason))
        }
        other => other,
    })
}
