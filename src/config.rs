use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GitChangelogError, Result};

/// Represents the complete configuration for git-changelog.
///
/// Every value can be overridden on the command line; the file only changes defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub collect: CollectConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

fn default_repo_path() -> String {
    ".git".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Where the repository lives and how it is hosted.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    #[serde(default = "default_repo_path")]
    pub path: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    /// Overrides the owner parsed from the remote URL
    #[serde(default)]
    pub owner: Option<String>,

    /// Overrides the repository name parsed from the remote URL
    #[serde(default)]
    pub name: Option<String>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            path: default_repo_path(),
            remote: default_remote(),
            owner: None,
            name: None,
        }
    }
}

fn default_tag_format() -> String {
    r"[vV]\d\.\d(\.\d){0,2}".to_string()
}

fn default_output() -> String {
    "CHANGELOG.md".to_string()
}

/// Tag selection and changelog presentation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CollectConfig {
    #[serde(default = "default_tag_format")]
    pub tag_format: String,

    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub header: Option<String>,

    #[serde(default)]
    pub source_links: bool,

    #[serde(default)]
    pub compare_links: bool,
}

impl Default for CollectConfig {
    fn default() -> Self {
        CollectConfig {
            tag_format: default_tag_format(),
            output: default_output(),
            header: None,
            source_links: false,
            compare_links: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReleaseConfig {
    #[serde(default)]
    pub draft: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitchangelog.toml` in current directory
/// 3. `.gitchangelog.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        read_config(Path::new(path))?
    } else if Path::new("./gitchangelog.toml").exists() {
        read_config(Path::new("./gitchangelog.toml"))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitchangelog.toml");
        if config_path.exists() {
            read_config(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| GitChangelogError::config(e.to_string()))
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| GitChangelogError::config(format!("{}: {}", path.display(), e)))
}
