//! Configuration loading and management.
//!
//! Configuration is read from the first file found among:
//! 1. `TODO_PRESETS_CONFIG_PATH`
//! 2. `./todo-presets/config.yaml`
//! 3. `~/.todo-presets/config.yaml`
//!
//! Environment variables are applied on top:
//! - `TODO_PRESETS_DB_PATH` - Database path
//! - `TODO_PRESETS_DIR` - Preset directory
//! - `TODO_PRESETS_USER` - Owning user id

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_PATH_ENV: &str = "TODO_PRESETS_CONFIG_PATH";
pub const DB_PATH_ENV: &str = "TODO_PRESETS_DB_PATH";
pub const PRESETS_DIR_ENV: &str = "TODO_PRESETS_DIR";
pub const USER_ENV: &str = "TODO_PRESETS_USER";

/// Directory name of bundled presets, next to the binary or in the source tree.
pub const PRESETS_DIR_NAME: &str = "presets";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub presets: PresetsConfig,

    #[serde(default)]
    pub user: UserConfig,
}

/// Database configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from(".todo-presets/presets.db")
}

/// Preset catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetsConfig {
    /// Directory of `<name>.json` presets. Defaults to the bundled presets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl PresetsConfig {
    /// The configured directory, or the bundled presets directory.
    pub fn resolve_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(bundled_presets_dir)
    }
}

/// Identity that owns created records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_user_id")]
    pub id: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: default_user_id(),
        }
    }
}

fn default_user_id() -> String {
    "local".to_string()
}

/// Presets shipped with the application.
///
/// Prefers a `presets/` directory next to the installed executable and falls
/// back to the one in the source tree.
pub fn bundled_presets_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(PRESETS_DIR_NAME)))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(PRESETS_DIR_NAME))
}

/// Candidate config files, highest priority first.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        candidates.push(PathBuf::from(path));
    }
    candidates.push(PathBuf::from("todo-presets").join("config.yaml"));
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".todo-presets").join("config.yaml"));
    }
    candidates
}

impl Config {
    /// Load configuration from file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    /// Load from an explicit path, or discover one, then apply environment
    /// overrides. Returns the config and the file it came from, if any.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let found = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => config_candidates().into_iter().find(|p| p.is_file()),
        };

        let mut config = match &found {
            Some(path) => {
                debug!(path = %path.display(), "Loading config");
                Self::load(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok((config, found))
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DB_PATH_ENV) {
            self.database.path = PathBuf::from(path);
        }
        if let Some(dir) = lookup(PRESETS_DIR_ENV) {
            self.presets.dir = Some(PathBuf::from(dir));
        }
        if let Some(user) = lookup(USER_ENV) {
            self.user.id = user;
        }
    }
}
