//! File-backed preset catalog.
//!
//! Presets live in one directory as `<name>.json` files. Listing is best-effort:
//! documents that fail to parse are skipped with a warning. Loading a single
//! preset surfaces every error.

use super::schema::{Preset, PresetInfo};
use crate::error::{PresetError, PresetResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension of preset documents.
pub const PRESET_EXTENSION: &str = "json";

/// Read-only access to the presets in a directory.
#[derive(Debug, Clone)]
pub struct PresetRepository {
    dir: PathBuf,
}

impl PresetRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory scanned for presets.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document backing `name`, if `name` can name a file in the
    /// preset directory at all.
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        let plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\']);
        plain.then(|| self.dir.join(format!("{}.{}", name, PRESET_EXTENSION)))
    }

    /// Summaries of every parseable preset, sorted by name.
    ///
    /// A missing directory, or a path that is not a directory, yields an empty
    /// list.
    pub fn list_available(&self) -> PresetResult<Vec<PresetInfo>> {
        if !self.dir.is_dir() {
            debug!(dir = %self.dir.display(), "Preset directory does not exist");
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|source| PresetError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut presets: Vec<PresetInfo> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_preset_file(path))
            .map(|path| load_file(&path))
            .filter_map(|loaded| match loaded {
                Ok(preset) => Some(PresetInfo::from(&preset)),
                Err(e) => {
                    warn!(error = %e, "Skipping invalid preset");
                    None
                }
            })
            .collect();

        presets.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(presets)
    }

    /// Load the preset stored as `<name>.json`.
    pub fn load(&self, name: &str) -> PresetResult<Preset> {
        let path = self
            .path_for(name)
            .filter(|path| path.is_file())
            .ok_or_else(|| PresetError::not_found(name))?;

        load_file(&path)
    }
}

fn is_preset_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some(PRESET_EXTENSION)
}

/// Read and parse one preset document.
pub fn load_file(path: &Path) -> PresetResult<Preset> {
    let content = std::fs::read_to_string(path).map_err(|source| PresetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Preset::from_json(&content).map_err(|source| PresetError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
