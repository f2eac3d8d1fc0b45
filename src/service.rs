//! Preset service: the catalog plus materialization into the database.

use crate::db::Database;
use crate::error::PresetResult;
use crate::preset::{Preset, PresetInfo, PresetInitializeResult, PresetRepository};
use tracing::info;

/// Lists, loads and initializes presets for one user.
#[derive(Clone)]
pub struct PresetService {
    repository: PresetRepository,
    db: Database,
    user_id: String,
}

impl PresetService {
    pub fn new(repository: PresetRepository, db: Database, user_id: impl Into<String>) -> Self {
        Self {
            repository,
            db,
            user_id: user_id.into(),
        }
    }

    pub fn repository(&self) -> &PresetRepository {
        &self.repository
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Summaries of every readable preset.
    pub fn list_presets(&self) -> PresetResult<Vec<PresetInfo>> {
        self.repository.list_available()
    }

    /// Load a preset by name.
    pub fn get_preset(&self, name: &str) -> PresetResult<Preset> {
        self.repository.load(name)
    }

    /// Create the preset's tag group, tags and todos for this service's user.
    pub fn initialize_from_preset(&self, name: &str) -> PresetResult<PresetInitializeResult> {
        let preset = self.repository.load(name)?;
        info!(preset = name, user = %self.user_id, "Initializing preset");

        let result = self.db.materialize_preset(&self.user_id, name, &preset)?;
        Ok(result)
    }
}
