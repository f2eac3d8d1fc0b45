//! Transactional preset materialization.

use super::Database;
use crate::preset::{Preset, PresetInitializeResult, materialize};
use anyhow::{Context, Result};

impl Database {
    /// Create the tag group, tags and todo tree of `preset` for `user_id`.
    ///
    /// Runs in a single transaction: either every row is created or none is.
    pub fn materialize_preset(
        &self,
        user_id: &str,
        preset_name: &str,
        preset: &Preset,
    ) -> Result<PresetInitializeResult> {
        self.in_user_transaction(user_id, |scope| materialize(preset_name, preset, scope))
            .with_context(|| format!("Failed to initialize preset '{}'", preset_name))
    }
}
