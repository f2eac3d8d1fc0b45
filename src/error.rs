//! Structured error types for preset operations.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Not found errors
    PresetNotFound,

    // Validation errors
    MalformedPreset,

    // Internal errors
    IoError,
    DatabaseError,
}

/// Errors raised while listing, loading or materializing presets.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("Preset not found: {name}")]
    NotFound { name: String },

    #[error("Malformed preset {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tag group, tag or todo could not be created or read back.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl PresetError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PresetError::NotFound { .. } => ErrorCode::PresetNotFound,
            PresetError::Malformed { .. } => ErrorCode::MalformedPreset,
            PresetError::Io { .. } => ErrorCode::IoError,
            PresetError::Storage(_) => ErrorCode::DatabaseError,
        }
    }

    /// JSON body for CLI `--format json` error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut body = serde_json::json!({
            "code": self.code(),
            "message": self.to_string(),
        });
        if let PresetError::NotFound { name } = self {
            body["name"] = serde_json::Value::String(name.clone());
        }
        body
    }
}

/// Result type for preset operations.
pub type PresetResult<T> = std::result::Result<T, PresetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_carries_name() {
        let err = PresetError::not_found("non_existent_preset");
        assert!(err.to_string().contains("non_existent_preset"));
        assert_eq!(err.code(), ErrorCode::PresetNotFound);
        assert_eq!(err.to_json()["name"], "non_existent_preset");
        assert_eq!(err.to_json()["code"], "PRESET_NOT_FOUND");
    }

    #[test]
    fn test_malformed_message_includes_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PresetError::Malformed {
            path: PathBuf::from("/tmp/presets/broken.json"),
            source,
        };
        assert!(err.to_string().contains("broken.json"));
        assert_eq!(err.code(), ErrorCode::MalformedPreset);
    }

    #[test]
    fn test_storage_is_transparent() {
        let err = PresetError::from(anyhow::anyhow!("UNIQUE constraint failed"));
        assert_eq!(err.to_string(), "UNIQUE constraint failed");
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
