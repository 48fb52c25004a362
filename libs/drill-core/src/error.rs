//! Error types for drill-core.

use crate::types::ItemId;
use thiserror::Error;

/// Result type alias using DrillError.
pub type Result<T> = std::result::Result<T, DrillError>;

/// Errors returned by set and word editing operations.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error("set not found: {0}")]
    SetNotFound(ItemId),

    #[error("word {word} not found in set {set}")]
    WordNotFound { set: ItemId, word: ItemId },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("{field} may not contain '{separator}'")]
    ReservedCharacter { field: &'static str, separator: char },
}

/// Errors that can occur while reading a backup document.
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("backup is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("backup must be a JSON object")]
    NotAnObject,
}
