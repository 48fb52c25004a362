//! Database error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not encode {key}: {source}")]
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },

    #[error("stored {key} could not be read: {source}")]
    Decode {
        key: &'static str,
        source: serde_json::Error,
    },
}
