//! Application state.

use crate::db::schema::{SETS_KEY, STATS_KEY};
use crate::db::{BlobRepository, DbError, SettingsRepository, SqliteStore};
use drill_core::types::Settings;
use drill_core::{HistoryStore, SetRepository};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Sets, history and settings loaded from the store.
pub struct AppState {
    store: SqliteStore,
    pub sets: SetRepository,
    pub history: HistoryStore,
    pub settings: Settings,
}

impl AppState {
    /// Load everything from `store`. A document that no longer decodes is an
    /// error and is left untouched in the store.
    pub fn load(store: SqliteStore) -> Result<Self, DbError> {
        let sets = load_document(&store, SETS_KEY)?;
        let history = load_document(&store, STATS_KEY)?;
        let settings = store.get_settings()?;
        Ok(Self {
            store,
            sets,
            history,
            settings,
        })
    }

    /// Write sets and history back to the store.
    pub fn save(&self) -> Result<(), DbError> {
        let sets = encode(SETS_KEY, &self.sets)?;
        let stats = encode(STATS_KEY, &self.history)?;
        self.store
            .save_blobs(&[(SETS_KEY, sets.as_str()), (STATS_KEY, stats.as_str())])
    }

    pub fn save_settings(&self) -> Result<(), DbError> {
        self.store.save_settings(&self.settings)
    }
}

fn load_document<T: DeserializeOwned + Default>(store: &SqliteStore, key: &'static str) -> Result<T, DbError> {
    let Some(json) = store.load_blob(key)? else {
        return Ok(T::default());
    };
    serde_json::from_str(&json).map_err(|source| {
        tracing::error!(key, error = %source, "stored document is unreadable");
        DbError::Decode { key, source }
    })
}

fn encode<T: Serialize>(key: &'static str, value: &T) -> Result<String, DbError> {
    serde_json::to_string(value).map_err(|source| DbError::Encode { key, source })
}
