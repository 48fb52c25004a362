//! Repository pattern for database access.

use crate::db::error::DbError;
use chrono::Utc;
use drill_core::types::{QueueOrder, Settings};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

type Result<T> = std::result::Result<T, DbError>;

/// Named JSON documents.
pub trait BlobRepository {
    fn load_blob(&self, key: &str) -> Result<Option<String>>;
    fn save_blob(&self, key: &str, value: &str) -> Result<()>;
    /// Write several blobs in one transaction.
    fn save_blobs(&self, entries: &[(&str, &str)]) -> Result<()>;
}

/// Repository for settings operations.
pub trait SettingsRepository {
    fn get_settings(&self) -> Result<Settings>;
    fn save_settings(&self, settings: &Settings) -> Result<()>;
}

/// SQLite implementation of repositories.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_SETTINGS)?;
        Ok(())
    }

    fn upsert_blob(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

impl BlobRepository for SqliteStore {
    fn load_blob(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM blobs WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Into::into)
    }

    fn save_blob(&self, key: &str, value: &str) -> Result<()> {
        Self::upsert_blob(&self.conn, key, value)
    }

    fn save_blobs(&self, entries: &[(&str, &str)]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        for (key, value) in entries {
            Self::upsert_blob(&tx, key, value)?;
        }
        tx.commit()?;
        Ok(())
    }
}

impl SettingsRepository for SqliteStore {
    fn get_settings(&self) -> Result<Settings> {
        self.conn
            .query_row(
                "SELECT audio_enabled, default_order, speech_command FROM settings WHERE id = 1",
                [],
                |row| {
                    let order: String = row.get(1)?;
                    Ok(Settings {
                        audio_enabled: row.get(0)?,
                        default_order: QueueOrder::from_str(&order).unwrap_or_default(),
                        speech_command: row.get(2)?,
                    })
                },
            )
            .map_err(Into::into)
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.conn.execute(
            "UPDATE settings SET audio_enabled = ?1, default_order = ?2, speech_command = ?3 WHERE id = 1",
            params![
                settings.audio_enabled,
                settings.default_order.as_str(),
                settings.speech_command,
            ],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blobs_round_trip_and_overwrite() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.load_blob("sets").unwrap(), None);

        store.save_blob("sets", "[]").unwrap();
        store.save_blob("sets", "[1]").unwrap();
        assert_eq!(store.load_blob("sets").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn save_blobs_writes_every_entry() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.save_blobs(&[("sets", "[]"), ("stats", "{}")]).unwrap();
        assert_eq!(store.load_blob("sets").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.load_blob("stats").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn settings_start_at_defaults() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get_settings().unwrap(), Settings::default());
    }

    #[test]
    fn settings_persist() {
        let store = SqliteStore::open_in_memory().unwrap();
        let settings = Settings {
            audio_enabled: false,
            default_order: QueueOrder::Sequential,
            speech_command: Some("say -v Ting-Ting".to_string()),
        };
        store.save_settings(&settings).unwrap();
        assert_eq!(store.get_settings().unwrap(), settings);
    }

    #[test]
    fn reopening_a_file_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drill.db");
        SqliteStore::open(&path).unwrap().save_blob("stats", "{}").unwrap();

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.load_blob("stats").unwrap().as_deref(), Some("{}"));
    }
}
