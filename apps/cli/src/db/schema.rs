//! SQLite schema definitions.

/// Blob key holding the JSON of every study set.
pub const SETS_KEY: &str = "sets";

/// Blob key holding the JSON of the answer history.
pub const STATS_KEY: &str = "stats";

pub const SCHEMA: &str = r#"
-- JSON documents keyed by name
CREATE TABLE IF NOT EXISTS blobs (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- User settings
CREATE TABLE IF NOT EXISTS settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    audio_enabled INTEGER NOT NULL DEFAULT 1,
    default_order TEXT NOT NULL DEFAULT 'random',
    speech_command TEXT
);
"#;

/// Initialize settings if not exists.
pub const INIT_SETTINGS: &str = r#"
INSERT OR IGNORE INTO settings (id) VALUES (1);
"#;
