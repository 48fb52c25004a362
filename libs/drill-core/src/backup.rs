//! Backup document holding every set and the full answer history.
//!
//! ```json
//! { "sets": [...], "stats": { "<word id>": { "history": [true], "lastAttempt": 0 } },
//!   "exportedAt": "2024-01-01T00:00:00Z" }
//! ```
//!
//! On import `sets` and `stats` are applied independently: a field that is
//! missing or malformed leaves its in-memory counterpart untouched. A document
//! that is not a JSON object applies nothing.

use crate::error::BackupError;
use crate::history::HistoryStore;
use crate::repository::SetRepository;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub sets: SetRepository,
    pub stats: HistoryStore,
    pub exported_at: DateTime<Utc>,
}

impl Backup {
    /// Snapshot the current sets and history.
    pub fn capture(sets: &SetRepository, history: &HistoryStore) -> Self {
        Self {
            sets: sets.clone(),
            stats: history.clone(),
            exported_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// What happened to one top-level field during import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Applied,
    Missing,
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub sets: FieldOutcome,
    pub stats: FieldOutcome,
}

impl ImportReport {
    pub fn applied_anything(&self) -> bool {
        self.sets == FieldOutcome::Applied || self.stats == FieldOutcome::Applied
    }
}

/// Replace `sets` and `history` from a backup document.
pub fn import_backup(
    json: &str,
    sets: &mut SetRepository,
    history: &mut HistoryStore,
) -> Result<ImportReport, BackupError> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Object(mut fields) = document else {
        return Err(BackupError::NotAnObject);
    };

    let report = ImportReport {
        sets: apply_field(fields.remove("sets"), "sets", sets),
        stats: apply_field(fields.remove("stats"), "stats", history),
    };
    tracing::info!(?report, "imported backup");
    Ok(report)
}

fn apply_field<T: DeserializeOwned>(value: Option<Value>, name: &str, target: &mut T) -> FieldOutcome {
    match value {
        None | Some(Value::Null) => FieldOutcome::Missing,
        Some(value) => match serde_json::from_value(value) {
            Ok(parsed) => {
                *target = parsed;
                FieldOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(field = name, error = %e, "rejected backup field");
                FieldOutcome::Rejected(e.to_string())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn populated() -> (SetRepository, HistoryStore) {
        let mut sets = SetRepository::new();
        let records = parse("妳好/你好 | nǐ hǎo | hello\nGo | 我___去 | 要/要 | yào");
        let word_id = records.words[0].id.clone();
        sets.create_from_records("Basics", records);
        let mut history = HistoryStore::new();
        history.record(&word_id, true);
        history.record(&word_id, false);
        (sets, history)
    }

    #[test]
    fn export_then_import_reproduces_state() {
        let (sets, history) = populated();
        let json = Backup::capture(&sets, &history).to_json().unwrap();

        let mut restored_sets = SetRepository::new();
        let mut restored_history = HistoryStore::new();
        let report = import_backup(&json, &mut restored_sets, &mut restored_history).unwrap();

        assert_eq!(report.sets, FieldOutcome::Applied);
        assert_eq!(report.stats, FieldOutcome::Applied);
        // Timestamps are stored at millisecond precision.
        assert_eq!(restored_history.len(), history.len());
        for (id, entry) in history.iter() {
            let restored = restored_history.get(id).unwrap();
            assert_eq!(restored.history, entry.history);
            assert_eq!(
                restored.last_attempt.timestamp_millis(),
                entry.last_attempt.timestamp_millis()
            );
        }
        let original = sets.iter().next().unwrap();
        let restored = restored_sets.iter().next().unwrap();
        assert_eq!(restored.words, original.words);
        assert_eq!(restored.sentences, original.sentences);
        assert_eq!(
            restored.created_at.timestamp_millis(),
            original.created_at.timestamp_millis()
        );
    }

    #[test]
    fn export_uses_camel_case_keys() {
        let (sets, history) = populated();
        let value = serde_json::to_value(Backup::capture(&sets, &history)).unwrap();
        assert!(value.get("exportedAt").is_some());
        let set = &value["sets"][0];
        assert!(set.get("createdAt").is_some());
        assert!(set["words"][0].get("pinyinPlain").is_some());
        assert!(set["sentences"][0].get("chineseWithBlank").is_some());
    }

    #[test]
    fn malformed_document_applies_nothing() {
        let (mut sets, mut history) = populated();
        let before = (sets.clone(), history.clone());

        assert!(matches!(
            import_backup("{not json", &mut sets, &mut history),
            Err(BackupError::Json(_))
        ));
        assert!(matches!(
            import_backup("[1, 2]", &mut sets, &mut history),
            Err(BackupError::NotAnObject)
        ));
        assert_eq!((sets, history), before);
    }

    #[test]
    fn fields_are_applied_independently() {
        let (mut sets, mut history) = populated();
        let before_sets = sets.clone();

        let json = r#"{ "sets": "oops", "stats": { "w1": { "history": [false], "lastAttempt": 0 } } }"#;
        let report = import_backup(json, &mut sets, &mut history).unwrap();

        assert!(matches!(report.sets, FieldOutcome::Rejected(_)));
        assert_eq!(report.stats, FieldOutcome::Applied);
        assert_eq!(sets, before_sets);
        assert_eq!(history.len(), 1);
        assert_eq!(history.accuracy(&"w1".into()), Some(0));
    }

    #[test]
    fn missing_fields_leave_state_alone() {
        let (mut sets, mut history) = populated();
        let before = (sets.clone(), history.clone());
        let report = import_backup(r#"{ "exportedAt": "x" }"#, &mut sets, &mut history).unwrap();
        assert_eq!(report.sets, FieldOutcome::Missing);
        assert_eq!(report.stats, FieldOutcome::Missing);
        assert!(!report.applied_anything());
        assert_eq!((sets, history), before);
    }

    #[test]
    fn accepts_history_entries_without_log() {
        let mut sets = SetRepository::new();
        let mut history = HistoryStore::new();
        let json = r#"{ "stats": { "w1": { "lastAttempt": 1700000000000 } } }"#;
        let report = import_backup(json, &mut sets, &mut history).unwrap();
        assert_eq!(report.stats, FieldOutcome::Applied);
        assert_eq!(history.accuracy(&"w1".into()), None);
    }
}
