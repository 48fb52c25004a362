//! Commands behind each CLI subcommand.

pub mod backup;
pub mod quiz;
pub mod set;
pub mod settings;
pub mod word;

use crate::db::DbError;
use drill_core::types::{ItemId, StudySet, Word};
use drill_core::{BackupError, DrillError, SetRepository};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no set matches '{0}'")]
    UnknownSet(String),

    #[error("'{0}' matches more than one set, use its id")]
    AmbiguousSet(String),

    #[error("no word in this set matches '{0}'")]
    UnknownWord(String),

    #[error("'{0}' matches more than one word, use its id")]
    AmbiguousWord(String),

    #[error("nothing could be read from {}", .0.display())]
    NothingParsed(PathBuf),

    #[error("unknown setting '{0}' (expected audio, order or speech)")]
    UnknownSetting(String),

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error(transparent)]
    Drill(#[from] DrillError),

    #[error(transparent)]
    Backup(#[from] BackupError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;

/// Find a set by id, unique case-insensitive name, or unique id prefix.
pub fn resolve_set<'a>(sets: &'a SetRepository, key: &str) -> Result<&'a StudySet> {
    let key = key.trim();
    if let Some(set) = sets.get(&ItemId::from(key)) {
        return Ok(set);
    }
    let by_name: Vec<&StudySet> = sets
        .iter()
        .filter(|set| set.name.eq_ignore_ascii_case(key))
        .collect();
    let candidates = if by_name.is_empty() {
        sets.iter()
            .filter(|set| !key.is_empty() && set.id.as_str().starts_with(key))
            .collect()
    } else {
        by_name
    };
    match candidates.as_slice() {
        [set] => Ok(*set),
        [] => Err(CommandError::UnknownSet(key.to_string())),
        _ => Err(CommandError::AmbiguousSet(key.to_string())),
    }
}

/// Find a word in `set` by id, unique id prefix, or its simplified or
/// traditional form.
pub fn resolve_word<'a>(set: &'a StudySet, key: &str) -> Result<&'a Word> {
    let key = key.trim();
    if let Some(word) = set.word(&ItemId::from(key)) {
        return Ok(word);
    }
    let by_form: Vec<&Word> = set
        .words
        .iter()
        .filter(|word| word.simplified == key || word.traditional == key)
        .collect();
    let candidates = if by_form.is_empty() {
        set.words
            .iter()
            .filter(|word| !key.is_empty() && word.id.as_str().starts_with(key))
            .collect()
    } else {
        by_form
    };
    match candidates.as_slice() {
        [word] => Ok(*word),
        [] => Err(CommandError::UnknownWord(key.to_string())),
        _ => Err(CommandError::AmbiguousWord(key.to_string())),
    }
}

/// First eight characters of an id, enough to type back in.
pub fn short_id(id: &ItemId) -> &str {
    let id = id.as_str();
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::db::SqliteStore;
    use crate::state::AppState;
    use drill_core::parse;
    use drill_core::types::ItemId;

    pub const SAMPLE: &str = "\
traditional | pinyin | english
妳好/你好 | nǐ hǎo | hello
謝謝/谢谢 | xiè xie | thanks
好 | hǎo | good
I want to go | 我___去 | 要 | yào
";

    pub fn state() -> AppState {
        AppState::load(SqliteStore::open_in_memory().unwrap()).unwrap()
    }

    pub fn state_with_sample() -> (AppState, ItemId) {
        let mut state = state();
        let id = state.sets.create_from_records("HSK 1", parse(SAMPLE));
        (state, id)
    }

    pub fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }
}
