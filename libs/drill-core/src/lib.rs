//! Core library for the hanzi drill.
//!
//! Provides:
//! - Pipe-delimited record parser for words and fill-in-the-blank sentences
//! - Answer matching with tone-insensitive pinyin normalization
//! - Per-word answer history and review selection
//! - Quiz session state machine
//! - Study set repository and JSON backups

pub mod backup;
pub mod error;
pub mod history;
pub mod matching;
pub mod parser;
pub mod quiz;
pub mod repository;
pub mod types;

pub use backup::{import_backup, Backup, FieldOutcome, ImportReport};
pub use error::{BackupError, DrillError, Result};
pub use history::{HistoryEntry, HistoryStore, ReviewRank, HISTORY_CAP, REVIEW_WINDOW};
pub use matching::{grade_sentence, grade_word, normalize_pinyin, MatchChannel, MatchResult};
pub use parser::{parse, render, ParsedRecords};
pub use quiz::{
    build_queue, session_label, NoopSpeaker, Phase, QuizEngine, QuizItem, SessionStats,
    SessionSummary, Speaker, Verdict,
};
pub use repository::{default_set_name, ExampleSentence, NewWord, SetRepository, WordUpdate};
pub use types::{ItemId, QueueOrder, QuizMode, Sentence, Settings, StudySet, Word};
