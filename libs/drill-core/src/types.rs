//! Core types for the drill application.

use crate::matching::normalize_pinyin;
use crate::parser::BLANK_MARKER;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for sets, words and sentences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A vocabulary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: ItemId,
    pub traditional: String,
    pub simplified: String,
    /// Display form, whitespace collapsed.
    pub pinyin: String,
    /// Matching form, see [`normalize_pinyin`].
    pub pinyin_plain: String,
    pub english: String,
}

impl Word {
    /// Build a word with a fresh id, collapsing pinyin whitespace and caching its
    /// normalized form. An empty `traditional` falls back to `simplified`.
    pub fn new(traditional: &str, simplified: &str, pinyin: &str, english: &str) -> Self {
        let simplified = simplified.trim();
        let traditional = match traditional.trim() {
            "" => simplified,
            t => t,
        };
        Self {
            id: ItemId::generate(),
            traditional: traditional.to_string(),
            simplified: simplified.to_string(),
            pinyin: collapse_whitespace(pinyin),
            pinyin_plain: normalize_pinyin(pinyin),
            english: english.trim().to_string(),
        }
    }

    /// Replace the pinyin and re-derive its normalized form.
    pub fn set_pinyin(&mut self, pinyin: &str) {
        self.pinyin = collapse_whitespace(pinyin);
        self.pinyin_plain = normalize_pinyin(pinyin);
    }
}

/// A fill-in-the-blank sentence.
///
/// Optional text fields use the empty string for "absent", the same way backups store them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub id: ItemId,
    pub english: String,
    pub chinese_with_blank: String,
    #[serde(default)]
    pub chinese_traditional: String,
    pub answer: String,
    #[serde(default)]
    pub answer_traditional: String,
    #[serde(default)]
    pub answer_pinyin: String,
    #[serde(default)]
    pub answer_pinyin_plain: String,
}

impl Sentence {
    pub fn new(
        english: &str,
        chinese_with_blank: &str,
        chinese_traditional: &str,
        answer: &str,
        answer_traditional: &str,
        answer_pinyin: &str,
    ) -> Self {
        Self {
            id: ItemId::generate(),
            english: english.trim().to_string(),
            chinese_with_blank: chinese_with_blank.trim().to_string(),
            chinese_traditional: chinese_traditional.trim().to_string(),
            answer: answer.trim().to_string(),
            answer_traditional: answer_traditional.trim().to_string(),
            answer_pinyin: answer_pinyin.trim().to_string(),
            answer_pinyin_plain: normalize_pinyin(answer_pinyin),
        }
    }

    pub fn traditional_answer(&self) -> Option<&str> {
        non_empty(&self.answer_traditional)
    }

    pub fn traditional_sentence(&self) -> Option<&str> {
        non_empty(&self.chinese_traditional)
    }

    pub fn answer_pinyin_plain(&self) -> Option<&str> {
        non_empty(&self.answer_pinyin_plain)
    }

    /// The simplified sentence with every blank filled by the answer.
    pub fn filled(&self) -> String {
        self.chinese_with_blank.replace(BLANK_MARKER, &self.answer)
    }

    /// The traditional sentence with its blanks filled, preferring the
    /// traditional answer.
    pub fn filled_traditional(&self) -> Option<String> {
        let answer = self.traditional_answer().unwrap_or(&self.answer);
        self.traditional_sentence()
            .map(|sentence| sentence.replace(BLANK_MARKER, answer))
    }
}

/// A named group of words and sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySet {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl StudySet {
    pub fn new(name: &str, words: Vec<Word>, sentences: Vec<Sentence>) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.to_string(),
            words,
            sentences,
            created_at: Utc::now(),
        }
    }

    pub fn word(&self, id: &ItemId) -> Option<&Word> {
        self.words.iter().find(|w| &w.id == id)
    }

    /// Quiz modes that would produce a non-empty queue shape for this set.
    ///
    /// Review is offered whenever the set has words; whether any of them are
    /// actually weak is only known once history is consulted.
    pub fn available_modes(&self) -> Vec<QuizMode> {
        let has_words = !self.words.is_empty();
        let has_sentences = !self.sentences.is_empty();
        let mut modes = Vec::new();
        if has_words {
            modes.push(QuizMode::Word);
        }
        if has_sentences {
            modes.push(QuizMode::Sentence);
        }
        if has_words && has_sentences {
            modes.push(QuizMode::Both);
        }
        if has_words {
            modes.push(QuizMode::Review);
        }
        modes
    }
}

/// Which items a quiz session draws from a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    Word,
    Sentence,
    Both,
    Review,
}

impl QuizMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Sentence => "sentence",
            Self::Both => "both",
            Self::Review => "review",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "word" => Some(Self::Word),
            "sentence" => Some(Self::Sentence),
            "both" => Some(Self::Both),
            "review" => Some(Self::Review),
            _ => None,
        }
    }
}

/// Queue ordering for non-review sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOrder {
    Random,
    Sequential,
}

impl Default for QueueOrder {
    fn default() -> Self {
        Self::Random
    }
}

impl QueueOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sequential => "sequential",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "random" => Some(Self::Random),
            "sequential" => Some(Self::Sequential),
            _ => None,
        }
    }
}

/// User settings persisted by the front end.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub audio_enabled: bool,
    pub default_order: QueueOrder,
    /// Program (plus arguments) that speaks its final argument aloud.
    pub speech_command: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio_enabled: true,
            default_order: QueueOrder::default(),
            speech_command: None,
        }
    }
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
