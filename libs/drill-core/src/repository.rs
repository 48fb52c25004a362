//! In-memory collection of study sets.

use crate::error::{DrillError, Result};
use crate::parser::{ParsedRecords, DELIMITER, VARIANT_SEPARATOR};
use crate::types::{ItemId, Sentence, StudySet, Word};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fields for a manually added word.
#[derive(Debug, Clone, Default)]
pub struct NewWord {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
    pub english: String,
}

/// Partial edit of a word. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct WordUpdate {
    pub traditional: Option<String>,
    pub simplified: Option<String>,
    pub pinyin: Option<String>,
    pub english: Option<String>,
}

/// A sentence that uses a given word, with its blank filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSentence {
    pub simplified: String,
    pub traditional: Option<String>,
}

/// Ordered collection of sets; the aggregate root for words and sentences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetRepository {
    sets: Vec<StudySet>,
}

impl SetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new set and return its id.
    pub fn create_set(&mut self, name: &str, words: Vec<Word>, sentences: Vec<Sentence>) -> ItemId {
        let set = StudySet::new(name, words, sentences);
        let id = set.id.clone();
        tracing::info!(
            set = %id,
            name,
            words = set.words.len(),
            sentences = set.sentences.len(),
            "created set"
        );
        self.sets.push(set);
        id
    }

    pub fn create_from_records(&mut self, name: &str, records: ParsedRecords) -> ItemId {
        self.create_set(name, records.words, records.sentences)
    }

    pub fn rename_set(&mut self, id: &ItemId, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DrillError::MissingField("name"));
        }
        self.set_mut(id)?.name = name.to_string();
        Ok(())
    }

    /// Remove a set with everything in it. History for its words is left alone.
    pub fn remove_set(&mut self, id: &ItemId) -> Result<StudySet> {
        let index = self
            .sets
            .iter()
            .position(|set| &set.id == id)
            .ok_or_else(|| DrillError::SetNotFound(id.clone()))?;
        Ok(self.sets.remove(index))
    }

    pub fn add_word(&mut self, set_id: &ItemId, new: NewWord) -> Result<ItemId> {
        require("simplified", &new.simplified)?;
        require("pinyin", &new.pinyin)?;
        require("english", &new.english)?;
        check_script("traditional", &new.traditional)?;

        let word = Word::new(&new.traditional, &new.simplified, &new.pinyin, &new.english);
        let id = word.id.clone();
        self.set_mut(set_id)?.words.push(word);
        Ok(id)
    }

    /// Apply `update` to a word, re-deriving its matching pinyin when the
    /// pinyin changes. The word keeps its id, so its history still applies.
    pub fn edit_word(&mut self, set_id: &ItemId, word_id: &ItemId, update: WordUpdate) -> Result<()> {
        for (field, value) in [
            ("simplified", &update.simplified),
            ("pinyin", &update.pinyin),
            ("english", &update.english),
        ] {
            if let Some(value) = value {
                require(field, value)?;
            }
        }
        if let Some(traditional) = &update.traditional {
            check_script("traditional", traditional)?;
        }

        let word = self.word_mut(set_id, word_id)?;
        if let Some(simplified) = update.simplified {
            word.simplified = simplified.trim().to_string();
        }
        if let Some(traditional) = update.traditional {
            word.traditional = traditional.trim().to_string();
        }
        if word.traditional.is_empty() {
            word.traditional = word.simplified.clone();
        }
        if let Some(pinyin) = update.pinyin {
            word.set_pinyin(&pinyin);
        }
        if let Some(english) = update.english {
            word.english = english.trim().to_string();
        }
        Ok(())
    }

    pub fn delete_word(&mut self, set_id: &ItemId, word_id: &ItemId) -> Result<Word> {
        let set = self.set_mut(set_id)?;
        let index = set
            .words
            .iter()
            .position(|word| &word.id == word_id)
            .ok_or_else(|| DrillError::WordNotFound {
                set: set_id.clone(),
                word: word_id.clone(),
            })?;
        Ok(set.words.remove(index))
    }

    pub fn get(&self, id: &ItemId) -> Option<&StudySet> {
        self.sets.iter().find(|set| &set.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudySet> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Find a sentence from any set that uses `word`.
    ///
    /// A sentence matches when its answer is either script form of the word,
    /// or when its blanked text contains the simplified form.
    pub fn example_sentence(&self, word: &Word) -> Option<ExampleSentence> {
        self.sets
            .iter()
            .flat_map(|set| &set.sentences)
            .find(|sentence| {
                sentence.answer == word.simplified
                    || sentence.answer == word.traditional
                    || sentence.chinese_with_blank.contains(&word.simplified)
            })
            .map(|sentence| ExampleSentence {
                simplified: sentence.filled(),
                traditional: sentence.filled_traditional(),
            })
    }

    fn set_mut(&mut self, id: &ItemId) -> Result<&mut StudySet> {
        self.sets
            .iter_mut()
            .find(|set| &set.id == id)
            .ok_or_else(|| DrillError::SetNotFound(id.clone()))
    }

    fn word_mut(&mut self, set_id: &ItemId, word_id: &ItemId) -> Result<&mut Word> {
        self.set_mut(set_id)?
            .words
            .iter_mut()
            .find(|word| &word.id == word_id)
            .ok_or_else(|| DrillError::WordNotFound {
                set: set_id.clone(),
                word: word_id.clone(),
            })
    }
}

/// Name for a set imported from `path`: the caller's label when given,
/// otherwise the file name without a `.csv` extension.
pub fn default_set_name(label: Option<&str>, path: &Path) -> String {
    if let Some(label) = label.map(str::trim).filter(|l| !l.is_empty()) {
        return label.to_string();
    }
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.len().checked_sub(4) {
        Some(cut)
            if file_name.is_char_boundary(cut)
                && file_name[cut..].eq_ignore_ascii_case(".csv") =>
        {
            file_name[..cut].to_string()
        }
        _ => file_name,
    }
}

/// A non-blank word field that can be written back out as a record row.
fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DrillError::MissingField(field));
    }
    if field == "simplified" {
        return check_script(field, value);
    }
    reject(field, value, DELIMITER)
}

fn check_script(field: &'static str, value: &str) -> Result<()> {
    reject(field, value, DELIMITER)?;
    reject(field, value, VARIANT_SEPARATOR)
}

fn reject(field: &'static str, value: &str, separator: char) -> Result<()> {
    if value.contains(separator) {
        return Err(DrillError::ReservedCharacter { field, separator });
    }
    Ok(())
}
