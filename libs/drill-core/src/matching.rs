//! Answer matching for typed quiz answers.
//!
//! An answer is accepted through any one of three channels: the simplified
//! script, the traditional script, or the pinyin spelling with tone marks,
//! case and spacing ignored. Script comparisons are exact.

use crate::types::{Sentence, Word};

/// Which form of the reference answer the typed input matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchChannel {
    Pinyin,
    Simplified,
    Traditional,
}

/// Result of grading a typed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// The channel that accepted the answer, if any.
    pub channel: Option<MatchChannel>,
    /// Typed answer after trimming (for display).
    pub typed: String,
}

impl MatchResult {
    fn new(typed: &str, channel: Option<MatchChannel>) -> Self {
        Self {
            is_correct: channel.is_some(),
            channel,
            typed: typed.to_string(),
        }
    }
}

/// Fold a pinyin string into its matching form.
///
/// Lowercases, drops all whitespace and replaces tone-marked vowels with their
/// bare letter. Every form of `ü` becomes `v`. Anything else passes through.
pub fn normalize_pinyin(pinyin: &str) -> String {
    pinyin
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .map(fold_tone)
        .collect()
}

fn fold_tone(c: char) -> char {
    match c {
        'ā' | 'á' | 'ǎ' | 'à' => 'a',
        'ē' | 'é' | 'ě' | 'è' => 'e',
        'ī' | 'í' | 'ǐ' | 'ì' => 'i',
        'ō' | 'ó' | 'ǒ' | 'ò' => 'o',
        'ū' | 'ú' | 'ǔ' | 'ù' => 'u',
        'ǖ' | 'ǘ' | 'ǚ' | 'ǜ' | 'ü' => 'v',
        other => other,
    }
}

/// Grade a typed answer against a word.
pub fn grade_word(input: &str, word: &Word) -> MatchResult {
    let typed = input.trim();
    if typed.is_empty() {
        return MatchResult::new(typed, None);
    }

    let channel = if normalize_pinyin(typed) == word.pinyin_plain {
        Some(MatchChannel::Pinyin)
    } else if typed == word.simplified {
        Some(MatchChannel::Simplified)
    } else if typed == word.traditional {
        Some(MatchChannel::Traditional)
    } else {
        None
    };
    MatchResult::new(typed, channel)
}

/// Grade a typed answer against the blank of a sentence.
pub fn grade_sentence(input: &str, sentence: &Sentence) -> MatchResult {
    let typed = input.trim();
    if typed.is_empty() {
        return MatchResult::new(typed, None);
    }

    let channel = if typed == sentence.answer {
        Some(MatchChannel::Simplified)
    } else if sentence.traditional_answer() == Some(typed) {
        Some(MatchChannel::Traditional)
    } else if sentence
        .answer_pinyin_plain()
        .is_some_and(|plain| normalize_pinyin(typed) == plain)
    {
        Some(MatchChannel::Pinyin)
    } else {
        None
    };
    MatchResult::new(typed, channel)
}

/// The first `len` characters of `target`, clamped to its length.
pub fn hint_prefix(target: &str, len: usize) -> String {
    target.chars().take(len).collect()
}
