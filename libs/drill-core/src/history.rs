//! Per-word answer history and review selection.
//!
//! Each word keeps a short log of its most recent outcomes. Only words are
//! tracked; sentence outcomes are never recorded.

use crate::types::{ItemId, Word};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Maximum outcomes kept per word; older ones are dropped first.
pub const HISTORY_CAP: usize = 20;

/// Number of most recent outcomes that decide whether a word needs review.
pub const REVIEW_WINDOW: usize = 5;

/// Outcome log for one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(default, deserialize_with = "capped_history")]
    pub history: Vec<bool>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_attempt: DateTime<Utc>,
}

fn truncate_to_cap(history: &mut Vec<bool>) {
    if history.len() > HISTORY_CAP {
        let excess = history.len() - HISTORY_CAP;
        history.drain(..excess);
    }
}

fn capped_history<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<bool>, D::Error> {
    let mut history = Vec::<bool>::deserialize(deserializer)?;
    truncate_to_cap(&mut history);
    Ok(history)
}

impl HistoryEntry {
    fn push(&mut self, correct: bool, now: DateTime<Utc>) {
        self.history.push(correct);
        truncate_to_cap(&mut self.history);
        self.last_attempt = now;
    }

    /// The most recent `window` outcomes, oldest first.
    pub fn recent(&self, window: usize) -> &[bool] {
        let start = self.history.len().saturating_sub(window);
        &self.history[start..]
    }

    pub fn correct_count(&self) -> usize {
        self.history.iter().filter(|&&ok| ok).count()
    }
}

/// Sort key for review ordering: weakest first, then most recently attempted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewRank {
    pub recent_accuracy: f64,
    pub last_attempt: DateTime<Utc>,
}

impl Eq for ReviewRank {}

impl Ord for ReviewRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.recent_accuracy
            .total_cmp(&other.recent_accuracy)
            .then_with(|| other.last_attempt.cmp(&self.last_attempt))
    }
}

impl PartialOrd for ReviewRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// History for all words, keyed by word id.
///
/// Entries outlive the words they describe; deleting a word or set leaves its
/// entry behind, unreachable but harmless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryStore {
    entries: BTreeMap<ItemId, HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome for `id`, creating its entry on first use.
    pub fn record(&mut self, id: &ItemId, correct: bool) {
        self.record_at(id, correct, Utc::now());
    }

    pub fn record_at(&mut self, id: &ItemId, correct: bool, now: DateTime<Utc>) {
        self.entries
            .entry(id.clone())
            .or_insert_with(|| HistoryEntry {
                history: Vec::with_capacity(HISTORY_CAP),
                last_attempt: now,
            })
            .push(correct, now);
    }

    /// Flip the latest outcome of `id` to correct if it is currently a failure.
    ///
    /// Returns whether anything changed.
    pub fn override_last(&mut self, id: &ItemId) -> bool {
        match self
            .entries
            .get_mut(id)
            .and_then(|entry| entry.history.last_mut())
        {
            Some(last) if !*last => {
                *last = true;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: &ItemId) -> Option<&HistoryEntry> {
        self.entries.get(id)
    }

    /// Percentage of correct outcomes over the whole stored history.
    pub fn accuracy(&self, id: &ItemId) -> Option<u32> {
        let entry = self.get(id)?;
        percent(entry.correct_count(), entry.history.len())
    }

    /// Pooled accuracy over every outcome of the given words.
    pub fn set_accuracy<'a>(&self, words: impl IntoIterator<Item = &'a Word>) -> Option<u32> {
        let (correct, total) = words
            .into_iter()
            .filter_map(|word| self.get(&word.id))
            .fold((0, 0), |(correct, total), entry| {
                (correct + entry.correct_count(), total + entry.history.len())
            });
        percent(correct, total)
    }

    /// Whether `id` has a failure among its most recent `window` outcomes.
    ///
    /// Words with no history, and words whose last `window` outcomes are all
    /// correct, do not need review. A partially filled window with no failure
    /// yet does not either.
    pub fn needs_review(&self, id: &ItemId, window: usize) -> bool {
        let Some(entry) = self.get(id) else {
            return false;
        };
        let recent = entry.recent(window);
        if recent.is_empty() {
            return false;
        }
        if recent.len() >= window && recent.iter().all(|&ok| ok) {
            return false;
        }
        recent.iter().any(|&ok| !ok)
    }

    pub fn review_rank(&self, id: &ItemId, window: usize) -> ReviewRank {
        match self.get(id) {
            Some(entry) if !entry.history.is_empty() => {
                let recent = entry.recent(window);
                let correct = recent.iter().filter(|&&ok| ok).count();
                ReviewRank {
                    recent_accuracy: correct as f64 / recent.len() as f64,
                    last_attempt: entry.last_attempt,
                }
            }
            _ => ReviewRank {
                recent_accuracy: 1.0,
                last_attempt: DateTime::<Utc>::default(),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &HistoryEntry)> {
        self.entries.iter()
    }
}

fn percent(correct: usize, total: usize) -> Option<u32> {
    if total == 0 {
        return None;
    }
    Some((correct as f64 * 100.0 / total as f64).round() as u32)
}
