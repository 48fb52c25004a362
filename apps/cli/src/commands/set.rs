//! Set commands: import, list, show, rename, remove.

use super::{resolve_set, short_id, CommandError, Result};
use crate::state::AppState;
use drill_core::{default_set_name, parse, render};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Import a pipe-delimited file as a new set.
pub fn import_file(state: &mut AppState, path: &Path, name: Option<&str>, out: &mut impl Write) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let records = parse(&content);
    if records.is_empty() {
        return Err(CommandError::NothingParsed(path.to_path_buf()));
    }

    let name = default_set_name(name, path);
    let (words, sentences) = (records.words.len(), records.sentences.len());
    let id = state.sets.create_from_records(&name, records);
    state.save()?;

    tracing::info!(set = %id, path = %path.display(), "imported file");
    writeln!(
        out,
        "Imported {words} words and {sentences} sentences into \"{name}\" ({})",
        short_id(&id)
    )?;
    Ok(())
}

/// One line per set with its size and pooled accuracy.
pub fn list_sets(state: &AppState, out: &mut impl Write) -> Result<()> {
    if state.sets.is_empty() {
        writeln!(out, "No sets yet. Import one with `hanzi-drill set import <file>`.")?;
        return Ok(());
    }
    for set in state.sets.iter() {
        let accuracy = state
            .history
            .set_accuracy(&set.words)
            .map_or_else(|| "-".to_string(), |acc| format!("{acc}%"));
        let modes: Vec<&str> = set.available_modes().iter().map(|m| m.as_str()).collect();
        writeln!(
            out,
            "{}  {}  {} words, {} sentences  accuracy {}  modes: {}",
            short_id(&set.id),
            set.name,
            set.words.len(),
            set.sentences.len(),
            accuracy,
            modes.join(", ")
        )?;
    }
    Ok(())
}

/// Words with per-word accuracy, then sentences. With `as_text`, print the
/// set in its import format instead.
pub fn show_set(state: &AppState, key: &str, as_text: bool, out: &mut impl Write) -> Result<()> {
    let set = resolve_set(&state.sets, key)?;
    if as_text {
        writeln!(out, "{}", render(&set.words, &set.sentences))?;
        return Ok(());
    }

    writeln!(out, "{} ({})", set.name, set.id)?;
    if !set.words.is_empty() {
        writeln!(out, "\nWords:")?;
    }
    for word in &set.words {
        let script = if word.traditional != word.simplified {
            format!("{} ({})", word.simplified, word.traditional)
        } else {
            word.simplified.clone()
        };
        let accuracy = state
            .history
            .accuracy(&word.id)
            .map_or_else(|| "-".to_string(), |acc| format!("{acc}%"));
        writeln!(
            out,
            "  {}  {}  {}  {}  [{}]",
            short_id(&word.id),
            script,
            word.pinyin,
            word.english,
            accuracy
        )?;
    }
    if !set.sentences.is_empty() {
        writeln!(out, "\nSentences:")?;
    }
    for sentence in &set.sentences {
        writeln!(out, "  {}  {}  ({})", sentence.chinese_with_blank, sentence.english, sentence.answer)?;
    }
    Ok(())
}

pub fn rename_set(state: &mut AppState, key: &str, name: &str, out: &mut impl Write) -> Result<()> {
    let id = resolve_set(&state.sets, key)?.id.clone();
    state.sets.rename_set(&id, name)?;
    state.save()?;
    writeln!(out, "Renamed set {} to \"{}\"", short_id(&id), name.trim())?;
    Ok(())
}

pub fn remove_set(state: &mut AppState, key: &str, out: &mut impl Write) -> Result<()> {
    let id = resolve_set(&state.sets, key)?.id.clone();
    let removed = state.sets.remove_set(&id)?;
    state.save()?;
    writeln!(out, "Removed \"{}\"", removed.name)?;
    Ok(())
}
