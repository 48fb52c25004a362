//! Word commands: add, edit, delete.

use super::{resolve_set, resolve_word, short_id, Result};
use crate::state::AppState;
use drill_core::{NewWord, WordUpdate};
use std::io::Write;

pub fn add_word(state: &mut AppState, set_key: &str, word: NewWord, out: &mut impl Write) -> Result<()> {
    let set_id = resolve_set(&state.sets, set_key)?.id.clone();
    let word_id = state.sets.add_word(&set_id, word)?;
    state.save()?;
    writeln!(out, "Added word {}", short_id(&word_id))?;
    Ok(())
}

/// Edit a word in place. Its history carries over since the id is kept.
pub fn edit_word(
    state: &mut AppState,
    set_key: &str,
    word_key: &str,
    update: WordUpdate,
    out: &mut impl Write,
) -> Result<()> {
    let set = resolve_set(&state.sets, set_key)?;
    let (set_id, word_id) = (set.id.clone(), resolve_word(set, word_key)?.id.clone());
    state.sets.edit_word(&set_id, &word_id, update)?;
    state.save()?;
    writeln!(out, "Updated word {}", short_id(&word_id))?;
    Ok(())
}

pub fn delete_word(state: &mut AppState, set_key: &str, word_key: &str, out: &mut impl Write) -> Result<()> {
    let set = resolve_set(&state.sets, set_key)?;
    let (set_id, word_id) = (set.id.clone(), resolve_word(set, word_key)?.id.clone());
    let removed = state.sets.delete_word(&set_id, &word_id)?;
    state.save()?;
    writeln!(out, "Deleted {} ({})", removed.simplified, removed.english)?;
    Ok(())
}
