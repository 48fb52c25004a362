//! Backup export and import.

use super::Result;
use crate::state::AppState;
use drill_core::{import_backup, Backup, FieldOutcome};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write a backup of every set and all history to `path`, or to `out`.
pub fn export_backup(state: &AppState, path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let json = Backup::capture(&state.sets, &state.history).to_json()?;
    match path {
        Some(path) => {
            fs::write(path, json)?;
            tracing::info!(path = %path.display(), sets = state.sets.len(), "exported backup");
            writeln!(out, "Exported {} sets to {}", state.sets.len(), path.display())?;
        }
        None => writeln!(out, "{json}")?,
    }
    Ok(())
}

/// Replace sets and history from a backup file.
pub fn restore_backup(state: &mut AppState, path: &Path, out: &mut impl Write) -> Result<()> {
    let json = fs::read_to_string(path)?;
    let report = import_backup(&json, &mut state.sets, &mut state.history)?;
    if report.applied_anything() {
        state.save()?;
    }
    for (name, outcome) in [("sets", &report.sets), ("stats", &report.stats)] {
        match outcome {
            FieldOutcome::Applied => writeln!(out, "{name}: restored")?,
            FieldOutcome::Missing => writeln!(out, "{name}: not in backup, kept current")?,
            FieldOutcome::Rejected(reason) => writeln!(out, "{name}: unreadable ({reason}), kept current")?,
        }
    }
    Ok(())
}
