//! Settings commands.

use super::{CommandError, Result};
use crate::state::AppState;
use drill_core::types::{QueueOrder, Settings};
use std::io::Write;

pub fn show_settings(state: &AppState, out: &mut impl Write) -> Result<()> {
    let settings = &state.settings;
    writeln!(out, "audio   {}", if settings.audio_enabled { "on" } else { "off" })?;
    writeln!(out, "order   {}", settings.default_order.as_str())?;
    writeln!(out, "speech  {}", settings.speech_command.as_deref().unwrap_or("(none)"))?;
    Ok(())
}

/// Change one setting. Keys: `audio` (on/off), `order` (random/sequential),
/// `speech` (a command line, or `none` to clear).
pub fn set_setting(state: &mut AppState, key: &str, value: &str, out: &mut impl Write) -> Result<()> {
    apply(&mut state.settings, key, value)?;
    state.save_settings()?;
    tracing::info!(key, value, "changed setting");
    writeln!(out, "{key} = {value}")?;
    Ok(())
}

fn apply(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    let value = value.trim();
    match key {
        "audio" => {
            settings.audio_enabled = parse_switch(value).ok_or_else(|| CommandError::InvalidValue {
                key: "audio",
                value: value.to_string(),
            })?;
        }
        "order" => {
            settings.default_order =
                QueueOrder::from_str(value).ok_or_else(|| CommandError::InvalidValue {
                    key: "order",
                    value: value.to_string(),
                })?;
        }
        "speech" => {
            settings.speech_command = match value {
                "" | "none" => None,
                command => Some(command.to_string()),
            };
        }
        other => return Err(CommandError::UnknownSetting(other.to_string())),
    }
    Ok(())
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
