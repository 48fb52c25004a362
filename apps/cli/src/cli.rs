//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use drill_core::types::{QueueOrder, QuizMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hanzi-drill")]
#[command(about = "Drill Chinese vocabulary and fill-in-the-blank sentences")]
pub struct Cli {
    /// Database file (defaults to $HANZI_DRILL_DB, then the local data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage study sets
    #[command(subcommand)]
    Set(SetCommand),

    /// Add, edit or delete words in a set
    #[command(subcommand)]
    Word(WordCommand),

    /// Start an interactive quiz
    Quiz {
        /// Set id, id prefix or name
        set: String,

        /// word, sentence, both or review (defaults to the first the set offers)
        #[arg(long, value_parser = parse_mode)]
        mode: Option<QuizMode>,

        /// random or sequential (defaults to the saved setting)
        #[arg(long, value_parser = parse_order)]
        order: Option<QueueOrder>,
    },

    /// Export or import a JSON backup of all sets and history
    #[command(subcommand)]
    Backup(BackupCommand),

    /// Show or change settings
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand)]
pub enum SetCommand {
    /// Import a pipe-delimited file as a new set
    Import {
        file: PathBuf,

        /// Set name (defaults to the file name without .csv)
        #[arg(long)]
        name: Option<String>,
    },

    /// List all sets
    List,

    /// Show the words and sentences in a set
    Show {
        set: String,

        /// Print the set in its import format
        #[arg(long)]
        text: bool,
    },

    Rename {
        set: String,
        name: String,
    },

    Remove {
        set: String,
    },
}

#[derive(Subcommand)]
pub enum WordCommand {
    Add {
        set: String,
        simplified: String,
        pinyin: String,
        english: String,

        /// Traditional form (defaults to the simplified form)
        #[arg(long)]
        traditional: Option<String>,
    },

    /// Change fields of a word, keeping its history
    Edit {
        set: String,

        /// Word id, id prefix, or its simplified or traditional form
        word: String,

        #[command(flatten)]
        fields: WordFields,
    },

    Delete {
        set: String,
        word: String,
    },
}

#[derive(Args)]
pub struct WordFields {
    #[arg(long)]
    pub simplified: Option<String>,
    #[arg(long)]
    pub traditional: Option<String>,
    #[arg(long)]
    pub pinyin: Option<String>,
    #[arg(long)]
    pub english: Option<String>,
}

#[derive(Subcommand)]
pub enum BackupCommand {
    /// Write a backup to a file, or to stdout
    Export { file: Option<PathBuf> },

    /// Replace sets and history from a backup file
    Import { file: PathBuf },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    Show,

    /// Keys: audio (on/off), order (random/sequential), speech (command line or none)
    Set { key: String, value: String },
}

fn parse_mode(s: &str) -> Result<QuizMode, String> {
    QuizMode::from_str(s).ok_or_else(|| format!("unknown mode '{s}'"))
}

fn parse_order(s: &str) -> Result<QueueOrder, String> {
    QueueOrder::from_str(s).ok_or_else(|| format!("unknown order '{s}'"))
}
