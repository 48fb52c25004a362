mod cli;
mod commands;
mod db;
mod speech;
mod state;

use anyhow::Context;
use clap::Parser;
use cli::{BackupCommand, Cli, Command, SetCommand, SettingsCommand, WordCommand};
use db::SqliteStore;
use drill_core::{NewWord, QuizEngine, WordUpdate};
use state::AppState;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DB_ENV: &str = "HANZI_DRILL_DB";

fn get_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(DB_ENV).map(PathBuf::from))
        .unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("hanzi-drill")
                .join("drill.db")
        })
}

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let db_path = get_db_path(cli.db);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    tracing::debug!(path = %db_path.display(), "opening database");
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("opening {}", db_path.display()))?;
    let mut state = AppState::load(store)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Set(command) => match command {
            SetCommand::Import { file, name } => {
                commands::set::import_file(&mut state, &file, name.as_deref(), &mut out)?
            }
            SetCommand::List => commands::set::list_sets(&state, &mut out)?,
            SetCommand::Show { set, text } => commands::set::show_set(&state, &set, text, &mut out)?,
            SetCommand::Rename { set, name } => {
                commands::set::rename_set(&mut state, &set, &name, &mut out)?
            }
            SetCommand::Remove { set } => commands::set::remove_set(&mut state, &set, &mut out)?,
        },
        Command::Word(command) => match command {
            WordCommand::Add {
                set,
                simplified,
                pinyin,
                english,
                traditional,
            } => {
                let word = NewWord {
                    traditional: traditional.unwrap_or_default(),
                    simplified,
                    pinyin,
                    english,
                };
                commands::word::add_word(&mut state, &set, word, &mut out)?
            }
            WordCommand::Edit { set, word, fields } => {
                let update = WordUpdate {
                    traditional: fields.traditional,
                    simplified: fields.simplified,
                    pinyin: fields.pinyin,
                    english: fields.english,
                };
                commands::word::edit_word(&mut state, &set, &word, update, &mut out)?
            }
            WordCommand::Delete { set, word } => {
                commands::word::delete_word(&mut state, &set, &word, &mut out)?
            }
        },
        Command::Quiz { set, mode, order } => {
            let speaker = speech::speaker_for(&state.settings);
            let mut engine = QuizEngine::new(speaker, state.settings.audio_enabled);
            let stdin = io::stdin();
            commands::quiz::run_quiz(
                &mut state,
                &mut engine,
                &set,
                mode,
                order,
                &mut stdin.lock(),
                &mut out,
            )?;
        }
        Command::Backup(command) => match command {
            BackupCommand::Export { file } => {
                commands::backup::export_backup(&state, file.as_deref(), &mut out)?
            }
            BackupCommand::Import { file } => {
                commands::backup::restore_backup(&mut state, &file, &mut out)?
            }
        },
        Command::Settings(command) => match command {
            SettingsCommand::Show => commands::settings::show_settings(&state, &mut out)?,
            SettingsCommand::Set { key, value } => {
                commands::settings::set_setting(&mut state, &key, &value, &mut out)?
            }
        },
    }

    Ok(())
}
