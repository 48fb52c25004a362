//! Spoken feedback through an external text-to-speech program.

use drill_core::types::Settings;
use drill_core::{NoopSpeaker, Speaker};
use std::process::{Child, Command, ExitStatus, Stdio};

/// Runs `program args... <text>` in the background for each utterance.
/// A new utterance cuts off the one still playing.
#[derive(Debug)]
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
    current: Option<Child>,
}

impl CommandSpeaker {
    /// Split a command line such as `say -v Ting-Ting` on whitespace.
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
            current: None,
        })
    }

    /// Stop the utterance in progress, if any, and reap it.
    fn silence(&mut self) -> Option<ExitStatus> {
        let mut child = self.current.take()?;
        if let Err(e) = child.kill() {
            tracing::debug!(error = %e, "speech process already exited");
        }
        child.wait().ok()
    }

    fn command(&self, text: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str) {
        self.silence();
        match self.command(text).spawn() {
            Ok(child) => self.current = Some(child),
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "speech command failed");
            }
        }
    }
}

/// The speaker configured in `settings`, or a silent one.
pub fn speaker_for(settings: &Settings) -> Box<dyn Speaker> {
    match settings.speech_command.as_deref().and_then(CommandSpeaker::parse) {
        Some(speaker) => Box::new(speaker),
        None => Box::new(NoopSpeaker),
    }
}
