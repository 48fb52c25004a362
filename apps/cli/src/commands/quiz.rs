//! Interactive quiz loop.
//!
//! While a question is open, type an answer or one of `:hint`, `:skip`,
//! `:quit`. After grading, press Enter to continue or `:ok` to accept a
//! wrong answer.

use super::{resolve_set, Result};
use crate::state::AppState;
use drill_core::matching::MatchChannel;
use drill_core::types::{QueueOrder, QuizMode};
use drill_core::{MatchResult, Phase, QuizEngine, QuizItem, SessionSummary, Speaker};
use std::io::{BufRead, Write};

/// How a quiz run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Nothing to ask in the requested mode.
    Empty,
    Finished,
    Quit,
}

enum Command<'a> {
    Answer(&'a str),
    Hint,
    Skip,
    Accept,
    Quit,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":h" | ":hint" => Self::Hint,
            ":s" | ":skip" => Self::Skip,
            ":ok" => Self::Accept,
            ":q" | ":quit" => Self::Quit,
            answer => Self::Answer(answer),
        }
    }
}

/// Run a quiz over the set matching `set_key`, reading answers from `input`.
///
/// History is saved after every graded answer, so quitting midway keeps
/// what was already answered.
pub fn run_quiz<S: Speaker>(
    state: &mut AppState,
    engine: &mut QuizEngine<S>,
    set_key: &str,
    mode: Option<QuizMode>,
    order: Option<QueueOrder>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<QuizOutcome> {
    let set = resolve_set(&state.sets, set_key)?;
    let Some(mode) = mode.or_else(|| set.available_modes().first().copied()) else {
        writeln!(out, "\"{}\" has nothing to quiz.", set.name)?;
        return Ok(QuizOutcome::Empty);
    };
    let order = order.unwrap_or(state.settings.default_order);

    if !engine.start(set, mode, order, &state.history) {
        let reason = match mode {
            QuizMode::Review => "no words need review",
            QuizMode::Sentence => "it has no sentences",
            QuizMode::Word | QuizMode::Both => "it has no words",
        };
        writeln!(out, "Nothing to quiz in \"{}\": {reason}.", set.name)?;
        return Ok(QuizOutcome::Empty);
    }

    if let Some(label) = engine.label() {
        writeln!(out, "{label}: {} items", engine.items().len())?;
    }

    let mut line = String::new();
    loop {
        match engine.phase() {
            Phase::Question => {
                ask(engine, out)?;
                let Some(command) = read_command(input, &mut line)? else {
                    engine.stop();
                    return Ok(QuizOutcome::Quit);
                };
                let result = match command {
                    Command::Hint => {
                        match engine.hint() {
                            Some(hint) => writeln!(out, "hint: {hint}")?,
                            None => writeln!(out, "no hint available")?,
                        }
                        continue;
                    }
                    Command::Quit => {
                        engine.stop();
                        return Ok(QuizOutcome::Quit);
                    }
                    Command::Accept => {
                        writeln!(out, ":ok only applies after a wrong answer")?;
                        continue;
                    }
                    Command::Skip => engine.skip(&mut state.history),
                    Command::Answer(answer) => engine.submit_answer(answer, &mut state.history),
                };
                state.save()?;
                if let Some(result) = result {
                    report(state, engine, &result, out)?;
                }
            }
            Phase::Correct | Phase::Incorrect => {
                let Some(command) = read_command(input, &mut line)? else {
                    engine.stop();
                    return Ok(QuizOutcome::Quit);
                };
                match command {
                    Command::Accept if engine.phase() == Phase::Incorrect => {
                        engine.override_to_correct(&mut state.history);
                        state.save()?;
                        writeln!(out, "Counted as correct.")?;
                    }
                    Command::Quit => {
                        engine.stop();
                        return Ok(QuizOutcome::Quit);
                    }
                    _ => {
                        engine.advance();
                    }
                }
            }
            Phase::Finished => {
                if let Some(summary) = engine.summary() {
                    print_summary(&summary, out)?;
                }
                write!(out, "Go again? [y/N] ")?;
                out.flush()?;
                line.clear();
                input.read_line(&mut line)?;
                if line.trim().eq_ignore_ascii_case("y") {
                    engine.restart();
                } else {
                    engine.stop();
                    return Ok(QuizOutcome::Finished);
                }
            }
            Phase::Idle => return Ok(QuizOutcome::Quit),
        }
    }
}

/// Read one line; `None` at end of input.
fn read_command<'a>(input: &mut impl BufRead, line: &'a mut String) -> Result<Option<Command<'a>>> {
    line.clear();
    if input.read_line(line)? == 0 {
        return Ok(None);
    }
    Ok(Some(Command::parse(line)))
}

fn ask<S: Speaker>(engine: &QuizEngine<S>, out: &mut impl Write) -> Result<()> {
    let (Some(item), Some((index, total))) = (engine.current(), engine.position()) else {
        return Ok(());
    };
    writeln!(out)?;
    match item {
        QuizItem::Word(word) => writeln!(out, "[{}/{}] {}", index + 1, total, word.english)?,
        QuizItem::Sentence(sentence) => {
            writeln!(out, "[{}/{}] {}", index + 1, total, sentence.english)?;
            writeln!(out, "  {}", sentence.chinese_with_blank)?;
            if let Some(traditional) = sentence.traditional_sentence() {
                writeln!(out, "  {traditional}")?;
            }
        }
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

fn report<S: Speaker>(
    state: &AppState,
    engine: &QuizEngine<S>,
    result: &MatchResult,
    out: &mut impl Write,
) -> Result<()> {
    let Some(item) = engine.current() else {
        return Ok(());
    };
    if result.is_correct {
        let via = match result.channel {
            Some(MatchChannel::Pinyin) => "pinyin",
            Some(MatchChannel::Simplified) => "simplified",
            Some(MatchChannel::Traditional) => "traditional",
            None => "",
        };
        writeln!(out, "Correct ({via})")?;
    } else if result.typed.is_empty() {
        writeln!(out, "Skipped")?;
    } else {
        writeln!(out, "Not quite, you typed: {}", result.typed)?;
    }

    match item {
        QuizItem::Word(word) => {
            if word.traditional != word.simplified {
                writeln!(out, "  {} ({})  {}", word.simplified, word.traditional, word.pinyin)?;
            } else {
                writeln!(out, "  {}  {}", word.simplified, word.pinyin)?;
            }
            if let Some(example) = state.sets.example_sentence(word) {
                writeln!(out, "  e.g. {}", example.simplified)?;
                if let Some(traditional) = example.traditional.filter(|t| *t != example.simplified) {
                    writeln!(out, "       {traditional}")?;
                }
            }
        }
        QuizItem::Sentence(sentence) => {
            writeln!(out, "  {}", sentence.filled())?;
            if !sentence.answer_pinyin.is_empty() {
                writeln!(out, "  {}", sentence.answer_pinyin)?;
            }
        }
    }

    if result.is_correct {
        writeln!(out, "(Enter to continue)")?;
    } else {
        writeln!(out, "(Enter to continue, :ok to count it as correct)")?;
    }
    Ok(())
}

fn print_summary(summary: &SessionSummary, out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", summary.verdict.message())?;
    writeln!(
        out,
        "{}% correct ({}/{}), best streak {}, time {}",
        summary.accuracy,
        summary.correct,
        summary.total,
        summary.best_streak,
        summary.elapsed_display()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use drill_core::NoopSpeaker;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[derive(Default)]
    struct RecordingSpeaker {
        spoken: Vec<String>,
    }

    impl Speaker for RecordingSpeaker {
        fn speak(&mut self, text: &str) {
            self.spoken.push(text.to_string());
        }
    }

    fn silent() -> QuizEngine {
        QuizEngine::new(NoopSpeaker, false)
    }

    fn drive<S: Speaker>(
        state: &mut AppState,
        engine: &mut QuizEngine<S>,
        mode: QuizMode,
        script: &str,
    ) -> (QuizOutcome, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let outcome = run_quiz(
            state,
            engine,
            "HSK 1",
            Some(mode),
            Some(QueueOrder::Sequential),
            &mut input,
            &mut out,
        )
        .unwrap();
        (outcome, output(out))
    }

    #[test]
    fn full_word_round_records_history_and_speaks() {
        let (mut state, id) = state_with_sample();
        let mut engine = QuizEngine::new(RecordingSpeaker::default(), true);
        let script = "ni hao\n\n谢\n:ok\n\n:skip\n\nn\n";
        let (outcome, out) = drive(&mut state, &mut engine, QuizMode::Word, script);

        assert_eq!(outcome, QuizOutcome::Finished);
        assert!(out.contains("HSK 1 (words sequential): 3 items"));
        assert!(out.contains("Correct (pinyin)"));
        assert!(out.contains("Not quite, you typed: 谢"));
        assert!(out.contains("Counted as correct."));
        assert!(out.contains("Skipped"));
        assert!(out.contains("67% correct (2/3), best streak 1"));

        let words = &state.sets.get(&id).unwrap().words;
        assert_eq!(state.history.get(&words[0].id).unwrap().history, vec![true]);
        assert_eq!(state.history.get(&words[1].id).unwrap().history, vec![true]);
        assert_eq!(state.history.get(&words[2].id).unwrap().history, vec![false]);
        assert_eq!(engine.speaker().spoken, vec!["你好", "谢谢", "好"]);
    }

    #[test]
    fn quitting_midway_keeps_answers() {
        let (mut state, id) = state_with_sample();
        let mut engine = silent();
        let (outcome, _) = drive(&mut state, &mut engine, QuizMode::Word, "nope\n:quit\n");

        assert_eq!(outcome, QuizOutcome::Quit);
        assert_eq!(engine.phase(), Phase::Idle);
        let first = &state.sets.get(&id).unwrap().words[0].id;
        assert_eq!(state.history.accuracy(first), Some(0));
    }

    #[test]
    fn end_of_input_quits() {
        let (mut state, _) = state_with_sample();
        let mut engine = silent();
        let (outcome, _) = drive(&mut state, &mut engine, QuizMode::Word, "");
        assert_eq!(outcome, QuizOutcome::Quit);
        assert!(state.history.is_empty());
    }

    #[test]
    fn hints_and_sentence_feedback() {
        let (mut state, _) = state_with_sample();
        let mut engine = silent();
        let (outcome, out) = drive(&mut state, &mut engine, QuizMode::Sentence, ":hint\nyao\n\nn\n");

        assert_eq!(outcome, QuizOutcome::Finished);
        assert!(out.contains("  我___去"));
        assert!(out.contains("hint: y"));
        assert!(out.contains("  我要去"));
        assert!(out.contains("Excellent!"));
        assert!(state.history.is_empty());
    }

    #[test]
    fn wrong_word_shows_example_sentence() {
        let (mut state, _) = state_with_sample();
        state.sets.create_set(
            "Extra",
            vec![],
            vec![drill_core::Sentence::new("I'm fine", "我很___", "", "好", "", "hǎo")],
        );
        let mut engine = silent();
        let (_, out) = drive(&mut state, &mut engine, QuizMode::Word, "a\n\nb\n\nc\n:quit\n");
        assert!(out.contains("e.g. 我很好"));
    }

    #[test]
    fn review_with_nothing_weak_is_empty() {
        let (mut state, _) = state_with_sample();
        let mut engine = silent();
        let (outcome, out) = drive(&mut state, &mut engine, QuizMode::Review, "");
        assert_eq!(outcome, QuizOutcome::Empty);
        assert!(out.contains("no words need review"));
    }

    #[test]
    fn restart_runs_the_queue_again() {
        let (mut state, id) = state_with_sample();
        let mut engine = silent();
        let (outcome, out) = drive(&mut state, &mut engine, QuizMode::Sentence, "yao\n\ny\nyao\n\nn\n");
        assert_eq!(outcome, QuizOutcome::Finished);
        assert_eq!(out.matches("[1/1]").count(), 2);
        assert!(state.sets.get(&id).is_some());
    }
}
