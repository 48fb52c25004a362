//! Quiz session state machine.
//!
//! ```text
//! idle -> question -> correct | incorrect -> question (next item) | finished
//! ```
//!
//! Any active phase can return to `idle` through [`QuizEngine::stop`], which
//! discards the session. Calls made in the wrong phase are ignored and never
//! touch history or statistics.

use crate::history::{HistoryStore, REVIEW_WINDOW};
use crate::matching::{grade_sentence, grade_word, hint_prefix, MatchResult};
use crate::types::{ItemId, QueueOrder, QuizMode, Sentence, StudySet, Word};
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// Outbound port for spoken feedback. Implementations must not block and
/// must not fail observably; the engine ignores what happens to the text.
pub trait Speaker {
    fn speak(&mut self, text: &str);
}

/// Speaker that says nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpeaker;

impl Speaker for NoopSpeaker {
    fn speak(&mut self, _text: &str) {}
}

impl<S: Speaker + ?Sized> Speaker for Box<S> {
    fn speak(&mut self, text: &str) {
        (**self).speak(text)
    }
}

/// One entry in a quiz queue.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizItem {
    Word(Word),
    Sentence(Sentence),
}

impl QuizItem {
    pub fn id(&self) -> &ItemId {
        match self {
            Self::Word(word) => &word.id,
            Self::Sentence(sentence) => &sentence.id,
        }
    }

    pub fn grade(&self, input: &str) -> MatchResult {
        match self {
            Self::Word(word) => grade_word(input, word),
            Self::Sentence(sentence) => grade_sentence(input, sentence),
        }
    }

    /// Text handed to the speaker after grading.
    pub fn spoken_form(&self) -> String {
        match self {
            Self::Word(word) => word.simplified.clone(),
            Self::Sentence(sentence) => sentence.filled(),
        }
    }

    fn hint_target(&self) -> &str {
        match self {
            Self::Word(word) => &word.pinyin_plain,
            Self::Sentence(sentence) => sentence
                .answer_pinyin_plain()
                .unwrap_or(&sentence.answer),
        }
    }
}

/// Where the engine is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Question,
    Correct,
    Incorrect,
    Finished,
}

/// Running statistics for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStats {
    pub total_answered: u32,
    pub correct_count: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub started_at: DateTime<Utc>,
}

impl SessionStats {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            total_answered: 0,
            correct_count: 0,
            current_streak: 0,
            best_streak: 0,
            started_at: now,
        }
    }

    fn count_correct(&mut self) {
        self.correct_count += 1;
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);
    }

    /// Rounded percentage of correct answers, 0 before the first answer.
    pub fn accuracy(&self) -> u32 {
        if self.total_answered == 0 {
            return 0;
        }
        (self.correct_count as f64 * 100.0 / self.total_answered as f64).round() as u32
    }
}

/// Overall verdict shown when a session finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Excellent,
    WellDone,
    AlmostThere,
    NeedsReview,
}

impl Verdict {
    pub fn from_accuracy(accuracy: u32) -> Self {
        if accuracy >= 90 {
            Self::Excellent
        } else if accuracy >= 70 {
            Self::WellDone
        } else if accuracy >= 50 {
            Self::AlmostThere
        } else {
            Self::NeedsReview
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::WellDone => "Well done!",
            Self::AlmostThere => "Almost there, keep going!",
            Self::NeedsReview => "Time for some review.",
        }
    }
}

/// Final figures for a finished session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub accuracy: u32,
    pub correct: u32,
    pub total: u32,
    pub best_streak: u32,
    pub elapsed: Duration,
    pub verdict: Verdict,
}

impl SessionSummary {
    /// Elapsed time as `m:ss`.
    pub fn elapsed_display(&self) -> String {
        let seconds = self.elapsed.num_seconds().max(0);
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }
}

#[derive(Debug, Clone)]
struct QuizSession {
    items: Vec<QuizItem>,
    current_index: usize,
    stats: SessionStats,
    last_answer: Option<String>,
    hint_len: usize,
    label: String,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    fn current(&self) -> &QuizItem {
        &self.items[self.current_index]
    }
}

/// Build the item queue for a session.
///
/// Review mode keeps only words with a recent failure, weakest first, and
/// ignores `order`. Other modes list words before sentences and shuffle the
/// whole queue when `order` is random.
pub fn build_queue<R: Rng + ?Sized>(
    set: &StudySet,
    mode: QuizMode,
    order: QueueOrder,
    history: &HistoryStore,
    rng: &mut R,
) -> Vec<QuizItem> {
    let words = || set.words.iter().cloned().map(QuizItem::Word);
    let sentences = || set.sentences.iter().cloned().map(QuizItem::Sentence);

    let mut items: Vec<QuizItem> = match mode {
        QuizMode::Word => words().collect(),
        QuizMode::Sentence => sentences().collect(),
        QuizMode::Both => words().chain(sentences()).collect(),
        QuizMode::Review => {
            let mut weak: Vec<&Word> = set
                .words
                .iter()
                .filter(|word| history.needs_review(&word.id, REVIEW_WINDOW))
                .collect();
            weak.sort_by_key(|word| history.review_rank(&word.id, REVIEW_WINDOW));
            return weak.into_iter().cloned().map(QuizItem::Word).collect();
        }
    };

    if order == QueueOrder::Random {
        items.shuffle(rng);
    }
    items
}

/// Human-readable session title, e.g. `HSK 1 (words sequential)`.
pub fn session_label(set_name: &str, mode: QuizMode, order: QueueOrder) -> String {
    let sequential = if order == QueueOrder::Sequential {
        " sequential"
    } else {
        ""
    };
    match mode {
        QuizMode::Review => format!("{set_name} (review)"),
        QuizMode::Sentence => format!("{set_name} (sentences{sequential})"),
        QuizMode::Both => format!("{set_name} (all{sequential})"),
        QuizMode::Word => format!("{set_name} (words{sequential})"),
    }
}

/// Drives quiz sessions and reports outcomes to history and the speaker.
pub struct QuizEngine<S: Speaker = NoopSpeaker> {
    speaker: S,
    audio_enabled: bool,
    phase: Phase,
    session: Option<QuizSession>,
}

impl Default for QuizEngine<NoopSpeaker> {
    fn default() -> Self {
        Self::new(NoopSpeaker, false)
    }
}

impl<S: Speaker> QuizEngine<S> {
    pub fn new(speaker: S, audio_enabled: bool) -> Self {
        Self {
            speaker,
            audio_enabled,
            phase: Phase::Idle,
            session: None,
        }
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Start a session on `set`. Returns false, staying put, when the queue
    /// would be empty.
    pub fn start(
        &mut self,
        set: &StudySet,
        mode: QuizMode,
        order: QueueOrder,
        history: &HistoryStore,
    ) -> bool {
        self.start_with_rng(set, mode, order, history, &mut rand::rng())
    }

    pub fn start_with_rng<R: Rng + ?Sized>(
        &mut self,
        set: &StudySet,
        mode: QuizMode,
        order: QueueOrder,
        history: &HistoryStore,
        rng: &mut R,
    ) -> bool {
        let items = build_queue(set, mode, order, history, rng);
        if items.is_empty() {
            tracing::debug!(set = %set.id, mode = mode.as_str(), "empty quiz queue");
            return false;
        }

        tracing::debug!(
            set = %set.id,
            mode = mode.as_str(),
            order = order.as_str(),
            items = items.len(),
            "quiz started"
        );
        self.session = Some(QuizSession {
            items,
            current_index: 0,
            stats: SessionStats::new(Utc::now()),
            last_answer: None,
            hint_len: 0,
            label: session_label(&set.name, mode, order),
            finished_at: None,
        });
        self.phase = Phase::Question;
        true
    }

    /// Grade `input` against the current item.
    ///
    /// Word outcomes are appended to `history`; sentence outcomes are not.
    pub fn submit_answer(&mut self, input: &str, history: &mut HistoryStore) -> Option<MatchResult> {
        if self.phase != Phase::Question {
            return None;
        }
        let session = self.session.as_mut()?;
        let item = &session.items[session.current_index];
        let result = item.grade(input);

        if let QuizItem::Word(word) = item {
            history.record(&word.id, result.is_correct);
        }

        let stats = &mut session.stats;
        stats.total_answered += 1;
        if result.is_correct {
            stats.count_correct();
        } else {
            stats.current_streak = 0;
        }

        session.last_answer = Some(result.typed.clone());
        if self.audio_enabled {
            self.speaker.speak(&item.spoken_form());
        }
        self.phase = if result.is_correct {
            Phase::Correct
        } else {
            Phase::Incorrect
        };
        Some(result)
    }

    /// Give up on the current item; counts as a wrong answer.
    pub fn skip(&mut self, history: &mut HistoryStore) -> Option<MatchResult> {
        self.submit_answer("", history)
    }

    /// Accept the last wrong answer after all.
    ///
    /// Flips the word's latest history outcome if it is a failure and counts
    /// the answer as correct. `total_answered` is unchanged.
    pub fn override_to_correct(&mut self, history: &mut HistoryStore) -> bool {
        if self.phase != Phase::Incorrect {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if let QuizItem::Word(word) = session.current() {
            history.override_last(&word.id);
        }
        session.stats.count_correct();
        self.phase = Phase::Correct;
        true
    }

    /// Move past a graded item, to the next question or to `finished`.
    pub fn advance(&mut self) -> bool {
        if !matches!(self.phase, Phase::Correct | Phase::Incorrect) {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.current_index + 1 >= session.items.len() {
            session.finished_at = Some(Utc::now());
            self.phase = Phase::Finished;
        } else {
            session.current_index += 1;
            session.last_answer = None;
            session.hint_len = 0;
            self.phase = Phase::Question;
        }
        true
    }

    /// Run the same queue again from the top with fresh statistics.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::Finished {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.current_index = 0;
        session.stats = SessionStats::new(Utc::now());
        session.last_answer = None;
        session.hint_len = 0;
        session.finished_at = None;
        self.phase = Phase::Question;
        true
    }

    /// Abandon the session. History already written is kept.
    pub fn stop(&mut self) {
        self.session = None;
        self.phase = Phase::Idle;
    }

    /// Reveal one more leading character of the expected answer.
    pub fn hint(&mut self) -> Option<String> {
        if self.phase != Phase::Question {
            return None;
        }
        let session = self.session.as_mut()?;
        let target = session.items[session.current_index].hint_target();
        let len = target.chars().count();
        if len == 0 {
            return None;
        }
        session.hint_len = (session.hint_len + 1).min(len);
        Some(hint_prefix(target, session.hint_len))
    }

    /// The item being asked or just graded.
    pub fn current(&self) -> Option<&QuizItem> {
        match self.phase {
            Phase::Question | Phase::Correct | Phase::Incorrect => {
                self.session.as_ref().map(QuizSession::current)
            }
            Phase::Idle | Phase::Finished => None,
        }
    }

    /// Zero-based index of the current item and the queue length.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.session
            .as_ref()
            .map(|session| (session.current_index, session.items.len()))
    }

    pub fn items(&self) -> &[QuizItem] {
        self.session
            .as_ref()
            .map(|session| session.items.as_slice())
            .unwrap_or_default()
    }

    pub fn stats(&self) -> Option<&SessionStats> {
        self.session.as_ref().map(|session| &session.stats)
    }

    pub fn last_answer(&self) -> Option<&str> {
        self.session.as_ref()?.last_answer.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.label.as_str())
    }

    /// Figures for the finished session.
    pub fn summary(&self) -> Option<SessionSummary> {
        if self.phase != Phase::Finished {
            return None;
        }
        let session = self.session.as_ref()?;
        let stats = &session.stats;
        let finished_at = session.finished_at.unwrap_or_else(Utc::now);
        let accuracy = stats.accuracy();
        Some(SessionSummary {
            accuracy,
            correct: stats.correct_count,
            total: stats.total_answered,
            best_streak: stats.best_streak,
            elapsed: finished_at - stats.started_at,
            verdict: Verdict::from_accuracy(accuracy),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[derive(Default)]
    struct RecordingSpeaker {
        spoken: Vec<String>,
    }

    impl Speaker for RecordingSpeaker {
        fn speak(&mut self, text: &str) {
            self.spoken.push(text.to_string());
        }
    }

    fn sample_set() -> StudySet {
        StudySet::new(
            "HSK 1",
            vec![
                Word::new("妳好", "你好", "nǐ hǎo", "hello"),
                Word::new("謝謝", "谢谢", "xiè xie", "thanks"),
                Word::new("", "好", "hǎo", "good"),
            ],
            vec![
                Sentence::new("I want to go", "我___去", "", "要", "", "yào"),
                Sentence::new("Say it again", "再___一遍", "", "说", "說", "shuō"),
            ],
        )
    }

    fn silent() -> QuizEngine {
        QuizEngine::default()
    }

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn start(engine: &mut QuizEngine<impl Speaker>, set: &StudySet, mode: QuizMode) -> bool {
        engine.start_with_rng(set, mode, QueueOrder::Sequential, &HistoryStore::new(), &mut seeded())
    }

    #[test]
    fn both_mode_sequential_keeps_words_then_sentences() {
        let set = sample_set();
        let queue = build_queue(&set, QuizMode::Both, QueueOrder::Sequential, &HistoryStore::new(), &mut seeded());
        let ids: Vec<&ItemId> = queue.iter().map(QuizItem::id).collect();
        let expected: Vec<&ItemId> = set
            .words
            .iter()
            .map(|w| &w.id)
            .chain(set.sentences.iter().map(|s| &s.id))
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn random_order_is_a_permutation() {
        let set = sample_set();
        let queue = build_queue(&set, QuizMode::Both, QueueOrder::Random, &HistoryStore::new(), &mut seeded());
        assert_eq!(queue.len(), 5);
        let got: HashSet<&ItemId> = queue.iter().map(QuizItem::id).collect();
        let expected: HashSet<&ItemId> = set
            .words
            .iter()
            .map(|w| &w.id)
            .chain(set.sentences.iter().map(|s| &s.id))
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn single_kind_modes() {
        let set = sample_set();
        let history = HistoryStore::new();
        let words = build_queue(&set, QuizMode::Word, QueueOrder::Random, &history, &mut seeded());
        assert_eq!(words.len(), 3);
        assert!(words.iter().all(|item| matches!(item, QuizItem::Word(_))));
        let sentences = build_queue(&set, QuizMode::Sentence, QueueOrder::Random, &history, &mut seeded());
        assert_eq!(sentences.len(), 2);
        assert!(sentences.iter().all(|item| matches!(item, QuizItem::Sentence(_))));
    }

    #[test]
    fn review_mode_filters_and_ranks_ignoring_order() {
        let set = sample_set();
        let (hello, thanks, good) = (&set.words[0].id, &set.words[1].id, &set.words[2].id);
        let mut history = HistoryStore::new();
        for ok in [true, false] {
            history.record(hello, ok);
        }
        for ok in [false, false] {
            history.record(thanks, ok);
        }
        for _ in 0..5 {
            history.record(good, true);
        }

        for _ in 0..5 {
            let queue = build_queue(&set, QuizMode::Review, QueueOrder::Random, &history, &mut rand::rng());
            let ids: Vec<&ItemId> = queue.iter().map(QuizItem::id).collect();
            assert_eq!(ids, vec![thanks, hello]);
        }
    }

    #[test]
    fn empty_queue_does_not_start() {
        let set = sample_set();
        let mut engine = silent();
        assert!(!start(&mut engine, &set, QuizMode::Review));
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.current().is_none());
    }

    #[test]
    fn full_session_walkthrough() {
        let set = sample_set();
        let mut history = HistoryStore::new();
        let mut engine = QuizEngine::new(RecordingSpeaker::default(), true);
        assert!(start(&mut engine, &set, QuizMode::Both));
        assert_eq!(engine.phase(), Phase::Question);
        assert_eq!(engine.label(), Some("HSK 1 (all sequential)"));

        let result = engine.submit_answer("ni hao ", &mut history).unwrap();
        assert!(result.is_correct);
        assert_eq!(engine.phase(), Phase::Correct);
        assert_eq!(engine.last_answer(), Some("ni hao"));
        assert!(engine.advance());

        assert!(!engine.submit_answer("wrong", &mut history).unwrap().is_correct);
        assert!(engine.advance());
        assert!(engine.submit_answer("好", &mut history).unwrap().is_correct);
        assert!(engine.advance());
        assert!(engine.submit_answer("yao", &mut history).unwrap().is_correct);
        assert!(engine.advance());
        assert!(engine.submit_answer("說", &mut history).unwrap().is_correct);
        assert!(engine.advance());
        assert_eq!(engine.phase(), Phase::Finished);

        let stats = engine.stats().unwrap();
        assert_eq!(stats.total_answered, 5);
        assert_eq!(stats.correct_count, 4);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.best_streak, 3);

        let summary = engine.summary().unwrap();
        assert_eq!(summary.accuracy, 80);
        assert_eq!(summary.verdict, Verdict::WellDone);

        // Only the three words were logged.
        assert_eq!(history.len(), 3);
        assert_eq!(
            engine.speaker().spoken,
            vec!["你好", "谢谢", "好", "我要去", "再说一遍"]
        );
    }

    #[test]
    fn audio_disabled_stays_silent() {
        let set = sample_set();
        let mut history = HistoryStore::new();
        let mut engine = QuizEngine::new(RecordingSpeaker::default(), false);
        start(&mut engine, &set, QuizMode::Word);
        engine.submit_answer("nihao", &mut history);
        assert!(engine.speaker().spoken.is_empty());
    }

    #[test]
    fn skip_records_a_failure() {
        let set = sample_set();
        let mut history = HistoryStore::new();
        let mut engine = silent();
        start(&mut engine, &set, QuizMode::Word);
        let result = engine.skip(&mut history).unwrap();
        assert!(!result.is_correct);
        assert_eq!(engine.phase(), Phase::Incorrect);
        assert_eq!(history.get(&set.words[0].id).unwrap().history, vec![false]);
    }

    #[test]
    fn override_flips_only_the_latest_outcome() {
        let set = sample_set();
        let id = &set.words[0].id;
        let mut history = HistoryStore::new();
        history.record(id, false);
        history.record(id, true);

        let mut engine = silent();
        start(&mut engine, &set, QuizMode::Word);
        engine.submit_answer("nope", &mut history);
        let before = engine.stats().unwrap().clone();

        assert!(engine.override_to_correct(&mut history));
        let after = engine.stats().unwrap();
        assert_eq!(after.correct_count, before.correct_count + 1);
        assert_eq!(after.current_streak, before.current_streak + 1);
        assert_eq!(after.total_answered, before.total_answered);
        assert_eq!(engine.phase(), Phase::Correct);
        assert_eq!(history.get(id).unwrap().history, vec![false, true, true]);

        // Only valid from the incorrect phase.
        assert!(!engine.override_to_correct(&mut history));
    }

    #[test]
    fn override_on_sentence_touches_no_history() {
        let set = sample_set();
        let mut history = HistoryStore::new();
        let mut engine = silent();
        start(&mut engine, &set, QuizMode::Sentence);
        engine.submit_answer("不", &mut history);
        assert!(engine.override_to_correct(&mut history));
        assert!(history.is_empty());
        assert_eq!(engine.stats().unwrap().correct_count, 1);
    }

    #[test]
    fn misuse_is_ignored() {
        let set = sample_set();
        let mut history = HistoryStore::new();
        let mut engine = silent();

        assert!(engine.submit_answer("nihao", &mut history).is_none());
        assert!(!engine.advance());
        assert!(engine.hint().is_none());

        start(&mut engine, &set, QuizMode::Word);
        assert!(!engine.advance());
        assert!(!engine.override_to_correct(&mut history));
        engine.submit_answer("nihao", &mut history);
        assert!(engine.submit_answer("nihao", &mut history).is_none());
        assert_eq!(engine.stats().unwrap().total_answered, 1);
        assert_eq!(history.get(&set.words[0].id).unwrap().history.len(), 1);
    }

    #[test]
    fn stop_discards_session_but_keeps_history() {
        let set = sample_set();
        let mut history = HistoryStore::new();
        let mut engine = silent();
        start(&mut engine, &set, QuizMode::Word);
        engine.submit_answer("nihao", &mut history);
        engine.stop();
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.stats().is_none());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn hints_grow_and_reset_on_advance() {
        let set = sample_set();
        let mut history = HistoryStore::new();
        let mut engine = silent();
        start(&mut engine, &set, QuizMode::Word);
        assert_eq!(engine.hint().as_deref(), Some("n"));
        assert_eq!(engine.hint().as_deref(), Some("ni"));
        for _ in 0..10 {
            engine.hint();
        }
        assert_eq!(engine.hint().as_deref(), Some("nihao"));

        engine.submit_answer("nihao", &mut history);
        engine.advance();
        assert_eq!(engine.hint().as_deref(), Some("x"));
    }

    #[test]
    fn sentence_hint_falls_back_to_answer() {
        let set = StudySet::new("s", vec![], vec![Sentence::new("go", "我___去", "", "要", "", "")]);
        let mut engine = silent();
        start(&mut engine, &set, QuizMode::Sentence);
        assert_eq!(engine.hint().as_deref(), Some("要"));
    }

    #[test]
    fn restart_replays_same_queue() {
        let set = sample_set();
        let mut history = HistoryStore::new();
        let mut engine = silent();
        engine.start_with_rng(&set, QuizMode::Both, QueueOrder::Random, &history, &mut seeded());
        let order: Vec<ItemId> = engine.items().iter().map(|i| i.id().clone()).collect();
        while engine.phase() != Phase::Finished {
            engine.skip(&mut history);
            engine.advance();
        }
        assert!(engine.restart());
        assert_eq!(engine.phase(), Phase::Question);
        assert_eq!(engine.position(), Some((0, 5)));
        assert_eq!(engine.stats().unwrap().total_answered, 0);
        let replay: Vec<ItemId> = engine.items().iter().map(|i| i.id().clone()).collect();
        assert_eq!(order, replay);
    }

    #[test]
    fn labels_and_verdicts() {
        assert_eq!(session_label("A", QuizMode::Review, QueueOrder::Sequential), "A (review)");
        assert_eq!(session_label("A", QuizMode::Word, QueueOrder::Random), "A (words)");
        assert_eq!(session_label("A", QuizMode::Sentence, QueueOrder::Sequential), "A (sentences sequential)");
        assert_eq!(Verdict::from_accuracy(90), Verdict::Excellent);
        assert_eq!(Verdict::from_accuracy(69), Verdict::AlmostThere);
        assert_eq!(Verdict::from_accuracy(0), Verdict::NeedsReview);
    }

    #[test]
    fn elapsed_display_pads_seconds() {
        let summary = SessionSummary {
            accuracy: 0,
            correct: 0,
            total: 0,
            best_streak: 0,
            elapsed: Duration::seconds(125),
            verdict: Verdict::NeedsReview,
        };
        assert_eq!(summary.elapsed_display(), "2:05");
    }
}
