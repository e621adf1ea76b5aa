//! Application context tying the store, sessions, scoring and stats together.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, VocabError};
use crate::feedback::{FeedbackCue, SpeechRequest};
use crate::matching::{evaluate_with, MatchOptions};
use crate::session::{CardView, Progress, Session, SessionStatus, SessionSummary, Verdict};
use crate::shuffle::shuffle_by_difficulty;
use crate::stats::{snapshot, StatsSnapshot};
use crate::types::{AggregateStats, Difficulty, Direction, LoadReport, Side, StudyMode, WordEntry};
use crate::vocabulary::Vocabulary;

/// Everything one learner's run needs. Created once, lives for the process.
#[derive(Debug)]
pub struct Trainer {
    vocabulary: Vocabulary,
    aggregate: AggregateStats,
    direction: Direction,
    match_options: MatchOptions,
    session: Option<Session>,
    /// Words missed in the most recent test session, repeats included.
    mistakes: Vec<usize>,
    rng: StdRng,
}

impl Default for Trainer {
    fn default() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Trainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic trainer for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            vocabulary: Vocabulary::new(),
            aggregate: AggregateStats::default(),
            direction: Direction::default(),
            match_options: MatchOptions::default(),
            session: None,
            mistakes: Vec::new(),
            rng,
        }
    }

    pub fn with_match_options(mut self, options: MatchOptions) -> Self {
        self.match_options = options;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    // === Vocabulary ===

    /// Replace the vocabulary with a new word list. Ends any session.
    pub fn load(&mut self, content: &str) -> LoadReport {
        let report = self.vocabulary.load(content);
        self.session = None;
        self.mistakes.clear();
        report
    }

    pub fn words(&self) -> &[WordEntry] {
        self.vocabulary.words()
    }

    pub fn search(&self, query: &str) -> Vec<&WordEntry> {
        self.vocabulary.search(query)
    }

    // === Settings ===

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    // === Sessions ===

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.session
            .as_ref()
            .map_or(SessionStatus::Idle, Session::status)
    }

    pub fn aggregate(&self) -> AggregateStats {
        self.aggregate
    }

    /// Words missed in the most recent test session.
    pub fn mistakes(&self) -> Vec<&WordEntry> {
        self.mistakes
            .iter()
            .filter_map(|&i| self.vocabulary.get(i))
            .collect()
    }

    /// Shuffle the whole vocabulary and start a session over it.
    pub fn start_session(&mut self, mode: StudyMode) -> Result<&Session> {
        if self.vocabulary.is_empty() {
            return Err(VocabError::EmptyVocabulary);
        }

        let all = self.vocabulary.all_indices();
        let deck = shuffle_by_difficulty(self.vocabulary.words(), &all, &mut self.rng);
        self.vocabulary.set_order(deck.clone());

        match mode {
            StudyMode::Learn => self.aggregate.total_sessions += 1,
            StudyMode::Test => self.mistakes.clear(),
        }

        Ok(&*self.session.insert(Session::new(mode, deck)))
    }

    /// Start a learn session over the words missed in the last test.
    pub fn review_mistakes(&mut self) -> Result<&Session> {
        if self.mistakes.is_empty() {
            return Err(VocabError::NoMistakes);
        }

        let deck = shuffle_by_difficulty(self.vocabulary.words(), &self.mistakes, &mut self.rng);
        self.aggregate.total_sessions += 1;

        Ok(&*self.session.insert(Session::new(StudyMode::Learn, deck)))
    }

    /// Card under the cursor, or `None` when idle or completed.
    ///
    /// Under the random direction policy every call draws a new coin, so
    /// showing the same position twice may flip the prompt side. The side
    /// drawn last is the one a following answer is scored against.
    pub fn current_card(&mut self) -> Option<CardView> {
        let session = self.session.as_ref()?;
        let index = session.current_index()?;
        let side = prompt_side(session.mode(), self.direction, &mut self.rng);
        let session = self.session.as_mut()?;
        session.shown_side = Some(side);
        self.card_view(index, side)
    }

    /// Flip the current card so its answer is shown.
    pub fn reveal(&mut self) -> Result<CardView> {
        let index = self.active_index()?;
        let side = self.shown_or_draw_side()?;
        if let Some(session) = self.session.as_mut() {
            session.revealed = true;
        }
        self.card_view(index, side).ok_or(VocabError::NoActiveSession)
    }

    /// Assign a tier to the current learn card and move on.
    pub fn mark_difficulty(&mut self, difficulty: Difficulty) -> Result<Option<SessionSummary>> {
        self.require_mode(StudyMode::Learn)?;
        let index = self.active_index()?;
        self.vocabulary.set_difficulty(index, difficulty);
        self.advance()
    }

    /// Move to the next card. Returns the summary when the deck is exhausted.
    pub fn advance(&mut self) -> Result<Option<SessionSummary>> {
        self.active_index()?;
        let mistakes = self.mistakes.len();
        let session = self.session.as_mut().ok_or(VocabError::NoActiveSession)?;
        if session.advance() {
            return Ok(Some(session.summary(mistakes)));
        }
        Ok(None)
    }

    /// Score a typed answer for the current test card.
    pub fn submit_answer(&mut self, input: &str) -> Result<Verdict> {
        self.require_mode(StudyMode::Test)?;
        let index = self.active_index()?;
        let prompt = self.shown_or_draw_side()?;

        let word = self
            .vocabulary
            .get_mut(index)
            .ok_or(VocabError::NoActiveSession)?;
        let expected = word.text(prompt.opposite()).to_string();
        let result = evaluate_with(&expected, input, self.match_options);
        word.record_answer(result.is_correct);

        self.aggregate.record_answer(result.is_correct);
        if let Some(session) = self.session.as_mut() {
            session.record_answer(result.is_correct);
        }
        if !result.is_correct {
            self.mistakes.push(index);
        }

        Ok(Verdict {
            correct: result.is_correct,
            expected,
            typed_normalized: result.typed_normalized,
            cue: FeedbackCue::for_verdict(result.is_correct),
        })
    }

    pub fn progress(&self) -> Option<Progress> {
        self.session.as_ref().map(Session::progress)
    }

    pub fn summary(&self) -> Option<SessionSummary> {
        self.session
            .as_ref()
            .map(|s| s.summary(self.mistakes.len()))
    }

    /// Speech request for the current card's source text.
    pub fn speech(&self) -> Option<SpeechRequest> {
        let index = self.session.as_ref()?.current_index()?;
        SpeechRequest::for_word(self.vocabulary.get(index)?)
    }

    // === Stats ===

    pub fn stats(&self) -> StatsSnapshot {
        snapshot(&self.vocabulary, &self.aggregate)
    }

    // === Helpers ===

    fn active_index(&self) -> Result<usize> {
        self.session
            .as_ref()
            .and_then(Session::current_index)
            .ok_or(VocabError::NoActiveSession)
    }

    fn require_mode(&self, expected: StudyMode) -> Result<()> {
        let session = self.session.as_ref().ok_or(VocabError::NoActiveSession)?;
        if session.mode() != expected {
            return Err(VocabError::WrongMode { expected });
        }
        Ok(())
    }

    /// Side shown for the current card, drawn now if it was never displayed.
    fn shown_or_draw_side(&mut self) -> Result<Side> {
        let session = self.session.as_mut().ok_or(VocabError::NoActiveSession)?;
        if let Some(side) = session.shown_side {
            return Ok(side);
        }
        let side = prompt_side(session.mode(), self.direction, &mut self.rng);
        session.shown_side = Some(side);
        Ok(side)
    }

    fn card_view(&self, index: usize, side: Side) -> Option<CardView> {
        let session = self.session.as_ref()?;
        let word = self.vocabulary.get(index)?;
        Some(CardView {
            mode: session.mode(),
            prompt_side: side,
            prompt: word.text(side).to_string(),
            answer: session
                .revealed
                .then(|| word.text(side.opposite()).to_string()),
            difficulty: word.difficulty,
            revealed: session.revealed,
            progress: session.progress(),
        })
    }
}

fn prompt_side<R: Rng + ?Sized>(mode: StudyMode, direction: Direction, rng: &mut R) -> Side {
    if mode == StudyMode::Learn {
        return Side::Source;
    }
    match direction {
        Direction::SourceToTarget => Side::Source,
        Direction::TargetToSource => Side::Target,
        Direction::Random => {
            if rng.random_bool(0.5) {
                Side::Source
            } else {
                Side::Target
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LIST: &str = "dog    con chó\ncat    con mèo\nhello    xin chào; chào\nbird    con chim";

    fn loaded() -> Trainer {
        let mut trainer = Trainer::with_seed(11).with_direction(Direction::SourceToTarget);
        trainer.load(LIST);
        trainer
    }

    fn answer_current(trainer: &mut Trainer, correct: bool) -> Verdict {
        let card = trainer.current_card().unwrap();
        let answer = if correct { card.prompt.clone() } else { "zzz".to_string() };
        // Source-to-target: the expected answer is the target text.
        let word = trainer
            .words()
            .iter()
            .find(|w| w.source_text == answer)
            .map(|w| w.target_text.clone())
            .unwrap_or(answer);
        trainer.submit_answer(&word).unwrap()
    }

    #[test]
    fn start_on_empty_store_changes_nothing() {
        let mut trainer = Trainer::with_seed(1);
        let err = trainer.start_session(StudyMode::Learn).unwrap_err();
        assert_eq!(err, VocabError::EmptyVocabulary);
        assert_eq!(trainer.status(), SessionStatus::Idle);
        assert_eq!(trainer.aggregate(), AggregateStats::default());
        assert!(trainer.session().is_none());
    }

    #[test]
    fn learn_session_walks_every_word() {
        let mut trainer = loaded();
        trainer.start_session(StudyMode::Learn).unwrap();
        assert_eq!(trainer.aggregate().total_sessions, 1);

        let mut seen = Vec::new();
        let mut summary = None;
        while let Some(card) = trainer.current_card() {
            assert_eq!(card.prompt_side, Side::Source);
            assert_eq!(card.answer, None);
            seen.push(card.prompt);
            summary = trainer.advance().unwrap();
        }

        seen.sort();
        assert_eq!(seen, vec!["bird", "cat", "dog", "hello"]);
        assert_eq!(trainer.status(), SessionStatus::Completed);
        assert_eq!(summary.unwrap().deck_size, 4);
        assert_eq!(trainer.advance().unwrap_err(), VocabError::NoActiveSession);
    }

    #[test]
    fn reveal_shows_answer() {
        let mut trainer = loaded();
        trainer.start_session(StudyMode::Learn).unwrap();
        let card = trainer.reveal().unwrap();
        assert!(card.revealed);
        let word = trainer.words().iter().find(|w| w.source_text == card.prompt).unwrap();
        assert_eq!(card.answer.as_deref(), Some(word.target_text.as_str()));

        trainer.advance().unwrap();
        assert!(!trainer.current_card().unwrap().revealed);
    }

    #[test]
    fn mark_difficulty_reorders_next_session() {
        let mut trainer = loaded();
        trainer.start_session(StudyMode::Learn).unwrap();
        let first = trainer.current_card().unwrap().prompt;
        trainer.mark_difficulty(Difficulty::Easy).unwrap();
        while trainer.current_card().is_some() {
            trainer.mark_difficulty(Difficulty::Hard).unwrap();
        }

        trainer.start_session(StudyMode::Learn).unwrap();
        let mut last = String::new();
        while let Some(card) = trainer.current_card() {
            last = card.prompt;
            trainer.advance().unwrap();
        }
        assert_eq!(last, first);
        assert_eq!(trainer.aggregate().total_sessions, 2);
    }

    #[test]
    fn mark_difficulty_requires_learn_mode() {
        let mut trainer = loaded();
        trainer.start_session(StudyMode::Test).unwrap();
        let err = trainer.mark_difficulty(Difficulty::Hard).unwrap_err();
        assert_eq!(err, VocabError::WrongMode { expected: StudyMode::Learn });
        assert_eq!(trainer.session().unwrap().cursor(), 0);
    }

    #[test]
    fn submit_without_session_is_rejected() {
        let mut trainer = loaded();
        assert_eq!(trainer.submit_answer("con chó").unwrap_err(), VocabError::NoActiveSession);
        assert_eq!(trainer.aggregate().total_answers, 0);

        trainer.start_session(StudyMode::Learn).unwrap();
        assert_eq!(
            trainer.submit_answer("con chó").unwrap_err(),
            VocabError::WrongMode { expected: StudyMode::Test }
        );
    }

    #[test]
    fn test_session_scores_and_collects_mistakes() {
        let mut trainer = loaded();
        trainer.start_session(StudyMode::Test).unwrap();
        assert_eq!(trainer.aggregate().total_sessions, 0);

        assert!(answer_current(&mut trainer, true).correct);
        trainer.advance().unwrap();
        let verdict = answer_current(&mut trainer, false);
        assert!(!verdict.correct);
        assert_eq!(verdict.cue, FeedbackCue::for_verdict(false));
        // Answering the same card again counts again and repeats the mistake.
        answer_current(&mut trainer, false);
        trainer.advance().unwrap();
        assert!(answer_current(&mut trainer, true).correct);
        trainer.advance().unwrap();
        assert!(answer_current(&mut trainer, true).correct);
        let summary = trainer.advance().unwrap().unwrap();

        assert_eq!(summary.answered, 5);
        assert_eq!(summary.correct, 3);
        assert_eq!(summary.percent, 60);
        assert_eq!(summary.mistakes, 2);
        assert_eq!(trainer.mistakes().len(), 2);
        assert_eq!(trainer.mistakes()[0], trainer.mistakes()[1]);

        let stats = trainer.stats();
        assert_eq!(stats.total_answers, 5);
        assert_eq!(stats.correct_answers, 3);
        assert_eq!(stats.correct_rate, 60);
        assert_eq!(stats.touched_words, 4);
        for word in trainer.words() {
            assert!(word.correct() <= word.attempts());
        }
    }

    #[test]
    fn target_to_source_expects_source_text() {
        let mut trainer = loaded();
        trainer.set_direction(Direction::TargetToSource);
        trainer.start_session(StudyMode::Test).unwrap();
        let card = trainer.current_card().unwrap();
        assert_eq!(card.prompt_side, Side::Target);
        let word = trainer
            .words()
            .iter()
            .find(|w| w.target_text == card.prompt)
            .unwrap()
            .source_text
            .clone();
        let verdict = trainer.submit_answer(&word.to_uppercase()).unwrap();
        assert!(verdict.correct);
        assert_eq!(verdict.expected, word);
    }

    #[test]
    fn answer_is_scored_against_displayed_side() {
        let mut trainer = Trainer::with_seed(3);
        trainer.load("dog    con chó");
        trainer.start_session(StudyMode::Test).unwrap();
        let card = trainer.current_card().unwrap();
        let verdict = trainer.submit_answer("zzz").unwrap();
        let expected = match card.prompt_side {
            Side::Source => "con chó",
            Side::Target => "dog",
        };
        assert_eq!(verdict.expected, expected);
        // The side stays fixed across reveal.
        assert_eq!(trainer.reveal().unwrap().prompt_side, card.prompt_side);
    }

    #[test]
    fn random_direction_uses_both_sides() {
        let mut trainer = Trainer::with_seed(5);
        trainer.load(LIST);
        trainer.start_session(StudyMode::Test).unwrap();
        let sides: Vec<Side> = (0..64)
            .filter_map(|_| trainer.current_card())
            .map(|c| c.prompt_side)
            .collect();
        assert!(sides.contains(&Side::Source));
        assert!(sides.contains(&Side::Target));
    }

    #[test]
    fn review_mistakes_without_mistakes_is_a_no_op() {
        let mut trainer = loaded();
        trainer.start_session(StudyMode::Test).unwrap();
        while trainer.current_card().is_some() {
            answer_current(&mut trainer, true);
            trainer.advance().unwrap();
        }
        let words_before = trainer.words().to_vec();
        let cursor_before = trainer.session().unwrap().cursor();
        let id_before = trainer.session().unwrap().id();

        assert_eq!(trainer.review_mistakes().unwrap_err(), VocabError::NoMistakes);
        assert_eq!(trainer.words(), words_before.as_slice());
        assert_eq!(trainer.session().unwrap().id(), id_before);
        assert_eq!(trainer.session().unwrap().cursor(), cursor_before);
        assert_eq!(trainer.aggregate().total_sessions, 0);
    }

    #[test]
    fn review_mistakes_learns_only_missed_words() {
        let mut trainer = loaded();
        trainer.start_session(StudyMode::Test).unwrap();
        let missed = trainer.current_card().unwrap().prompt;
        answer_current(&mut trainer, false);
        trainer.advance().unwrap();
        while trainer.current_card().is_some() {
            answer_current(&mut trainer, true);
            trainer.advance().unwrap();
        }

        let session = trainer.review_mistakes().unwrap();
        assert_eq!(session.mode(), StudyMode::Learn);
        assert_eq!(session.deck().len(), 1);
        assert_eq!(trainer.current_card().unwrap().prompt, missed);
        assert_eq!(trainer.words().len(), 4);
        assert_eq!(trainer.aggregate().total_sessions, 1);

        // The review pass reports no mistakes of its own.
        let summary = trainer.advance().unwrap().unwrap();
        assert_eq!(summary.mode, StudyMode::Learn);
        assert_eq!(summary.mistakes, 0);
        assert_eq!(trainer.mistakes().len(), 1);
    }

    #[test]
    fn load_resets_session_but_keeps_aggregate() {
        let mut trainer = loaded();
        trainer.start_session(StudyMode::Test).unwrap();
        answer_current(&mut trainer, false);
        trainer.load("fish    con cá");
        assert_eq!(trainer.status(), SessionStatus::Idle);
        assert!(trainer.mistakes().is_empty());
        assert_eq!(trainer.aggregate().total_answers, 1);
        assert_eq!(trainer.stats().total_words, 1);
    }

    #[test]
    fn speech_follows_current_card() {
        let mut trainer = loaded();
        assert!(trainer.speech().is_none());
        trainer.start_session(StudyMode::Learn).unwrap();
        let card = trainer.current_card().unwrap();
        assert_eq!(trainer.speech().unwrap().text, card.prompt);
    }
}
