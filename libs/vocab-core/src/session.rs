//! Study session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::feedback::FeedbackCue;
use crate::types::{percent, Difficulty, Side, StudyMode};

/// Lifecycle of the trainer's session slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Idle,
    Active,
    Completed,
}

/// One pass over a deck.
///
/// `deck` holds positions in the vocabulary store, so updates made through the
/// session land on the stored words. `cursor == deck.len()` means completed.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    mode: StudyMode,
    deck: Vec<usize>,
    cursor: usize,
    pub(crate) revealed: bool,
    pub(crate) shown_side: Option<Side>,
    answered: u32,
    correct: u32,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl Session {
    pub(crate) fn new(mode: StudyMode, deck: Vec<usize>) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            mode,
            deck,
            cursor: 0,
            revealed: false,
            shown_side: None,
            answered: 0,
            correct: 0,
            started_at: Utc::now(),
            finished_at: None,
        };
        // An empty deck starts out completed.
        if session.deck.is_empty() {
            session.finished_at = Some(session.started_at);
        }
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    pub fn deck(&self) -> &[usize] {
        &self.deck
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_completed() {
            SessionStatus::Completed
        } else {
            SessionStatus::Active
        }
    }

    pub fn is_completed(&self) -> bool {
        self.cursor >= self.deck.len()
    }

    /// Store position of the card under the cursor.
    pub fn current_index(&self) -> Option<usize> {
        self.deck.get(self.cursor).copied()
    }

    /// Move to the next card. Returns true when this completes the session.
    pub(crate) fn advance(&mut self) -> bool {
        if self.is_completed() {
            return true;
        }
        self.cursor += 1;
        self.revealed = false;
        self.shown_side = None;
        if self.is_completed() {
            self.finished_at = Some(Utc::now());
            return true;
        }
        false
    }

    pub(crate) fn record_answer(&mut self, correct: bool) {
        self.answered += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn progress(&self) -> Progress {
        let total = self.deck.len();
        let position = (self.cursor + 1).min(total);
        let percent = if self.is_completed() {
            100
        } else {
            percent(position as u32, total as u32)
        };
        Progress {
            position,
            total,
            percent,
        }
    }

    /// `mistakes` is the trainer's mistake list length. Only test sessions
    /// collect mistakes, so learn summaries always report 0.
    pub fn summary(&self, mistakes: usize) -> SessionSummary {
        let mistakes = match self.mode {
            StudyMode::Test => mistakes,
            StudyMode::Learn => 0,
        };
        SessionSummary {
            session_id: self.id,
            mode: self.mode,
            deck_size: self.deck.len(),
            answered: self.answered,
            correct: self.correct,
            percent: percent(self.correct, self.answered),
            mistakes,
            started_at: self.started_at,
            finished_at: self.finished_at,
        }
    }
}

/// How far through the deck the learner is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based position of the current card.
    pub position: usize,
    pub total: usize,
    pub percent: u32,
}

/// End-of-session figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub mode: StudyMode,
    pub deck_size: usize,
    pub answered: u32,
    pub correct: u32,
    pub percent: u32,
    /// Size of the mistake list, duplicates included.
    pub mistakes: usize,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

/// What the surface shows for the current card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub mode: StudyMode,
    pub prompt_side: Side,
    pub prompt: String,
    /// Present once the card has been flipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub difficulty: Difficulty,
    pub revealed: bool,
    pub progress: Progress,
}

/// Scored answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    pub expected: String,
    pub typed_normalized: String,
    pub cue: FeedbackCue,
}
