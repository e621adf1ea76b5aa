//! Core types for the vocabulary trainer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VocabError};

/// Learner-assigned difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    /// Tiers in the order a shuffled deck presents them.
    pub const PRIORITY: [Difficulty; 3] = [Self::Hard, Self::Medium, Self::Easy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Study session mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    /// Flip through cards and self-assess difficulty.
    Learn,
    /// Type the translation and get scored.
    Test,
}

impl StudyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Learn => "learn",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a word is shown as the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Source,
    Target,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Self::Source => Self::Target,
            Self::Target => Self::Source,
        }
    }
}

/// Prompt direction policy for test sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    SourceToTarget,
    TargetToSource,
    /// Independent fair coin per displayed card.
    Random,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Random
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceToTarget => "source_to_target",
            Self::TargetToSource => "target_to_source",
            Self::Random => "random",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "source_to_target" => Some(Self::SourceToTarget),
            "target_to_source" => Some(Self::TargetToSource),
            "random" => Some(Self::Random),
            _ => None,
        }
    }
}

/// One word pair from the uploaded list, with its learning counters.
///
/// The counters are private so that `correct <= attempts` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub source_text: String,
    pub target_text: String,
    pub difficulty: Difficulty,
    attempts: u32,
    correct: u32,
}

impl WordEntry {
    pub fn new(source_text: String, target_text: String, difficulty: Difficulty) -> Self {
        Self {
            source_text,
            target_text,
            difficulty,
            attempts: 0,
            correct: 0,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Whether the word has been answered at least once.
    pub fn is_touched(&self) -> bool {
        self.attempts > 0
    }

    /// Text shown for the given side.
    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::Source => &self.source_text,
            Side::Target => &self.target_text,
        }
    }

    /// Count one scored answer.
    pub fn record_answer(&mut self, correct: bool) {
        self.attempts += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Overwrite both counters, rejecting `correct > attempts`.
    pub fn set_counts(&mut self, attempts: u32, correct: u32) -> Result<()> {
        if correct > attempts {
            return Err(VocabError::InvalidCounts { attempts, correct });
        }
        self.attempts = attempts;
        self.correct = correct;
        Ok(())
    }
}

/// Process-wide answer and session counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Learn sessions started, mistake reviews included.
    pub total_sessions: u32,
    pub total_answers: u32,
    pub correct_answers: u32,
}

impl AggregateStats {
    pub fn record_answer(&mut self, correct: bool) {
        self.total_answers += 1;
        if correct {
            self.correct_answers += 1;
        }
    }

    /// Rounded correctness percentage, 0 when nothing was answered.
    pub fn correct_rate(&self) -> u32 {
        percent(self.correct_answers, self.total_answers)
    }
}

/// `round(part / whole * 100)`, or 0 for an empty whole.
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(whole) * 100.0).round() as u32
}

/// Outcome of loading a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}
