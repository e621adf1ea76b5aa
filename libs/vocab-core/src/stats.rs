//! Read-only statistics projection.

use serde::{Deserialize, Serialize};

use crate::types::{AggregateStats, Difficulty, WordEntry};
use crate::vocabulary::Vocabulary;

/// Words of one difficulty tier, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierGroup {
    pub difficulty: Difficulty,
    pub count: usize,
    pub words: Vec<WordEntry>,
}

/// Statistics view, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub total_words: usize,
    /// Words answered at least once.
    pub touched_words: usize,
    /// Rounded percentage of correct answers, 0 before any answer.
    pub correct_rate: u32,
    pub total_sessions: u32,
    pub total_answers: u32,
    pub correct_answers: u32,
    /// Always hard, medium, easy.
    pub tiers: Vec<TierGroup>,
}

pub fn snapshot(vocabulary: &Vocabulary, aggregate: &AggregateStats) -> StatsSnapshot {
    let tiers = Difficulty::PRIORITY
        .iter()
        .map(|&difficulty| {
            let words: Vec<WordEntry> = vocabulary
                .ordered()
                .filter(|w| w.difficulty == difficulty)
                .cloned()
                .collect();
            TierGroup {
                difficulty,
                count: words.len(),
                words,
            }
        })
        .collect();

    StatsSnapshot {
        total_words: vocabulary.len(),
        touched_words: vocabulary.words().iter().filter(|w| w.is_touched()).count(),
        correct_rate: aggregate.correct_rate(),
        total_sessions: aggregate.total_sessions,
        total_answers: aggregate.total_answers,
        correct_answers: aggregate.correct_answers,
        tiers,
    }
}
