//! Difficulty-prioritized shuffling.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{Difficulty, WordEntry};

/// Shuffle `indices` (positions in `words`) within each difficulty tier and
/// concatenate the tiers hard, medium, easy.
///
/// Harder words are therefore seen earlier on average, while the order inside
/// a tier is a fresh uniform permutation every call.
pub fn shuffle_by_difficulty<R: Rng + ?Sized>(
    words: &[WordEntry],
    indices: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let mut deck = Vec::with_capacity(indices.len());
    for tier in Difficulty::PRIORITY {
        let mut group: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| words[i].difficulty == tier)
            .collect();
        group.shuffle(rng);
        deck.extend(group);
    }
    deck
}
