//! In-memory vocabulary store.

use std::collections::HashMap;

use crate::parser::parse;
use crate::types::{Difficulty, LoadReport, WordEntry};

/// Words from the last uploaded list, plus difficulties remembered across
/// uploads within the same run.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<WordEntry>,
    /// Last tier assigned per source text.
    remembered: HashMap<String, Difficulty>,
    /// Presentation order of the last full-deck shuffle.
    order: Vec<usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store with the words in `content`.
    pub fn load(&mut self, content: &str) -> LoadReport {
        let parsed = parse(content);
        self.words = parsed
            .words
            .into_iter()
            .map(|raw| {
                let difficulty = self
                    .remembered
                    .get(&raw.source_text)
                    .copied()
                    .unwrap_or_default();
                WordEntry::new(raw.source_text, raw.target_text, difficulty)
            })
            .collect();
        self.order = (0..self.words.len()).collect();

        LoadReport {
            loaded: self.words.len(),
            skipped: parsed.skipped,
        }
    }

    /// Words in file order.
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.words.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut WordEntry> {
        self.words.get_mut(index)
    }

    /// Indices of every word, in file order.
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.words.len()).collect()
    }

    /// Words in the current presentation order.
    pub fn ordered(&self) -> impl Iterator<Item = &WordEntry> {
        self.order.iter().filter_map(|&i| self.words.get(i))
    }

    pub(crate) fn set_order(&mut self, order: Vec<usize>) {
        debug_assert_eq!(order.len(), self.words.len());
        self.order = order;
    }

    /// Set a word's tier and remember it for later uploads.
    pub(crate) fn set_difficulty(&mut self, index: usize, difficulty: Difficulty) {
        if let Some(word) = self.words.get_mut(index) {
            word.difficulty = difficulty;
            self.remembered.insert(word.source_text.clone(), difficulty);
        }
    }

    /// Case-insensitive substring search over both sides.
    pub fn search(&self, query: &str) -> Vec<&WordEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.words
            .iter()
            .filter(|w| {
                w.source_text.to_lowercase().contains(&query)
                    || w.target_text.to_lowercase().contains(&query)
            })
            .collect()
    }
}
