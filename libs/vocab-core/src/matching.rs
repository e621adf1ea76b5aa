//! Answer matching for test sessions.
//!
//! Matching is deliberately lenient: an answer is accepted when it equals,
//! contains, or is contained in any acceptable alternative. Very short inputs
//! therefore match a lot (a single letter matches every alternative containing
//! it). This is a known accuracy weakness, kept for compatibility with
//! existing word lists and learner expectations.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Characters separating acceptable alternatives in an expected answer.
const ALTERNATIVE_SEPARATORS: [char; 2] = [',', ';'];

/// Knobs for answer normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Strip diacritics before comparing, so `chao` matches `chào`.
    pub fold_accents: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { fold_accents: true }
    }
}

/// Result of comparing a typed answer to the expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized alternatives the answer was compared against.
    pub candidates: Vec<String>,
}

/// Compare a typed answer to the expected answer using default options.
pub fn evaluate(expected: &str, typed: &str) -> MatchResult {
    evaluate_with(expected, typed, MatchOptions::default())
}

/// Compare a typed answer to the expected answer.
pub fn evaluate_with(expected: &str, typed: &str, options: MatchOptions) -> MatchResult {
    let typed_normalized = normalize(typed, options);
    let candidates = candidates(expected, options);

    let is_correct = !typed_normalized.is_empty()
        && candidates.iter().any(|part| {
            part == &typed_normalized
                || part.contains(typed_normalized.as_str())
                || typed_normalized.contains(part.as_str())
        });

    MatchResult {
        is_correct,
        typed_normalized,
        candidates,
    }
}

/// Split an expected answer into normalized alternatives.
///
/// Empty alternatives (from `cat;` or `a,,b`) are kept. Every non-empty input
/// contains the empty string, so such an answer accepts anything.
pub fn candidates(expected: &str, options: MatchOptions) -> Vec<String> {
    expected
        .split(ALTERNATIVE_SEPARATORS)
        .map(|part| normalize(part, options))
        .collect()
}

/// Trim, lowercase and optionally strip accents. Inner spacing is kept as typed.
pub fn normalize(s: &str, options: MatchOptions) -> String {
    let lowered = s.trim().to_lowercase();
    if !options.fold_accents {
        return lowered;
    }
    lowered
        .replace('đ', "d")
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
