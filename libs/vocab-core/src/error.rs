//! Error types for vocab-core.

use thiserror::Error;

use crate::types::StudyMode;

/// Result type alias using VocabError.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors surfaced by trainer operations.
///
/// None of these are fatal: each one leaves the trainer untouched and is meant
/// to be shown to the learner as a notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    #[error("no vocabulary loaded, upload a word list first")]
    EmptyVocabulary,

    #[error("no mistakes to review")]
    NoMistakes,

    #[error("no active session")]
    NoActiveSession,

    #[error("operation requires a {expected} session")]
    WrongMode { expected: StudyMode },

    #[error("invalid counters: {correct} correct out of {attempts} attempts")]
    InvalidCounts { attempts: u32, correct: u32 },
}
