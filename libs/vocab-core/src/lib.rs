//! Core vocabulary trainer library used by the backend.
//!
//! Provides:
//! - Parser for four-space delimited word lists
//! - Difficulty-prioritized deck shuffling
//! - Learn/test session controller with mistake review
//! - Lenient answer matching (case and accent insensitive)
//! - Statistics snapshots and audio/speech feedback descriptions

pub mod error;
pub mod feedback;
pub mod matching;
pub mod parser;
pub mod session;
pub mod shuffle;
pub mod stats;
pub mod trainer;
pub mod types;
pub mod vocabulary;

pub use error::{Result, VocabError};
pub use feedback::{FeedbackCue, Note, SpeechRequest, Waveform};
pub use matching::{evaluate, evaluate_with, MatchOptions, MatchResult};
pub use parser::parse;
pub use session::{CardView, Progress, Session, SessionStatus, SessionSummary, Verdict};
pub use shuffle::shuffle_by_difficulty;
pub use stats::{StatsSnapshot, TierGroup};
pub use trainer::Trainer;
pub use types::{
    AggregateStats, Difficulty, Direction, LoadReport, Side, StudyMode, WordEntry,
};
pub use vocabulary::Vocabulary;
