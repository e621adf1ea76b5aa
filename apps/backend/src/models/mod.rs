//! API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from vocab-core
pub use vocab_core::{
    CardView, Difficulty, Direction, LoadReport, Progress, SessionStatus, SessionSummary,
    SpeechRequest, StatsSnapshot, StudyMode, Verdict, WordEntry,
};

// === Vocabulary ===

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadRequest {
    /// Raw word-list text, one `source    target` pair per line.
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub loaded: usize,
    pub skipped: usize,
    pub message: String,
}

impl From<LoadReport> for UploadResponse {
    fn from(report: LoadReport) -> Self {
        Self {
            loaded: report.loaded,
            skipped: report.skipped,
            message: format!("Loaded {} words", report.loaded),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WordListResponse {
    pub total: usize,
    pub words: Vec<WordEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<WordEntry>,
}

// === Session ===

#[derive(Debug, Serialize, Deserialize)]
pub struct StartSessionRequest {
    pub mode: StudyMode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DifficultyRequest {
    pub difficulty: Difficulty,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    #[serde(flatten)]
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
}

/// Snapshot of the session slot as the surface renders it.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub status: SessionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<StudyMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardView>,
    /// Only set once the deck is exhausted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SessionSummary>,
}

#[derive(Debug, Serialize)]
pub struct MistakesResponse {
    pub count: usize,
    pub words: Vec<WordEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechResponse {
    pub speech: Option<SpeechRequest>,
}

// === Settings ===

#[derive(Debug, Serialize, Deserialize)]
pub struct DirectionSetting {
    pub direction: Direction,
}
