//! Vocabulary endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/vocabulary
/// Replaces the word list and ends any running session
pub async fn upload(
    State(state): State<AppState>,
    Json(payload): Json<UploadRequest>,
) -> Result<Json<UploadResponse>> {
    let report = state.trainer()?.load(&payload.content);

    tracing::info!(
        "Loaded {} words ({} lines skipped)",
        report.loaded,
        report.skipped
    );

    Ok(Json(report.into()))
}

/// GET /api/vocabulary
pub async fn list(State(state): State<AppState>) -> Result<Json<WordListResponse>> {
    let trainer = state.trainer()?;
    let words = trainer.words().to_vec();
    Ok(Json(WordListResponse {
        total: words.len(),
        words,
    }))
}

/// GET /api/vocabulary/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    let trainer = state.trainer()?;
    let results = trainer.search(&query.q).into_iter().cloned().collect();
    Ok(Json(SearchResponse {
        query: query.q,
        results,
    }))
}
