//! Study session endpoints

use axum::{extract::State, Json};
use vocab_core::{Session, Trainer};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// Render the session slot. Draws a fresh prompt side for test cards.
fn session_response(trainer: &mut Trainer) -> SessionResponse {
    let card = trainer.current_card();
    respond_with(trainer, card)
}

fn respond_with(trainer: &Trainer, card: Option<CardView>) -> SessionResponse {
    let status = trainer.status();
    let session = trainer.session();
    SessionResponse {
        status,
        session_id: session.map(Session::id),
        mode: session.map(Session::mode),
        progress: trainer.progress(),
        card,
        summary: if status == SessionStatus::Completed {
            trainer.summary()
        } else {
            None
        },
    }
}

fn log_completion(summary: Option<&SessionSummary>) {
    if let Some(summary) = summary {
        tracing::info!(
            "Finished {} session {}: {}/{} correct ({}%), {} mistakes",
            summary.mode,
            summary.session_id,
            summary.correct,
            summary.answered,
            summary.percent,
            summary.mistakes
        );
    }
}

/// GET /api/session
pub async fn current(State(state): State<AppState>) -> Result<Json<SessionResponse>> {
    let mut trainer = state.trainer()?;
    Ok(Json(session_response(&mut trainer)))
}

/// POST /api/session/start
pub async fn start(
    State(state): State<AppState>,
    Json(request): Json<StartSessionRequest>,
) -> Result<Json<SessionResponse>> {
    let mut trainer = state.trainer()?;
    let session = trainer.start_session(request.mode)?;
    tracing::info!(
        "Started {} session {} with {} cards",
        session.mode(),
        session.id(),
        session.deck().len()
    );
    Ok(Json(session_response(&mut trainer)))
}

/// POST /api/session/review-mistakes
/// Starts a learn session over the words missed in the last test
pub async fn review_mistakes(State(state): State<AppState>) -> Result<Json<SessionResponse>> {
    let mut trainer = state.trainer()?;
    let session = trainer.review_mistakes()?;
    tracing::info!(
        "Started mistake review {} with {} cards",
        session.id(),
        session.deck().len()
    );
    Ok(Json(session_response(&mut trainer)))
}

/// POST /api/session/reveal
/// Flips the current card without changing its prompt side
pub async fn reveal(State(state): State<AppState>) -> Result<Json<SessionResponse>> {
    let mut trainer = state.trainer()?;
    let card = trainer.reveal()?;
    Ok(Json(respond_with(&trainer, Some(card))))
}

/// POST /api/session/next
pub async fn next(State(state): State<AppState>) -> Result<Json<SessionResponse>> {
    let mut trainer = state.trainer()?;
    let summary = trainer.advance()?;
    log_completion(summary.as_ref());
    Ok(Json(session_response(&mut trainer)))
}

/// POST /api/session/difficulty
/// Marks the current learn card and moves on
pub async fn difficulty(
    State(state): State<AppState>,
    Json(request): Json<DifficultyRequest>,
) -> Result<Json<SessionResponse>> {
    let mut trainer = state.trainer()?;
    let summary = trainer.mark_difficulty(request.difficulty)?;
    log_completion(summary.as_ref());
    Ok(Json(session_response(&mut trainer)))
}

/// POST /api/session/answer
pub async fn answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>> {
    let mut trainer = state.trainer()?;
    let verdict = trainer.submit_answer(&request.answer)?;
    tracing::debug!(
        "Answer {:?} scored {}",
        verdict.typed_normalized,
        if verdict.correct { "correct" } else { "wrong" }
    );
    Ok(Json(AnswerResponse {
        verdict,
        progress: trainer.progress(),
    }))
}

/// GET /api/session/mistakes
pub async fn mistakes(State(state): State<AppState>) -> Result<Json<MistakesResponse>> {
    let trainer = state.trainer()?;
    let words: Vec<WordEntry> = trainer.mistakes().into_iter().cloned().collect();
    Ok(Json(MistakesResponse {
        count: words.len(),
        words,
    }))
}

/// GET /api/speech
/// Speech request for the current card, if any
pub async fn speech(State(state): State<AppState>) -> Result<Json<SpeechResponse>> {
    let trainer = state.trainer()?;
    Ok(Json(SpeechResponse {
        speech: trainer.speech(),
    }))
}
