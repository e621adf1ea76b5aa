//! Statistics endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::StatsSnapshot;
use crate::AppState;

/// GET /api/stats
pub async fn get(State(state): State<AppState>) -> Result<Json<StatsSnapshot>> {
    let stats = state.trainer()?.stats();
    Ok(Json(stats))
}
