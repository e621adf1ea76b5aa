//! Settings endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/settings/direction
pub async fn get_direction(State(state): State<AppState>) -> Result<Json<DirectionSetting>> {
    let direction = state.trainer()?.direction();
    Ok(Json(DirectionSetting { direction }))
}

/// PUT /api/settings/direction
/// Takes effect from the next displayed test card
pub async fn set_direction(
    State(state): State<AppState>,
    Json(request): Json<DirectionSetting>,
) -> Result<Json<DirectionSetting>> {
    state.trainer()?.set_direction(request.direction);
    tracing::debug!("Test direction set to {}", request.direction.as_str());
    Ok(Json(request))
}
