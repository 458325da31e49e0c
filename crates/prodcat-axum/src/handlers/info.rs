//! Root route handler - static service info.

use axum::Json;
use axum::extract::State;

use prodcat_core::Info;

use crate::state::AppState;

/// Report the static status payload.
pub async fn show(State(state): State<AppState>) -> Json<Info> {
    Json(state.info.clone())
}
