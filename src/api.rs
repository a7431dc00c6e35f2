//! Read-only HTTP endpoints.
//!
//! Handy for a second screen or for scripting a rehearsal; all mutation goes
//! through the WebSocket.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::session::{estimate_duration_seconds, format_duration, SessionSnapshot};
use crate::state::AppState;
use crate::types::GameSettings;

/// Routes mounted under `/api`
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/session", get(get_session))
        .route("/api/settings", get(get_settings))
        .route("/api/estimate", get(estimate))
}

/// Current session snapshot.
///
/// GET /api/session
pub async fn get_session(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    Json(state.snapshot().await)
}

/// Current settings.
///
/// GET /api/settings
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<GameSettings> {
    Json(state.settings().await)
}

#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    pub players: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EstimateResponse {
    pub seconds: u32,
    pub formatted: String,
}

/// Game length estimate for a hypothetical roster size under current settings.
///
/// GET /api/estimate?players=N
pub async fn estimate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EstimateQuery>,
) -> Json<EstimateResponse> {
    let settings = state.settings().await;
    let seconds = estimate_duration_seconds(&settings, query.players, None);
    Json(EstimateResponse {
        seconds,
        formatted: format_duration(seconds),
    })
}
