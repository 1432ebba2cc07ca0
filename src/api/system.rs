//! Service-level endpoints: greeting and liveness.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::{AppState, HealthResponse, MessageResponse};
use crate::constants::GREETING;

/// GET /api/
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: GREETING.to_string(),
    })
}

/// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive",
        uptime_secs: state.start_time.elapsed().as_secs(),
        users: state.store().user_count(),
        targets: state.store().target_count(),
    })
}
