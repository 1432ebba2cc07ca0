use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiJson, AppState, CreateTargetRequest, TargetDto};

/// POST /api/targets
pub async fn add_target(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateTargetRequest>,
) -> Json<TargetDto> {
    let target = state.target_service().add_target(payload.into()).await;
    Json(TargetDto::from(target))
}

/// GET /api/targets
/// Every recorded target, oldest first.
pub async fn list_targets(State(state): State<Arc<AppState>>) -> Json<Vec<TargetDto>> {
    let targets = state.target_service().list_targets().await;
    Json(targets.into_iter().map(TargetDto::from).collect())
}
