use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiJson, AppState, LoginRequest, SignupRequest, UserDto};

/// POST /api/signup
/// Register a new account. The password is stored but never echoed back.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<SignupRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.auth_service().signup(payload.into()).await?;
    Ok(Json(UserDto::from(user)))
}

/// POST /api/login
/// Check a username/password pair and return the matching account.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state
        .auth_service()
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(UserDto::from(user)))
}
