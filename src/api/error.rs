use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorResponse;
use crate::constants::messages;
use crate::services::AuthError;

#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be decoded into the expected shape.
    MalformedRequest(String),

    UsernameTaken,

    InvalidCredentials,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MalformedRequest(msg) => write!(f, "Malformed request: {}", msg),
            ApiError::UsernameTaken => write!(f, "{}", messages::USERNAME_TAKEN),
            ApiError::InvalidCredentials => write!(f, "{}", messages::INVALID_CREDENTIALS),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::MalformedRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::UsernameTaken => (
                StatusCode::BAD_REQUEST,
                messages::USERNAME_TAKEN.to_string(),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                messages::INVALID_CREDENTIALS.to_string(),
            ),
        };

        let body = ErrorResponse {
            error: error_message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UsernameTaken => ApiError::UsernameTaken,
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
        }
    }
}

impl ApiError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        ApiError::MalformedRequest(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let (status, body) = render(ApiError::UsernameTaken).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User already exists");

        let (status, body) = render(ApiError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid credentials");

        let (status, _) = render(ApiError::malformed("expected value")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_from_auth_error() {
        assert!(matches!(
            ApiError::from(AuthError::UsernameTaken),
            ApiError::UsernameTaken
        ));
        assert!(matches!(
            ApiError::from(AuthError::InvalidCredentials),
            ApiError::InvalidCredentials
        ));
    }
}
