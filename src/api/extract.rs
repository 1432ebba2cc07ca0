//! JSON body extractor that reports decode failures as [`ApiError`].
//!
//! The body is decoded whatever its `Content-Type`; clients such as plain
//! `fetch` calls often omit it. Only a body that is not valid JSON for `T`
//! is rejected, always with 400.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::ApiError;

pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::malformed(rejection.body_text()))?;

        decode(&bytes).map(Self)
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        ApiError::malformed(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CreateTargetRequest, SignupRequest};

    #[test]
    fn test_decode_fills_absent_and_null_fields() {
        let req: CreateTargetRequest =
            decode(br#"{"type": null, "value": "10.0.0.1"}"#).unwrap();
        assert_eq!(req.kind, "");
        assert_eq!(req.value, "10.0.0.1");
        assert_eq!(req.description, "");
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let req: SignupRequest =
            decode(br#"{"username": "alice", "id": 99, "role": "admin"}"#).unwrap();
        assert_eq!(req.username, "alice");
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(decode::<SignupRequest>(b"").is_err());
        assert!(decode::<SignupRequest>(b"{not json").is_err());
        assert!(decode::<SignupRequest>(br#"{"username": 42}"#).is_err());
        assert!(decode::<SignupRequest>(b"[]").is_err());
    }
}
