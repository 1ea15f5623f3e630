use std::fmt::Display;
use std::str::FromStr;

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body that decodes regardless of `Content-Type` and rejects
/// with a 400 `ApiError` instead of axum's default rejection.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                ApiError::invalid_body(rejection.body_text())
            }
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|err| {
            tracing::debug!("Request body rejected: {}", err);
            ApiError::invalid_body(err.to_string())
        })
    }
}

/// Parse a raw path segment, answering 400 with the parser's reason on failure.
pub fn parse_path_param<T>(name: &'static str, raw: &str) -> Result<T, ApiError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|err: T::Err| {
        tracing::debug!("Path parameter {} rejected: '{}': {}", name, raw, err);
        ApiError::invalid_parameter(name, raw, err)
    })
}
