// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::store::StoreError;

/// HTTP API error with status code and client-facing JSON body
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request - body did not decode into the expected shape
    InvalidBody(String),

    // 400 Bad Request - path segment did not parse
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 413 Payload Too Large
    PayloadTooLarge,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// Client-safe message. Decoder details from `InvalidBody` stay in the logs.
    pub fn message(&self) -> String {
        match self {
            ApiError::InvalidBody(_) => "Invalid request body".to_string(),
            ApiError::InvalidParameter { name, value, reason } => {
                format!("invalid {} '{}': {}", name, value, reason)
            }
            ApiError::Unauthorized(msg) => msg.clone(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::PayloadTooLarge => "Request body too large".to_string(),
        }
    }

    /// Response body. Auth and lookup failures answer with `message`, request
    /// decoding failures with `error`.
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Unauthorized(_) | ApiError::NotFound(_) => json!({ "message": self.message() }),
            ApiError::InvalidBody(_) | ApiError::InvalidParameter { .. } | ApiError::PayloadTooLarge => {
                json!({ "error": self.message() })
            }
        }
    }
}

impl ApiError {
    pub fn invalid_body(detail: impl Into<String>) -> Self {
        ApiError::InvalidBody(detail.into())
    }

    pub fn invalid_parameter(name: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        ApiError::InvalidParameter {
            name,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    pub fn unauthorized() -> Self {
        ApiError::Unauthorized("invalid token".to_string())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                tracing::debug!("Lookup miss for product {}", id);
                ApiError::not_found("Product not found")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidBody(detail) => write!(f, "invalid request body: {}", detail),
            _ => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
