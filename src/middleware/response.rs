use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// `{"message": ..., "data": ...}` envelope used by the create endpoints
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
    pub status_code: StatusCode,
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    message: &'a str,
    data: &'a T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_status(message: &'static str, data: T, status_code: StatusCode) -> Self {
        Self {
            message,
            data,
            status_code,
        }
    }

    /// Create a 201 Created response
    pub fn created(message: &'static str, data: T) -> Self {
        Self::with_status(message, data, StatusCode::CREATED)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let envelope = Envelope {
            message: self.message,
            data: &self.data,
        };
        (self.status_code, Json(envelope)).into_response()
    }
}
