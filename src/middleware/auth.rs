use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Shared-secret gate for write endpoints.
///
/// The `Authorization` header must equal the configured token byte for byte:
/// no scheme prefix, no trimming. Runs before the handler decodes the body, so
/// a bad token wins over a bad body.
pub async fn require_api_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok());

    if presented != Some(&*state.api_token) {
        tracing::warn!(
            "Rejected {} {}: {}",
            request.method(),
            request.uri().path(),
            if presented.is_some() { "token mismatch" } else { "missing token" }
        );
        return Err(ApiError::unauthorized());
    }

    Ok(next.run(request).await)
}
