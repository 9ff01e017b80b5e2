//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, error};

use crate::config::MAX_CODE_LENGTH;
use crate::domain::ShortenError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /v1/links/redirect/{code}`
///
/// # Errors
///
/// Returns 400 Bad Request if the code is malformed.
/// Returns 404 Not Found if the code doesn't exist or has expired.
/// Returns 500 Internal Server Error if the store is unavailable.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if !is_well_formed(&code) {
        return Err(AppError::bad_request("wrong format", json!({ "code": code })));
    }

    let long_url = state
        .shorten_service
        .resolve(&code)
        .await
        .inspect_err(|e| {
            if !matches!(e, ShortenError::CodeNotFound) {
                error!(code = %code, error = %e, "Failed to resolve short code");
            }
        })?;
    debug!(code = %code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}

fn is_well_formed(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_CODE_LENGTH
        && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
