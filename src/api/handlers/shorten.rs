//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Allocates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /v1/links/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "exp": 604800 }
/// ```
///
/// `exp` is optional; omitted or `0` uses the server's default TTL.
///
/// # Response
///
/// ```json
/// { "message": "Shorten URL generated successfully!", "code": "aZ3kP9q" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a valid request or validation fails.
/// Returns 500 Internal Server Error if allocation is exhausted or the store fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let exp = payload.exp.unwrap_or(0);
    if exp < state.min_expiration_seconds {
        return Err(AppError::bad_request(
            "Invalid request",
            json!({ "exp": format!("must be at least {}", state.min_expiration_seconds) }),
        ));
    }

    let code = state
        .shorten_service
        .allocate(&payload.url, exp)
        .await
        .inspect_err(|e| tracing::error!(url = %payload.url, error = %e, "Failed to shorten URL"))?;

    Ok(Json(ShortenResponse::new(code)))
}
