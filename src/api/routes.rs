//! API route configuration.

use crate::api::handlers::{health_handler, password_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /v1/links/shorten`          - Allocate a short code for a URL
/// - `GET  /v1/links/redirect/{code}`  - 302 redirect to the stored URL
/// - `GET  /gen-pass`                  - Generate a random password
/// - `GET  /health-check`              - Instance identity and store liveness
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/links/shorten", post(shorten_handler))
        .route("/v1/links/redirect/{code}", get(redirect_handler))
        .route("/gen-pass", get(password_handler))
        .route("/health-check", get(health_handler))
}
