//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /v1/links/shorten`         - Allocate a short code
//! - `GET  /v1/links/redirect/{code}` - Short link redirect
//! - `GET  /gen-pass`                 - Password generator
//! - `GET  /health-check`             - Instance identity and store liveness
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline; drops the handler future when it fires
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline applied to every request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = api::routes::public_routes()
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
