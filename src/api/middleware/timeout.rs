//! Per-request deadline middleware.

use axum::http::StatusCode;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Creates a layer that aborts requests running longer than `timeout`.
///
/// When the deadline fires the handler future is dropped, so an allocation
/// in progress stops before its next store call. A conditional write already
/// sent to the store still completes atomically on the server side.
///
/// Timed-out requests receive `408 Request Timeout`.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
