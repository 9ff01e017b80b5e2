//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthErrorResponse, HealthResponse};
use crate::state::AppState;

/// Returns service identity and store liveness.
///
/// # Endpoint
///
/// `GET /health-check`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store PING failed
///
/// # Response
///
/// ```json
/// { "message": "OK", "serviceName": "bookmark-management", "instanceID": "f3Kq..." }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthErrorResponse>)> {
    let report = state.health_service.check().await;

    if report.is_healthy() {
        Ok(Json(HealthResponse {
            message: report.message,
            service_name: report.service_name,
            instance_id: report.instance_id,
        }))
    } else {
        Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthErrorResponse {
                error: "Internal Server Error".to_string(),
                message: report.message,
                service_name: report.service_name,
                instance_id: report.instance_id,
            }),
        ))
    }
}
