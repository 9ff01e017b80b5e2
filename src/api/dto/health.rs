//! DTOs for health check endpoint.

use serde::Serialize;

/// Healthy instance response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub message: String,
    pub service_name: String,
    #[serde(rename = "instanceID")]
    pub instance_id: String,
}

/// Response when a dependency is unavailable.
#[derive(Debug, Serialize)]
pub struct HealthErrorResponse {
    pub error: String,
    pub message: String,
    pub service_name: String,
    pub instance_id: String,
}
