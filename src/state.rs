use std::sync::Arc;

use crate::application::services::{HealthService, PasswordService, ShortenService};

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub password_service: Arc<PasswordService>,
    pub health_service: Arc<HealthService>,
    /// Lowest `exp` accepted by the shorten endpoint.
    pub min_expiration_seconds: i64,
}
