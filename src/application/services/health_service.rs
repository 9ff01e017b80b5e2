//! Service liveness reporting.

use std::sync::Arc;

use tracing::warn;

use crate::domain::repositories::{StoreError, UrlStore};

/// Outcome of a health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub message: String,
    pub service_name: String,
    pub instance_id: String,
    /// Set when the store could not be reached.
    pub store_error: Option<StoreError>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.store_error.is_none()
    }
}

/// Reports the identity of this instance and whether its store is reachable.
pub struct HealthService {
    store: Arc<dyn UrlStore>,
    service_name: String,
    instance_id: String,
}

impl HealthService {
    /// Creates a new health service.
    pub fn new(store: Arc<dyn UrlStore>, service_name: String, instance_id: String) -> Self {
        Self {
            store,
            service_name,
            instance_id,
        }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Pings the store and builds a [`HealthReport`].
    pub async fn check(&self) -> HealthReport {
        let store_error = match self.store.ping().await {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "Store ping failed");
                Some(e)
            }
        };

        let message = if store_error.is_none() {
            "OK".to_string()
        } else {
            "store unavailable".to_string()
        };

        HealthReport {
            message,
            service_name: self.service_name.clone(),
            instance_id: self.instance_id.clone(),
            store_error,
        }
    }
}
