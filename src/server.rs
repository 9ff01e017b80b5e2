//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, service wiring, and Axum server lifecycle.

use crate::application::services::{HealthService, PasswordService, ShortenService};
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::UrlStore;
use crate::infrastructure::store::{InMemoryUrlStore, RedisUrlStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::{CodeGenerator, SecureCodeGenerator};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Length of the random instance id used when `INSTANCE_ID` is unset.
const INSTANCE_ID_LENGTH: usize = 16;

/// Connects the configured store backend.
///
/// # Errors
///
/// Returns an error if Redis is selected and cannot be reached.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn UrlStore>> {
    match config.store_backend {
        StoreBackend::Redis => {
            let store = RedisUrlStore::connect(&config.redis_url, config.redis_key_prefix.clone())
                .await
                .context("Failed to connect to Redis")?;
            tracing::info!("Store enabled (Redis)");
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Store is in-memory: short links are lost on restart and not shared");
            Ok(Arc::new(InMemoryUrlStore::new()))
        }
    }
}

/// Wires services around `store` into the shared application state.
///
/// # Errors
///
/// Returns an error if a random instance id cannot be generated.
pub fn build_state(config: &Config, store: Arc<dyn UrlStore>) -> Result<AppState> {
    let generator: Arc<dyn CodeGenerator> = Arc::new(SecureCodeGenerator::new());

    let instance_id = match &config.instance_id {
        Some(id) => id.clone(),
        None => generator
            .generate_code(INSTANCE_ID_LENGTH)
            .context("Failed to generate instance id")?,
    };

    let shorten_service = Arc::new(ShortenService::new(
        store.clone(),
        generator.clone(),
        config.shorten_settings(),
    ));
    let password_service = Arc::new(PasswordService::new(
        generator,
        config.password_length,
    ));
    let health_service = Arc::new(HealthService::new(
        store,
        config.service_name.clone(),
        instance_id,
    ));

    Ok(AppState {
        shorten_service,
        password_service,
        health_service,
        min_expiration_seconds: config.min_expiration_seconds,
    })
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Store backend (Redis or in-memory)
/// - Services and shared state
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;
    let state = build_state(&config, store)?;
    tracing::info!(
        "Instance {} of {}",
        state.health_service.instance_id(),
        config.service_name
    );

    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
