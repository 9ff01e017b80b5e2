//! Repository trait for the short code key space.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors reported by a [`UrlStore`] backend.
///
/// `NotFound` is the store's native "no such key" signal. The application
/// layer translates it into [`crate::domain::ShortenError::CodeNotFound`]
/// and never lets it reach HTTP handlers directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("key not found")]
    NotFound,
    #[error("store connection error: {0}")]
    Connection(String),
    #[error("store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store holding `code -> target URL` mappings with expiration.
///
/// The store is the single point of truth for whether a code is taken.
/// Implementations are shared across requests and must be safe for
/// concurrent use.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisUrlStore`] - Redis `SET NX EX`
/// - [`crate::infrastructure::store::InMemoryUrlStore`] - single-process `DashMap`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Stores `value` under `key` only if the key is absent (or expired).
    ///
    /// Must be a single atomic check-and-set. A separate lookup followed by
    /// a write would let two concurrent writers both claim the same key.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the value was stored
    /// - `Ok(false)` if the key is already occupied
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] or [`StoreError::Operation`] on
    /// backend failures. A failed call never leaves a partial write.
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<bool>;

    /// Fetches the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the key is absent or expired.
    async fn get(&self, key: &str) -> StoreResult<String>;

    /// Stores `value` under `key` unconditionally, replacing any previous value.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
