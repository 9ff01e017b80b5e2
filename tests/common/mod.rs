#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use shortlink::application::services::{
    HealthService, PasswordService, ShortenService, ShortenSettings,
};
use shortlink::domain::repositories::{StoreError, StoreResult, UrlStore};
use shortlink::infrastructure::store::InMemoryUrlStore;
use shortlink::state::AppState;
use shortlink::utils::code_generator::SecureCodeGenerator;

pub const HOUR: Duration = Duration::from_secs(3600);

/// Store whose backend is always unreachable.
pub struct UnavailableStore;

#[async_trait]
impl UrlStore for UnavailableStore {
    async fn set_if_absent(&self, _key: &str, _value: &str, _ttl: Duration) -> StoreResult<bool> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn get(&self, _key: &str) -> StoreResult<String> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }
}

/// Store in which every key is already taken.
pub struct FullStore;

#[async_trait]
impl UrlStore for FullStore {
    async fn set_if_absent(&self, _key: &str, _value: &str, _ttl: Duration) -> StoreResult<bool> {
        Ok(false)
    }

    async fn get(&self, _key: &str) -> StoreResult<String> {
        Err(StoreError::NotFound)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> StoreResult<()> {
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Store whose conditional write stalls, then reports a collision.
pub struct SlowStore {
    pub delay: Duration,
    pub set_if_absent_calls: AtomicUsize,
}

impl SlowStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            set_if_absent_calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.set_if_absent_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UrlStore for SlowStore {
    async fn set_if_absent(&self, _key: &str, _value: &str, _ttl: Duration) -> StoreResult<bool> {
        self.set_if_absent_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(false)
    }

    async fn get(&self, _key: &str) -> StoreResult<String> {
        Err(StoreError::NotFound)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> StoreResult<()> {
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

pub fn create_state_with_store(store: Arc<dyn UrlStore>, min_expiration_seconds: i64) -> AppState {
    let generator = Arc::new(SecureCodeGenerator::new());

    AppState {
        shorten_service: Arc::new(ShortenService::new(
            store.clone(),
            generator.clone(),
            ShortenSettings::default(),
        )),
        password_service: Arc::new(PasswordService::new(generator, 10)),
        health_service: Arc::new(HealthService::new(
            store,
            "bookmark-management".to_string(),
            "2025".to_string(),
        )),
        min_expiration_seconds,
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlStore>) {
    let store = Arc::new(InMemoryUrlStore::new());
    let state = create_state_with_store(store.clone(), 0);
    (state, store)
}
