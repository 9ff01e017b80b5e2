//! Single-process store implementation for development and tests.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::domain::repositories::{StoreError, StoreResult, UrlStore};

/// A stored value with its expiration time.
///
/// `expires_at` is `None` when the TTL is too large to represent as an
/// `Instant`; such entries never expire.
#[derive(Debug, Clone)]
struct StoredUrl {
    value: String,
    expires_at: Option<Instant>,
}

impl StoredUrl {
    fn new(value: &str, ttl: Duration) -> Self {
        Self {
            value: value.to_string(),
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

/// In-memory [`UrlStore`] backed by `DashMap`.
///
/// `set_if_absent` checks and inserts under the same shard lock through the
/// entry API, so concurrent writers racing for one key see exactly one
/// winner. Expired entries are treated as absent and replaced lazily.
///
/// The key space is local to this process: do not use it when more than one
/// instance serves the same short links.
#[derive(Debug, Default)]
pub struct InMemoryUrlStore {
    entries: DashMap<String, StoredUrl>,
}

impl InMemoryUrlStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory URL store");
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_expired()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UrlStore for InMemoryUrlStore {
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<bool> {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired() {
                    occupied.insert(StoredUrl::new(value, ttl));
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(StoredUrl::new(value, ttl));
                Ok(true)
            }
        }
    }

    async fn get(&self, key: &str) -> StoreResult<String> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove_if(key, |_, entry| entry.is_expired());
        }

        Err(StoreError::NotFound)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        self.entries
            .insert(key.to_string(), StoredUrl::new(value, ttl));
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
