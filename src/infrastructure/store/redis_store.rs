//! Redis-backed store implementation.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::domain::repositories::{StoreError, StoreResult, UrlStore};

/// Default namespace prepended to every short code key.
pub const DEFAULT_KEY_PREFIX: &str = "url:";

/// Redis implementation of [`UrlStore`].
///
/// Uses connection pooling via `ConnectionManager`, which reconnects
/// transparently and is safe to clone across concurrent requests. Unlike a
/// cache, every error is propagated to the caller.
pub struct RedisUrlStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisUrlStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - namespace prepended to every key (e.g., `"url:"`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

/// Redis rejects `EX 0`, so sub-second TTLs are rounded up to one second.
fn ttl_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

/// Classifies a Redis error as a connectivity or an operation failure.
fn map_redis_error(e: RedisError) -> StoreError {
    if e.is_io_error() || e.is_connection_refusal() || e.is_connection_dropped() || e.is_timeout()
    {
        StoreError::Connection(e.to_string())
    } else {
        StoreError::Operation(e.to_string())
    }
}

#[async_trait]
impl UrlStore for RedisUrlStore {
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<bool> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();
        let secs = ttl_seconds(ttl);

        // SET .. NX EX replies OK when the key was written and nil when it
        // already existed.
        let reply: Option<String> = redis::cmd("SET")
            .arg(&full_key)
            .arg(value)
            .arg("NX")
            .arg("EX")
            .arg(secs)
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                error!("Redis SET NX error for {}: {}", key, e);
                map_redis_error(e)
            })?;

        let stored = reply.is_some();
        debug!("Redis SET NX: {} stored={} (TTL: {}s)", key, stored, secs);
        Ok(stored)
    }

    async fn get(&self, key: &str) -> StoreResult<String> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&full_key).await {
            Ok(Some(url)) => Ok(url),
            Ok(None) => {
                debug!("Redis GET miss: {}", key);
                Err(StoreError::NotFound)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Err(map_redis_error(e))
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(&full_key, value, ttl_seconds(ttl))
            .await
            .map_err(|e| {
                error!("Redis SET error for {}: {}", key, e);
                map_redis_error(e)
            })
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.map_err(map_redis_error)
    }
}
