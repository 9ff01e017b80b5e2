//! Key-value store backends for short code mappings.
//!
//! Provides two [`crate::domain::repositories::UrlStore`] implementations:
//! - [`RedisUrlStore`] - Production Redis-backed store shared by all instances
//! - [`InMemoryUrlStore`] - Single-process store for development and testing

mod memory_store;
mod redis_store;

pub use memory_store::InMemoryUrlStore;
pub use redis_store::{DEFAULT_KEY_PREFIX, RedisUrlStore};
