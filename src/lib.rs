//! # Shortlink
//!
//! A URL shortening service built with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Store contract and error taxonomy
//! - **Application Layer** ([`application`]) - Allocation, password and health services
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Short code allocation
//!
//! Codes are 7 random characters drawn uniformly from `[A-Za-z0-9]` using the
//! OS secure random source. Each code is claimed with a single atomic
//! `SET NX EX` against the shared store; on collision a fresh code is drawn,
//! up to a bounded number of attempts. No in-process locks are involved, so
//! any number of instances can serve the same key space.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        HealthService, PasswordService, ShortenService, ShortenSettings,
    };
    pub use crate::domain::repositories::{StoreError, UrlStore};
    pub use crate::domain::{RandomSourceError, ShortenError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{InMemoryUrlStore, RedisUrlStore};
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, SecureCodeGenerator};
}
