//! Application layer services implementing business logic.
//!
//! Services consume the store and code generator traits and provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short code allocation and resolution
//! - [`services::password_service::PasswordService`] - Random password generation
//! - [`services::health_service::HealthService`] - Instance identity and store liveness

pub mod services;
