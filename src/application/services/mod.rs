//! Business logic services for the application layer.

pub mod health_service;
pub mod password_service;
pub mod shorten_service;

pub use health_service::{HealthReport, HealthService};
pub use password_service::PasswordService;
pub use shorten_service::{ShortenService, ShortenSettings};
