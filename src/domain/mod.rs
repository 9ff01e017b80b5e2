//! Domain layer: the store contract and the error taxonomy.
//!
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - Allocation and resolution errors
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod error;
pub mod repositories;

pub use error::{RandomSourceError, ShortenError};
