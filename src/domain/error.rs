//! Domain error taxonomy for short code allocation and resolution.

use thiserror::Error;

use crate::domain::repositories::StoreError;

/// The secure random source could not produce bytes.
///
/// Fatal to the current allocation attempt and never retried internally.
#[derive(Debug, Error)]
#[error("secure random source unavailable: {0}")]
pub struct RandomSourceError(pub getrandom::Error);

impl From<getrandom::Error> for RandomSourceError {
    fn from(err: getrandom::Error) -> Self {
        Self(err)
    }
}

/// Errors surfaced by [`crate::application::services::ShortenService`].
///
/// Collisions are not represented here: they are absorbed by the retry loop
/// and only become visible as [`ShortenError::AllocationExhausted`].
#[derive(Debug, Error)]
pub enum ShortenError {
    #[error(transparent)]
    RandomSource(#[from] RandomSourceError),

    /// Every attempt within the retry bound hit an occupied code.
    #[error("failed to shorten URL")]
    AllocationExhausted { attempts: u32 },

    #[error("code not found")]
    CodeNotFound,

    /// Backend failure, passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}
