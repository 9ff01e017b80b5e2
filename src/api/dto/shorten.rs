//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Longest accepted mapping lifetime: ten years.
pub const MAX_EXPIRATION_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    #[validate(
        length(min = 1, message = "URL must not be empty"),
        custom(function = "validate_http_url")
    )]
    pub url: String,

    /// Lifetime of the mapping in seconds. Omitted or zero means the server default.
    #[validate(range(
        min = 0,
        max = MAX_EXPIRATION_SECONDS,
        message = "Expiration must be between 0 and 315360000 seconds"
    ))]
    pub exp: Option<i64>,
}

/// Successful shorten response.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub message: String,
    pub code: String,
}

impl ShortenResponse {
    pub fn new(code: String) -> Self {
        Self {
            message: "Shorten URL generated successfully!".to_string(),
            code,
        }
    }
}

fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => Ok(()),
        _ => Err(ValidationError::new("url").with_message("Invalid URL format".into())),
    }
}
