//! Handler for password generation endpoint.

use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;

/// Generates a random alphanumeric password.
///
/// # Endpoint
///
/// `GET /gen-pass`
///
/// # Response
///
/// `text/plain` body containing the password, e.g. `aZ3kP9qLm2`.
pub async fn password_handler(State(state): State<AppState>) -> Result<String, AppError> {
    let password = state
        .password_service
        .generate_password()
        .inspect_err(|e| tracing::error!(error = %e, "Failed to generate password"))?;

    Ok(password)
}
