//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Secure random short code generation

pub mod code_generator;
