//! Random password generation service.

use std::sync::Arc;

use crate::domain::RandomSourceError;
use crate::utils::code_generator::CodeGenerator;

/// Default length of generated passwords.
pub const DEFAULT_PASSWORD_LENGTH: usize = 10;

/// Generates random passwords from the secure code generator.
pub struct PasswordService {
    generator: Arc<dyn CodeGenerator>,
    length: usize,
}

impl PasswordService {
    /// Creates a new password service producing `length`-character passwords.
    pub fn new(generator: Arc<dyn CodeGenerator>, length: usize) -> Self {
        Self { generator, length }
    }

    /// Generates a new password.
    ///
    /// # Errors
    ///
    /// Returns [`RandomSourceError`] if the secure random source fails.
    pub fn generate_password(&self) -> Result<String, RandomSourceError> {
        self.generator.generate_code(self.length)
    }
}
