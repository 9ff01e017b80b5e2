//! Short code generation from a cryptographically secure random source.
//!
//! Codes are fixed-length strings whose characters are sampled independently
//! and uniformly from an alphabet. They encode nothing about the target URL
//! or the time of creation.

use thiserror::Error;

use crate::domain::RandomSourceError;

/// The default 62-symbol alphabet: `[A-Za-z0-9]`.
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Random bytes requested from the OS per refill.
const RANDOM_CHUNK: usize = 32;

/// Errors raised when building a generator from a custom alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet must not be empty")]
    Empty,
    #[error("alphabet must contain only ASCII characters")]
    NonAscii,
    #[error("alphabet contains duplicate symbol '{0}'")]
    Duplicate(char),
    #[error("alphabet must have at most 256 symbols, got {0}")]
    TooLarge(usize),
}

/// Source of random fixed-length codes.
///
/// Retry policy belongs to the caller: implementations report random source
/// failures immediately.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Generates a code of exactly `length` symbols.
    ///
    /// `length == 0` yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`RandomSourceError`] if the secure random provider fails.
    fn generate_code(&self, length: usize) -> Result<String, RandomSourceError>;
}

/// [`CodeGenerator`] backed by the operating system's secure random source.
///
/// Bytes are mapped onto the alphabet with rejection sampling: any byte at or
/// above the largest multiple of the alphabet size that fits in 256 is
/// discarded, so each symbol has exactly the same probability.
#[derive(Debug, Clone)]
pub struct SecureCodeGenerator {
    alphabet: Vec<u8>,
    accept_below: u16,
}

impl SecureCodeGenerator {
    /// Creates a generator over [`ALPHANUMERIC`].
    pub fn new() -> Self {
        Self::from_symbols(ALPHANUMERIC.as_bytes().to_vec())
    }

    /// Creates a generator over a custom alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError`] if the alphabet is empty, non-ASCII, has
    /// duplicate symbols, or has more than 256 symbols.
    pub fn with_alphabet(alphabet: &str) -> Result<Self, AlphabetError> {
        if alphabet.is_empty() {
            return Err(AlphabetError::Empty);
        }
        if !alphabet.is_ascii() {
            return Err(AlphabetError::NonAscii);
        }
        if alphabet.len() > 256 {
            return Err(AlphabetError::TooLarge(alphabet.len()));
        }

        let mut seen = [false; 128];
        for byte in alphabet.bytes() {
            if seen[byte as usize] {
                return Err(AlphabetError::Duplicate(byte as char));
            }
            seen[byte as usize] = true;
        }

        Ok(Self::from_symbols(alphabet.as_bytes().to_vec()))
    }

    fn from_symbols(alphabet: Vec<u8>) -> Self {
        let size = alphabet.len() as u16;
        Self {
            alphabet,
            accept_below: 256 - (256 % size),
        }
    }

    /// Returns the symbols this generator draws from.
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }
}

impl Default for SecureCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for SecureCodeGenerator {
    fn generate_code(&self, length: usize) -> Result<String, RandomSourceError> {
        let mut code = String::with_capacity(length);
        let mut buffer = [0u8; RANDOM_CHUNK];
        let size = self.alphabet.len();

        while code.len() < length {
            getrandom::fill(&mut buffer)?;

            for &byte in buffer.iter() {
                if u16::from(byte) >= self.accept_below {
                    continue;
                }
                code.push(self.alphabet[byte as usize % size] as char);
                if code.len() == length {
                    break;
                }
            }
        }

        Ok(code)
    }
}
