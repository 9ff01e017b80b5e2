//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::store`. Mock implementations are generated via
//! `mockall` for unit tests.

pub mod url_store;

pub use url_store::{StoreError, StoreResult, UrlStore};

#[cfg(test)]
pub use url_store::MockUrlStore;
