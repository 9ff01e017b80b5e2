//! Short code allocation and resolution service.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::ShortenError;
use crate::domain::repositories::{StoreError, UrlStore};
use crate::utils::code_generator::CodeGenerator;

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Default number of allocation attempts before giving up.
pub const DEFAULT_MAX_RETRY: u32 = 5;

/// Default lifetime of a mapping when the caller gives no expiration.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Tunables for [`ShortenService`], fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenSettings {
    pub code_length: usize,
    pub max_retry: u32,
    pub default_ttl: Duration,
}

impl Default for ShortenSettings {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_retry: DEFAULT_MAX_RETRY,
            default_ttl: DEFAULT_TTL,
        }
    }
}

/// Allocates unique short codes and resolves them back to target URLs.
///
/// Uniqueness is delegated entirely to the store's atomic
/// [`UrlStore::set_if_absent`]; the service holds no mutable state and takes
/// no locks, so any number of instances can allocate against the same key
/// space concurrently.
///
/// # Allocation
///
/// Each attempt generates a fresh code and tries to claim it:
///
/// - claimed: the code is returned
/// - occupied: collision, try again with a new code
/// - generator or store failure: returned immediately, not retried
///
/// After `max_retry` collisions the call fails with
/// [`ShortenError::AllocationExhausted`]. Dropping the returned future stops
/// the loop at its next store call.
///
/// Collisions and exhaustion are counted through the `metrics` facade. The
/// counters are no-ops until the embedding binary installs a recorder.
pub struct ShortenService {
    store: Arc<dyn UrlStore>,
    generator: Arc<dyn CodeGenerator>,
    settings: ShortenSettings,
}

impl ShortenService {
    /// Creates a new shorten service.
    pub fn new(
        store: Arc<dyn UrlStore>,
        generator: Arc<dyn CodeGenerator>,
        settings: ShortenSettings,
    ) -> Self {
        Self {
            store,
            generator,
            settings,
        }
    }

    /// Returns the settings this service was built with.
    pub fn settings(&self) -> &ShortenSettings {
        &self.settings
    }

    /// Maps a caller-supplied expiration to a store TTL.
    ///
    /// Non-positive values fall back to the configured default.
    pub fn ttl_for(&self, expiration_seconds: i64) -> Duration {
        if expiration_seconds > 0 {
            Duration::from_secs(expiration_seconds as u64)
        } else {
            self.settings.default_ttl
        }
    }

    /// Allocates a new short code for `target_url`.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::RandomSource`] if code generation fails
    /// - [`ShortenError::Store`] if the store call itself fails
    /// - [`ShortenError::AllocationExhausted`] after `max_retry` collisions
    pub async fn allocate(
        &self,
        target_url: &str,
        expiration_seconds: i64,
    ) -> Result<String, ShortenError> {
        let ttl = self.ttl_for(expiration_seconds);

        for attempt in 1..=self.settings.max_retry {
            let code = self.generator.generate_code(self.settings.code_length)?;

            if self.store.set_if_absent(&code, target_url, ttl).await? {
                info!(code = %code, attempt, ttl_secs = ttl.as_secs(), "Short code allocated");
                return Ok(code);
            }

            debug!(code = %code, attempt, "Short code collision");
            metrics::counter!("shortlink_code_collisions_total").increment(1);
        }

        warn!(
            attempts = self.settings.max_retry,
            "Short code allocation exhausted"
        );
        metrics::counter!("shortlink_allocation_exhausted_total").increment(1);

        Err(ShortenError::AllocationExhausted {
            attempts: self.settings.max_retry,
        })
    }

    /// Looks up the target URL for `code`.
    ///
    /// Read-only: repeated calls return the same URL until the mapping expires.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::CodeNotFound`] if the code never existed or has expired
    /// - [`ShortenError::Store`] with the backend error unchanged otherwise
    pub async fn resolve(&self, code: &str) -> Result<String, ShortenError> {
        match self.store.get(code).await {
            Ok(url) => Ok(url),
            Err(StoreError::NotFound) => Err(ShortenError::CodeNotFound),
            Err(e) => Err(ShortenError::Store(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RandomSourceError;
    use crate::domain::repositories::MockUrlStore;
    use crate::infrastructure::store::InMemoryUrlStore;
    use crate::utils::code_generator::{MockCodeGenerator, SecureCodeGenerator};
    use mockall::Sequence;

    fn service_with(store: MockUrlStore, generator: MockCodeGenerator) -> ShortenService {
        ShortenService::new(
            Arc::new(store),
            Arc::new(generator),
            ShortenSettings::default(),
        )
    }

    fn counting_generator() -> MockCodeGenerator {
        let mut generator = MockCodeGenerator::new();
        let mut n = 0;
        generator.expect_generate_code().returning(move |len| {
            n += 1;
            Ok(format!("{:0>width$}", n, width = len))
        });
        generator
    }

    #[tokio::test]
    async fn test_allocate_success_first_attempt() {
        let mut store = MockUrlStore::new();
        store
            .expect_set_if_absent()
            .withf(|code, url, ttl| {
                code == "0000001"
                    && url == "https://example.com"
                    && *ttl == Duration::from_secs(604_800)
            })
            .times(1)
            .returning(|_, _, _| Ok(true));

        let service = service_with(store, counting_generator());

        let code = service
            .allocate("https://example.com", 604_800)
            .await
            .unwrap();

        assert_eq!(code, "0000001");
    }

    #[tokio::test]
    async fn test_allocate_retries_on_collision() {
        let mut store = MockUrlStore::new();
        let mut seq = Sequence::new();
        store
            .expect_set_if_absent()
            .times(4)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(false));
        store
            .expect_set_if_absent()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(true));

        let service = service_with(store, counting_generator());

        let code = service.allocate("https://example.com", 60).await.unwrap();

        assert_eq!(code, "0000005");
    }

    #[tokio::test]
    async fn test_allocate_exhausted_after_max_retry() {
        let mut store = MockUrlStore::new();
        store
            .expect_set_if_absent()
            .times(DEFAULT_MAX_RETRY as usize)
            .returning(|_, _, _| Ok(false));

        let service = service_with(store, counting_generator());

        let err = service
            .allocate("https://example.com", 60)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ShortenError::AllocationExhausted { attempts: 5 }
        ));
        assert_eq!(err.to_string(), "failed to shorten URL");
    }

    #[tokio::test]
    async fn test_allocate_respects_configured_retry_bound() {
        let mut store = MockUrlStore::new();
        store
            .expect_set_if_absent()
            .times(2)
            .returning(|_, _, _| Ok(false));

        let service = ShortenService::new(
            Arc::new(store),
            Arc::new(counting_generator()),
            ShortenSettings {
                max_retry: 2,
                ..ShortenSettings::default()
            },
        );

        let err = service.allocate("https://example.com", 0).await.unwrap_err();

        assert!(matches!(
            err,
            ShortenError::AllocationExhausted { attempts: 2 }
        ));
    }

    #[tokio::test]
    async fn test_allocate_store_error_is_not_retried() {
        let mut store = MockUrlStore::new();
        store
            .expect_set_if_absent()
            .times(1)
            .returning(|_, _, _| Err(StoreError::Connection("connection refused".into())));

        let service = service_with(store, counting_generator());

        let err = service
            .allocate("https://example.com", 60)
            .await
            .unwrap_err();

        match err {
            ShortenError::Store(StoreError::Connection(msg)) => {
                assert_eq!(msg, "connection refused")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_allocate_random_source_error_is_not_retried() {
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate_code()
            .times(1)
            .returning(|_| Err(RandomSourceError(getrandom::Error::UNSUPPORTED)));

        let mut store = MockUrlStore::new();
        store.expect_set_if_absent().times(0);

        let service = service_with(store, generator);

        let err = service
            .allocate("https://example.com", 60)
            .await
            .unwrap_err();

        assert!(matches!(err, ShortenError::RandomSource(_)));
    }

    #[tokio::test]
    async fn test_allocate_uses_default_ttl_for_non_positive_expiration() {
        let mut store = MockUrlStore::new();
        store
            .expect_set_if_absent()
            .withf(|_, _, ttl| *ttl == DEFAULT_TTL)
            .times(2)
            .returning(|_, _, _| Ok(true));

        let service = service_with(store, counting_generator());

        service.allocate("https://example.com", 0).await.unwrap();
        service.allocate("https://example.com", -10).await.unwrap();
    }

    #[tokio::test]
    async fn test_allocate_requests_configured_code_length() {
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate_code()
            .withf(|len| *len == 12)
            .times(1)
            .returning(|_| Ok("abcdefghijkl".to_string()));

        let mut store = MockUrlStore::new();
        store
            .expect_set_if_absent()
            .times(1)
            .returning(|_, _, _| Ok(true));

        let service = ShortenService::new(
            Arc::new(store),
            Arc::new(generator),
            ShortenSettings {
                code_length: 12,
                ..ShortenSettings::default()
            },
        );

        assert_eq!(
            service.allocate("https://example.com", 60).await.unwrap(),
            "abcdefghijkl"
        );
    }

    #[tokio::test]
    async fn test_resolve_not_found_maps_to_code_not_found() {
        let mut store = MockUrlStore::new();
        store
            .expect_get()
            .withf(|code| code == "nonexistent")
            .times(1)
            .returning(|_| Err(StoreError::NotFound));

        let service = service_with(store, MockCodeGenerator::new());

        let err = service.resolve("nonexistent").await.unwrap_err();

        assert!(matches!(err, ShortenError::CodeNotFound));
    }

    #[tokio::test]
    async fn test_resolve_passes_through_infra_error() {
        let mut store = MockUrlStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(StoreError::Connection("broken pipe".into())));

        let service = service_with(store, MockCodeGenerator::new());

        let err = service.resolve("abc1234").await.unwrap_err();

        match err {
            ShortenError::Store(inner) => {
                assert_eq!(inner, StoreError::Connection("broken pipe".into()))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_allocate_then_resolve_round_trip() {
        let service = ShortenService::new(
            Arc::new(InMemoryUrlStore::new()),
            Arc::new(SecureCodeGenerator::new()),
            ShortenSettings::default(),
        );

        let code = service
            .allocate("https://example.com", 604_800)
            .await
            .unwrap();

        assert_eq!(code.len(), 7);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(service.resolve(&code).await.unwrap(), "https://example.com");
        assert_eq!(service.resolve(&code).await.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_against_empty_store() {
        let service = ShortenService::new(
            Arc::new(InMemoryUrlStore::new()),
            Arc::new(SecureCodeGenerator::new()),
            ShortenSettings::default(),
        );

        assert!(matches!(
            service.resolve("nonexistent").await,
            Err(ShortenError::CodeNotFound)
        ));
    }

    #[test]
    fn test_ttl_for() {
        let store = MockUrlStore::new();
        let service = service_with(store, MockCodeGenerator::new());

        assert_eq!(service.ttl_for(0), DEFAULT_TTL);
        assert_eq!(service.ttl_for(-1), DEFAULT_TTL);
        assert_eq!(service.ttl_for(30), Duration::from_secs(30));
    }
}
