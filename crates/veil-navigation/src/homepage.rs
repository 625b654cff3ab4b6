//! Homepage setting
//!
//! Thin read/write/reset facade over the settings store. A reset deletes
//! the stored value so the next read yields [`DEFAULT_HOMEPAGE`].

use std::sync::Arc;
use url::Url;

use crate::error::HomepageError;
use veil_storage::SettingsStore;

pub const HOMEPAGE_KEY: &str = "homepage";
pub const DEFAULT_HOMEPAGE: &str = "https://www.google.com";

/// Validate a homepage entered on the settings screen.
///
/// Checks run in order: scheme present, scheme is http(s), host present.
pub fn validate_homepage(input: &str) -> Result<Url, HomepageError> {
    let input = input.trim();

    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => return Err(HomepageError::MissingScheme),
        Err(url::ParseError::EmptyHost) => return Err(HomepageError::EmptyHost),
        Err(_) if !has_scheme(input) => return Err(HomepageError::MissingScheme),
        Err(_) => {
            // Scheme is present but the rest is unparseable; report the
            // scheme if it is the wrong one, otherwise the host.
            let scheme = input.split(':').next().unwrap_or_default().to_lowercase();
            if scheme != "http" && scheme != "https" {
                return Err(HomepageError::UnsupportedScheme(scheme));
            }
            return Err(HomepageError::EmptyHost);
        }
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(HomepageError::UnsupportedScheme(url.scheme().to_string()));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(HomepageError::EmptyHost),
    }
}

fn has_scheme(input: &str) -> bool {
    match input.split_once(':') {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

#[derive(Clone)]
pub struct HomepageGateway {
    store: Arc<dyn SettingsStore>,
}

impl HomepageGateway {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Current homepage, or the default if none is stored.
    pub fn read(&self) -> Result<String, HomepageError> {
        Ok(self.store.get(HOMEPAGE_KEY, DEFAULT_HOMEPAGE)?)
    }

    /// Validate and persist a new homepage, returning the stored value.
    pub fn save(&self, input: &str) -> Result<String, HomepageError> {
        validate_homepage(input)?;

        // Store what the user typed (trimmed), not the normalized form,
        // so `http://x.com` reads back as `http://x.com`.
        let value = input.trim().to_string();
        self.store.put(HOMEPAGE_KEY, &value)?;

        tracing::info!(homepage = %value, "Homepage saved");
        Ok(value)
    }

    pub fn reset(&self) -> Result<(), HomepageError> {
        self.store.delete(HOMEPAGE_KEY)?;
        tracing::info!("Homepage reset to default");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veil_storage::{Database, StorageError};

    fn gateway() -> HomepageGateway {
        HomepageGateway::new(Arc::new(Database::open_in_memory().unwrap()))
    }

    struct BrokenStore;

    impl SettingsStore for BrokenStore {
        fn get(&self, _key: &str, _default: &str) -> veil_storage::Result<String> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }

        fn put(&self, _key: &str, _value: &str) -> veil_storage::Result<()> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }

        fn delete(&self, _key: &str) -> veil_storage::Result<()> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }
    }

    #[test]
    fn test_read_defaults() {
        assert_eq!(gateway().read().unwrap(), DEFAULT_HOMEPAGE);
    }

    #[test]
    fn test_save_then_read() {
        let gateway = gateway();
        assert_eq!(gateway.save("  http://x.com ").unwrap(), "http://x.com");
        assert_eq!(gateway.read().unwrap(), "http://x.com");
    }

    #[test]
    fn test_read_after_reset_is_default() {
        let gateway = gateway();
        gateway.save("https://rust-lang.org").unwrap();
        gateway.reset().unwrap();
        assert_eq!(gateway.read().unwrap(), DEFAULT_HOMEPAGE);

        // Reset with nothing stored is fine too
        gateway.reset().unwrap();
        assert_eq!(gateway.read().unwrap(), DEFAULT_HOMEPAGE);
    }

    #[test]
    fn test_invalid_save_does_not_persist() {
        let gateway = gateway();
        gateway.save("https://rust-lang.org").unwrap();
        assert!(gateway.save("ftp://files.example.com").is_err());
        assert_eq!(gateway.read().unwrap(), "https://rust-lang.org");
    }

    #[test]
    fn test_validation_causes() {
        assert!(matches!(
            validate_homepage("example.com"),
            Err(HomepageError::MissingScheme)
        ));
        assert!(matches!(
            validate_homepage(""),
            Err(HomepageError::MissingScheme)
        ));
        assert!(matches!(
            validate_homepage("ftp://example.com"),
            Err(HomepageError::UnsupportedScheme(s)) if s == "ftp"
        ));
        assert!(matches!(
            validate_homepage("mailto:a@b.com"),
            Err(HomepageError::UnsupportedScheme(s)) if s == "mailto"
        ));
        assert!(matches!(
            validate_homepage("http://"),
            Err(HomepageError::EmptyHost)
        ));
    }

    #[test]
    fn test_valid_homepages() {
        for input in ["https://www.google.com", "http://x.com", "https://localhost:3000/a"] {
            assert!(validate_homepage(input).is_ok(), "{input} should be valid");
        }
    }

    #[test]
    fn test_storage_failure_is_not_validation() {
        let gateway = HomepageGateway::new(Arc::new(BrokenStore));

        let err = gateway.save("https://example.com").unwrap_err();
        assert!(matches!(err, HomepageError::Storage(_)));
        assert!(!err.is_validation());

        assert!(gateway.read().is_err());
        assert!(gateway.reset().is_err());
        assert!(HomepageError::EmptyHost.is_validation());
    }
}
