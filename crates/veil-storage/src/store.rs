//! Key-value settings interface

use crate::database::Database;
use crate::Result;

/// Persistent key-value store for user settings.
///
/// Each call is a single atomic operation against the backend; callers
/// never observe a partially written value.
pub trait SettingsStore: Send + Sync {
    /// Read `key`, returning `default` when it has never been written
    /// or was deleted.
    fn get(&self, key: &str, default: &str) -> Result<String>;

    fn put(&self, key: &str, value: &str) -> Result<()>;

    fn delete(&self, key: &str) -> Result<()>;
}

impl SettingsStore for Database {
    fn get(&self, key: &str, default: &str) -> Result<String> {
        Ok(self
            .get_setting(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.set_setting(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.delete_setting(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_falls_back_to_default() {
        let db = Database::open_in_memory().unwrap();
        let store: &dyn SettingsStore = &db;

        assert_eq!(store.get("homepage", "about:blank").unwrap(), "about:blank");

        store.put("homepage", "https://example.com").unwrap();
        assert_eq!(
            store.get("homepage", "about:blank").unwrap(),
            "https://example.com"
        );

        store.delete("homepage").unwrap();
        assert_eq!(store.get("homepage", "about:blank").unwrap(), "about:blank");
    }
}
