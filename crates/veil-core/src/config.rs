//! Browser configuration
//!
//! Built once at startup and handed to [`crate::Browser::new`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::CoreError;
use crate::Result;
use veil_navigation::{
    DEFAULT_DELEGATION_TIMEOUT, DEFAULT_IN_SURFACE_SCHEMES, DEFAULT_SEARCH_TEMPLATE,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    pub name: String,
    pub version: String,
    pub identifier: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "Veil".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            identifier: "dev.veil.browser".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application name/version shown in the window and logs
    pub app: AppMetadata,
    /// Path to the settings database
    pub database_path: PathBuf,
    /// Search engine URL template (%s replaced with query)
    pub search_template: String,
    /// Schemes the rendering surface handles itself
    pub in_surface_schemes: Vec<String>,
    /// Longest wait for the OS handler before assuming it took the URI
    pub delegation_timeout_ms: u64,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            app: AppMetadata::default(),
            database_path: data_dir.join("veil.db"),
            search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
            in_surface_schemes: DEFAULT_IN_SURFACE_SCHEMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            delegation_timeout_ms: DEFAULT_DELEGATION_TIMEOUT.as_millis() as u64,
        }
    }

    pub fn with_app(mut self, app: AppMetadata) -> Self {
        self.app = app;
        self
    }

    pub fn delegation_timeout(&self) -> Duration {
        Duration::from_millis(self.delegation_timeout_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.search_template.contains("%s") {
            return Err(CoreError::Config(format!(
                "search template has no %s placeholder: {}",
                self.search_template
            )));
        }
        if self.in_surface_schemes.is_empty() {
            return Err(CoreError::Config(
                "at least one in-surface scheme is required".to_string(),
            ));
        }
        if self.delegation_timeout_ms == 0 {
            return Err(CoreError::Config(
                "delegation timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new(PathBuf::from("/tmp/veil"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/veil/veil.db"));
        assert_eq!(config.search_template, "https://www.google.com/search?q=%s");
        assert_eq!(config.delegation_timeout(), Duration::from_millis(300));
        assert!(config.in_surface_schemes.iter().any(|s| s == "javascript"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_template() {
        let mut config = Config::new(PathBuf::from("/tmp/veil"));
        config.search_template = "https://example.com/search".to_string();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = Config::new(PathBuf::from("/tmp/veil")).with_app(AppMetadata {
            name: "Veil Nightly".to_string(),
            version: "9.9.9".to_string(),
            identifier: "dev.veil.nightly".to_string(),
        });
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.app.name, "Veil Nightly");
        assert_eq!(parsed.in_surface_schemes, config.in_surface_schemes);
    }
}
