//! Application state management

use parking_lot::RwLock;
use std::sync::Arc;
use veil_core::{Browser, Config, Result};

/// Thread-safe application state wrapper
pub struct AppState {
    browser: Arc<RwLock<Option<Browser>>>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let browser = Browser::new(config)?;

        Ok(Self {
            browser: Arc::new(RwLock::new(Some(browser))),
        })
    }

    pub fn with_browser<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Browser) -> Result<T>,
    {
        let guard = self.browser.read();
        match guard.as_ref() {
            Some(browser) => f(browser),
            None => Err(veil_core::CoreError::NotInitialized),
        }
    }

    /// Drop the browser on shutdown; later callbacks see `NotInitialized`.
    pub fn shutdown(&self) {
        if let Some(browser) = self.browser.write().take() {
            browser.detach_surface();
            tracing::info!("Browser shut down");
        }
    }
}
