//! Core error types

use thiserror::Error;

/// Shown in place of any persistence failure; the user can simply retry.
pub const PERSISTENCE_FAILURE_MESSAGE: &str = "Could not save settings. Please try again.";

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] veil_storage::StorageError),

    #[error("{0}")]
    Homepage(#[from] veil_navigation::HomepageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Browser not initialized")]
    NotInitialized,
}

impl CoreError {
    /// Text suitable for showing to the user.
    ///
    /// Validation problems are reported verbatim; storage failures collapse
    /// into a generic retryable message.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Homepage(e) if e.is_validation() => e.to_string(),
            CoreError::Homepage(_) | CoreError::Storage(_) => {
                PERSISTENCE_FAILURE_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}
