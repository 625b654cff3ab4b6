//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Surface command failed: {0}")]
    Surface(String),

    #[error("External handler failed: {0}")]
    Delegation(String),
}

/// Reasons a homepage can be rejected, plus persistence failures.
///
/// The validation variants render as inline field messages.
#[derive(Error, Debug)]
pub enum HomepageError {
    #[error("Enter a full URL including http:// or https://")]
    MissingScheme,

    #[error("Only http and https URLs are supported (got \"{0}\")")]
    UnsupportedScheme(String),

    #[error("The URL must include a host name")]
    EmptyHost,

    #[error("Storage error: {0}")]
    Storage(#[from] veil_storage::StorageError),
}

impl HomepageError {
    /// True for errors the user fixes by editing the field, false for
    /// persistence failures worth retrying.
    pub fn is_validation(&self) -> bool {
        !matches!(self, HomepageError::Storage(_))
    }
}
