//! Veil Storage Layer
//!
//! SQLite-backed key-value settings. The browser core only sees the
//! [`SettingsStore`] trait; [`Database`] is the production backend.

mod database;
mod error;
mod migrations;
mod store;

pub use database::Database;
pub use error::StorageError;
pub use store::SettingsStore;

pub type Result<T> = std::result::Result<T, StorageError>;
