//! Veil Core
//!
//! Central coordination layer for the Veil browser shell. `Browser` owns
//! every piece of state; the webviews only render it.

mod browser;
mod config;
mod error;
mod permissions;
mod route;

pub use browser::{Browser, BrowserSnapshot};
pub use config::{AppMetadata, Config};
pub use error::{CoreError, PERSISTENCE_FAILURE_MESSAGE};
pub use permissions::{PermissionDecision, PermissionRequest, PermissionResource};
pub use route::Route;

// Re-export core components
pub use veil_navigation::{
    validate_homepage, AddressField, ExternalLauncher, HomepageError, NavigationDecision,
    NavigationError, RenderingSurface, SurfaceState, DEFAULT_HOMEPAGE,
};
pub use veil_overlay::{HoverRegion, OverlayVisibility, Transition};
pub use veil_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
