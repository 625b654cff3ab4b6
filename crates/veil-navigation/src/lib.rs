//! Veil Navigation
//!
//! - Address input resolution: URL, bare domain, or web search
//! - Navigation controller over an optional rendering surface
//! - Homepage setting gateway
//! - External-scheme dispatch to the OS default handler

mod controller;
mod error;
mod homepage;
mod input;
mod scheme;
mod surface;

pub use controller::NavigationController;
pub use error::{HomepageError, NavigationError};
pub use homepage::{validate_homepage, HomepageGateway, DEFAULT_HOMEPAGE, HOMEPAGE_KEY};
pub use input::{InputResolver, NavigationTarget, DEFAULT_SEARCH_TEMPLATE};
pub use scheme::{
    scheme_of, ExternalLauncher, NavigationDecision, SchemeDispatcher,
    DEFAULT_DELEGATION_TIMEOUT, DEFAULT_IN_SURFACE_SCHEMES,
};
pub use surface::{AddressField, RenderingSurface, SurfaceState};

pub type Result<T> = std::result::Result<T, NavigationError>;
