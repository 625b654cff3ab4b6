//! Navigation controller
//!
//! Issues load/back/forward/reload/home commands to the rendering surface
//! and folds the surface's callbacks into [`SurfaceState`]. The surface
//! handle is optional until the embedder attaches it; every command on an
//! absent surface is a no-op.

use crate::homepage::{HomepageGateway, DEFAULT_HOMEPAGE};
use crate::input::{InputResolver, NavigationTarget};
use crate::surface::{AddressField, RenderingSurface, SurfaceState};

pub struct NavigationController {
    surface: Option<Box<dyn RenderingSurface>>,
    state: SurfaceState,
    address: AddressField,
    resolver: InputResolver,
    homepage: HomepageGateway,
    /// Homepage value most recently loaded or observed
    last_homepage: Option<String>,
    /// Target of an issued load the surface has not reported yet
    pending_url: Option<String>,
}

impl NavigationController {
    pub fn new(resolver: InputResolver, homepage: HomepageGateway) -> Self {
        Self {
            surface: None,
            state: SurfaceState::default(),
            address: AddressField::default(),
            resolver,
            homepage,
            last_homepage: None,
            pending_url: None,
        }
    }

    pub fn attach_surface(&mut self, surface: Box<dyn RenderingSurface>) {
        tracing::info!("Rendering surface attached");
        self.surface = Some(surface);
    }

    pub fn detach_surface(&mut self) {
        if self.surface.take().is_some() {
            tracing::info!("Rendering surface detached");
        }
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    pub fn address(&self) -> &AddressField {
        &self.address
    }

    pub fn last_homepage(&self) -> Option<&str> {
        self.last_homepage.as_deref()
    }

    // === Commands ===

    /// Load the configured homepage.
    pub fn load_home(&mut self) -> bool {
        let homepage = self.read_homepage().unwrap_or_else(|| DEFAULT_HOMEPAGE.to_string());
        self.last_homepage = Some(homepage.clone());
        self.load_url(&NavigationTarget::Url { url: homepage })
    }

    /// Resolve raw address input and load it. Blank input issues nothing.
    pub fn submit_input(&mut self, raw_input: &str) -> bool {
        match self.resolver.resolve(raw_input) {
            Some(target) => self.load_url(&target),
            None => {
                tracing::debug!("Ignoring empty address input");
                false
            }
        }
    }

    /// Load a resolved target. Returns true if the load was issued.
    pub fn load_url(&mut self, target: &NavigationTarget) -> bool {
        let Some(surface) = self.surface.as_ref() else {
            tracing::debug!(url = %target.url(), "No surface attached, ignoring load");
            return false;
        };

        tracing::info!(url = %target.url(), search = target.is_search(), "Loading URL");
        if let Err(e) = surface.load_url(target.url()) {
            tracing::warn!(url = %target.url(), error = %e, "Surface rejected load");
            return false;
        }

        self.pending_url = Some(target.url().to_string());
        self.address.text = target.url().to_string();
        self.address.focused = false;
        true
    }

    pub fn go_back(&mut self) -> bool {
        let Some(surface) = self.surface.as_ref() else {
            return false;
        };
        if !surface.can_go_back() {
            return false;
        }
        Self::issue("back", surface.go_back())
    }

    pub fn go_forward(&mut self) -> bool {
        let Some(surface) = self.surface.as_ref() else {
            return false;
        };
        if !surface.can_go_forward() {
            return false;
        }
        Self::issue("forward", surface.go_forward())
    }

    pub fn reload(&mut self) -> bool {
        let Some(surface) = self.surface.as_ref() else {
            return false;
        };
        Self::issue("reload", surface.reload())
    }

    fn issue(command: &str, result: crate::Result<()>) -> bool {
        match result {
            Ok(()) => {
                tracing::debug!(command, "Surface command issued");
                true
            }
            Err(e) => {
                tracing::warn!(command, error = %e, "Surface command failed");
                false
            }
        }
    }

    // === Surface callbacks ===

    /// Progress report in percent (0..=100).
    pub fn on_progress(&mut self, percent: f64) {
        self.state.apply_progress(percent);
    }

    pub fn on_navigation_start(&mut self, url: &str) {
        self.observe_url(url);
    }

    pub fn on_navigation_complete(&mut self, url: &str) {
        self.observe_url(url);
    }

    pub fn on_visited_history_update(&mut self, url: &str) {
        self.observe_url(url);
    }

    fn observe_url(&mut self, url: &str) {
        self.state.current_url = Some(url.to_string());
        self.pending_url = None;

        // Leave the field alone while the user is typing in it
        if !self.address.focused {
            self.address.text = url.to_string();
        }
    }

    // === Address field ===

    pub fn set_address_focus(&mut self, focused: bool) {
        self.address.focused = focused;
        if !focused {
            if let Some(url) = self.pending_url.as_ref().or(self.state.current_url.as_ref()) {
                self.address.text = url.clone();
            }
        }
    }

    pub fn set_address_text(&mut self, text: String) {
        self.address.text = text;
    }

    // === Settings ===

    /// Pick up a homepage change made on the settings screen.
    ///
    /// Loads the new homepage immediately when it differs from the last
    /// one seen; returns whether a load was issued.
    pub fn on_settings_return(&mut self) -> bool {
        let Some(homepage) = self.read_homepage() else {
            return false;
        };

        if self.last_homepage.as_deref() == Some(homepage.as_str()) {
            return false;
        }

        tracing::info!(homepage = %homepage, "Homepage changed, redirecting");
        self.last_homepage = Some(homepage.clone());
        self.load_url(&NavigationTarget::Url { url: homepage })
    }

    fn read_homepage(&self) -> Option<String> {
        match self.homepage.read() {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read homepage setting");
                None
            }
        }
    }
}
