//! Main browser state container
//!
//! `Browser` wires the navigation controller, homepage gateway, scheme
//! dispatcher, overlay and route together. The shell talks to nothing else.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use veil_navigation::{
    AddressField, ExternalLauncher, HomepageGateway, InputResolver, NavigationController,
    NavigationDecision, RenderingSurface, SchemeDispatcher, SurfaceState,
};
use veil_overlay::{HoverRegion, OverlayStateMachine, OverlayVisibility, Transition};
use veil_storage::{Database, SettingsStore};

use crate::config::Config;
use crate::permissions::{self, PermissionDecision, PermissionRequest};
use crate::route::Route;
use crate::Result;

/// Everything the overlay UI renders, captured under the locks at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSnapshot {
    pub surface: SurfaceState,
    pub address: AddressField,
    pub overlay: OverlayVisibility,
    pub route: Route,
}

pub struct Browser {
    homepage: HomepageGateway,
    controller: Arc<RwLock<NavigationController>>,
    dispatcher: Arc<RwLock<SchemeDispatcher>>,
    overlay: Arc<RwLock<OverlayStateMachine>>,
    route: Arc<RwLock<Route>>,
}

impl Browser {
    /// Open the settings database named in `config` and build the browser.
    pub fn new(config: &Config) -> Result<Self> {
        let db = Database::open(&config.database_path)?;
        Self::with_store(config, Arc::new(db))
    }

    /// Build the browser over an already-open settings store.
    pub fn with_store(config: &Config, store: Arc<dyn SettingsStore>) -> Result<Self> {
        config.validate()?;

        let homepage = HomepageGateway::new(store);
        let resolver = InputResolver::with_search_engine(config.search_template.clone());
        let controller = NavigationController::new(resolver, homepage.clone());
        let dispatcher = SchemeDispatcher::new(
            config.in_surface_schemes.clone(),
            config.delegation_timeout(),
        );

        tracing::info!(
            app = %config.app.name,
            version = %config.app.version,
            "Browser initialized"
        );

        Ok(Self {
            homepage,
            controller: Arc::new(RwLock::new(controller)),
            dispatcher: Arc::new(RwLock::new(dispatcher)),
            overlay: Arc::new(RwLock::new(OverlayStateMachine::new())),
            route: Arc::new(RwLock::new(Route::Home)),
        })
    }

    pub fn snapshot(&self) -> BrowserSnapshot {
        let controller = self.controller.read();
        BrowserSnapshot {
            surface: controller.state().clone(),
            address: controller.address().clone(),
            overlay: self.overlay.read().visibility(),
            route: *self.route.read(),
        }
    }

    // === Surface lifecycle ===

    /// Attach the rendering surface and load the homepage into it.
    pub fn attach_surface(&self, surface: Box<dyn RenderingSurface>) -> bool {
        let mut controller = self.controller.write();
        controller.attach_surface(surface);
        controller.load_home()
    }

    pub fn detach_surface(&self) {
        self.controller.write().detach_surface();
    }

    pub fn set_external_launcher(&self, launcher: Arc<dyn ExternalLauncher>) {
        self.dispatcher.write().set_launcher(launcher);
    }

    // === Navigation ===

    pub fn submit_input(&self, input: &str) -> bool {
        self.controller.write().submit_input(input)
    }

    pub fn load_home(&self) -> bool {
        self.controller.write().load_home()
    }

    pub fn go_back(&self) -> bool {
        self.controller.write().go_back()
    }

    pub fn go_forward(&self) -> bool {
        self.controller.write().go_forward()
    }

    pub fn reload(&self) -> bool {
        self.controller.write().reload()
    }

    pub fn surface_state(&self) -> SurfaceState {
        self.controller.read().state().clone()
    }

    // === Surface callbacks ===

    pub fn on_progress(&self, percent: f64) {
        self.controller.write().on_progress(percent);
    }

    pub fn on_navigation_start(&self, url: &str) {
        self.controller.write().on_navigation_start(url);
    }

    pub fn on_navigation_complete(&self, url: &str) {
        self.controller.write().on_navigation_complete(url);
    }

    pub fn on_visited_history_update(&self, url: &str) {
        self.controller.write().on_visited_history_update(url);
    }

    pub fn should_intercept(&self, target_uri: &str) -> NavigationDecision {
        self.dispatcher.read().should_intercept(target_uri)
    }

    pub fn on_permission_request(&self, request: &PermissionRequest) -> PermissionDecision {
        permissions::decide(request)
    }

    // === Address field ===

    pub fn set_address_focus(&self, focused: bool) -> AddressField {
        let mut controller = self.controller.write();
        controller.set_address_focus(focused);
        controller.address().clone()
    }

    pub fn set_address_text(&self, text: String) {
        self.controller.write().set_address_text(text);
    }

    // === Homepage settings ===

    pub fn get_homepage(&self) -> Result<String> {
        Ok(self.homepage.read()?)
    }

    pub fn save_homepage(&self, input: &str) -> Result<String> {
        Ok(self.homepage.save(input)?)
    }

    pub fn reset_homepage(&self) -> Result<String> {
        self.homepage.reset()?;
        Ok(self.homepage.read()?)
    }

    pub fn on_settings_return(&self) -> bool {
        self.controller.write().on_settings_return()
    }

    // === Overlay ===

    pub fn overlay_visibility(&self) -> OverlayVisibility {
        self.overlay.read().visibility()
    }

    pub fn overlay_pointer(&self, region: HoverRegion, hovering: bool) -> Option<Transition> {
        self.overlay.write().set_hovered(region, hovering)
    }

    // === Routes ===

    pub fn current_route(&self) -> Route {
        *self.route.read()
    }

    /// Switch screens. Leaving settings applies any homepage change.
    pub fn navigate_route(&self, target: Route) -> Route {
        let previous = {
            let mut route = self.route.write();
            std::mem::replace(&mut *route, target)
        };

        tracing::debug!(from = %previous, to = %target, "Route change");

        if previous == Route::Settings && target == Route::Home {
            self.on_settings_return();
        }

        target
    }
}
