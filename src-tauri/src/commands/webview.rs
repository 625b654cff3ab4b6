//! Webview management
//!
//! The main window hosts two child webviews:
//! - `content`: the rendering surface, full window
//! - `ui-main`: the transparent overlay strip on top, or the whole window
//!   while the settings screen is open

use tauri::webview::{PageLoadEvent, WebviewBuilder};
use tauri::{
    AppHandle, LogicalPosition, LogicalSize, Manager, Webview, WebviewUrl, Window, Wry,
};
use tauri_plugin_opener::OpenerExt;

use super::{emit_snapshot, ui_webview_label, CONTENT_WEBVIEW, MAIN_WINDOW};
use crate::state::AppState;
use veil_core::{ExternalLauncher, NavigationDecision, NavigationError, RenderingSurface, Route};

/// Height of the hover strip that carries the overlay controls.
pub const OVERLAY_HEIGHT: f64 = 44.0;

/// [`RenderingSurface`] over the content webview.
pub struct TauriSurface {
    webview: Webview<Wry>,
}

impl TauriSurface {
    pub fn new(webview: Webview<Wry>) -> Self {
        Self { webview }
    }

    fn eval(&self, script: &str) -> Result<(), NavigationError> {
        self.webview
            .eval(script)
            .map_err(|e| NavigationError::Surface(e.to_string()))
    }
}

impl RenderingSurface for TauriSurface {
    fn load_url(&self, url: &str) -> Result<(), NavigationError> {
        let parsed: url::Url = url
            .parse()
            .map_err(|e| NavigationError::Surface(format!("Invalid URL {}: {}", url, e)))?;

        self.webview
            .navigate(parsed)
            .map_err(|e| NavigationError::Surface(e.to_string()))
    }

    // The webview exposes no history query; `history.back()` on an empty
    // history is already a no-op in the page.
    fn go_back(&self) -> Result<(), NavigationError> {
        self.eval("history.back()")
    }

    fn go_forward(&self) -> Result<(), NavigationError> {
        self.eval("history.forward()")
    }

    fn reload(&self) -> Result<(), NavigationError> {
        self.webview
            .reload()
            .map_err(|e| NavigationError::Surface(e.to_string()))
    }
}

/// Hands non-web URIs to the OS default handler via the opener plugin.
pub struct OpenerLauncher {
    app: AppHandle,
}

impl OpenerLauncher {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ExternalLauncher for OpenerLauncher {
    fn launch(&self, uri: &str) -> Result<(), NavigationError> {
        self.app
            .opener()
            .open_url(uri, None::<&str>)
            .map_err(|e| NavigationError::Delegation(e.to_string()))
    }
}

/// Create the content webview and wire its callbacks into the browser.
pub fn build_content_webview(app: &AppHandle, window: &Window) -> tauri::Result<Webview<Wry>> {
    let app_handle_for_navigation = app.clone();
    let app_handle_for_load = app.clone();

    let blank = url::Url::parse("about:blank").map_err(|e| tauri::Error::Anyhow(e.into()))?;

    let builder = WebviewBuilder::new(CONTENT_WEBVIEW, WebviewUrl::External(blank))
        .transparent(false)
        .enable_clipboard_access()
        .on_navigation(move |url| {
            let Some(state) = app_handle_for_navigation.try_state::<AppState>() else {
                return true;
            };

            match state.with_browser(|browser| Ok(browser.should_intercept(url.as_str()))) {
                Ok(NavigationDecision::CancelAndDelegate) => false,
                Ok(NavigationDecision::Allow) | Err(_) => true,
            }
        })
        .on_page_load(move |_webview, payload| {
            let url = payload.url().to_string();
            if let Some(state) = app_handle_for_load.try_state::<AppState>() {
                let _ = state.with_browser(|browser| {
                    match payload.event() {
                        PageLoadEvent::Started => {
                            browser.on_navigation_start(&url);
                            browser.on_progress(0.0);
                        }
                        PageLoadEvent::Finished => {
                            browser.on_navigation_complete(&url);
                            browser.on_visited_history_update(&url);
                            browser.on_progress(100.0);
                        }
                    }
                    Ok(())
                });
            }

            emit_snapshot(&app_handle_for_load);
        });

    let size = window_logical_size(window);
    let webview = window.add_child(builder, LogicalPosition::new(0.0, 0.0), size)?;
    attach_permission_handler(app, &webview)?;

    tracing::info!(label = CONTENT_WEBVIEW, "Created content webview");
    Ok(webview)
}

/// Route page permission requests (camera, location, ...) to the browser.
#[cfg(target_os = "linux")]
fn attach_permission_handler(app: &AppHandle, webview: &Webview<Wry>) -> tauri::Result<()> {
    use veil_core::{PermissionDecision, PermissionRequest, PermissionResource};
    use webkit2gtk::prelude::*;
    use webkit2gtk::{
        GeolocationPermissionRequest, NotificationPermissionRequest, UserMediaPermissionRequest,
    };

    let app = app.clone();
    webview.with_webview(move |platform| {
        platform.inner().connect_permission_request(move |view, request| {
            // WebKit reports audio and video capture as one request.
            let resources = if request.is::<UserMediaPermissionRequest>() {
                vec![PermissionResource::Camera, PermissionResource::Microphone]
            } else if request.is::<GeolocationPermissionRequest>() {
                vec![PermissionResource::Geolocation]
            } else if request.is::<NotificationPermissionRequest>() {
                vec![PermissionResource::Notifications]
            } else {
                vec![PermissionResource::Other(request.type_().name().to_string())]
            };
            let permission = PermissionRequest {
                origin: view.uri().map(|u| u.to_string()).unwrap_or_default(),
                resources,
            };

            let Some(state) = app.try_state::<AppState>() else {
                return false;
            };
            match state.with_browser(|browser| Ok(browser.on_permission_request(&permission))) {
                Ok(PermissionDecision::Grant) => {
                    request.allow();
                    true
                }
                Err(_) => false,
            }
        });
    })
}

// Other platforms keep their webview's own permission behaviour.
#[cfg(not(target_os = "linux"))]
fn attach_permission_handler(_app: &AppHandle, _webview: &Webview<Wry>) -> tauri::Result<()> {
    tracing::debug!("No permission hook on this platform");
    Ok(())
}

/// Create the overlay/settings UI webview above the content.
pub fn build_ui_webview(window: &Window) -> tauri::Result<Webview<Wry>> {
    let label = ui_webview_label(window.label());
    let builder = WebviewBuilder::new(&label, WebviewUrl::App("index.html".into()))
        .transparent(true)
        .enable_clipboard_access();

    let size = window_logical_size(window);
    let webview = window.add_child(
        builder,
        LogicalPosition::new(0.0, 0.0),
        LogicalSize::new(size.width, OVERLAY_HEIGHT),
    )?;

    tracing::info!(label = %label, "Created UI webview");
    Ok(webview)
}

fn window_logical_size(window: &Window) -> LogicalSize<f64> {
    let scale = window.scale_factor().unwrap_or(1.0);
    window
        .inner_size()
        .map(|s| s.to_logical::<f64>(scale))
        .unwrap_or_else(|_| LogicalSize::new(1280.0, 800.0))
}

/// Position both webviews for the current window size and route.
pub fn apply_layout(app: &AppHandle, route: Route) {
    let Some(window) = app.get_window(MAIN_WINDOW) else {
        return;
    };
    let size = window_logical_size(&window);
    let origin = LogicalPosition::new(0.0, 0.0);

    if let Some(content) = app.get_webview(CONTENT_WEBVIEW) {
        let _ = content.set_position(origin);
        let _ = content.set_size(size);
        let _ = match route {
            Route::Home => content.show(),
            Route::Settings => content.hide(),
        };
    }

    if let Some(ui) = app.get_webview(&ui_webview_label(MAIN_WINDOW)) {
        let height = match route {
            Route::Home => OVERLAY_HEIGHT,
            Route::Settings => size.height,
        };
        let _ = ui.set_position(origin);
        let _ = ui.set_size(LogicalSize::new(size.width, height));
    }
}
