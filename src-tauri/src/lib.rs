//! Veil Browser - Tauri Application
//!
//! A frameless window with two webviews: the page itself, and a thin
//! overlay strip that appears when the pointer reaches the top edge.
//! Rust owns all state.

mod commands;
mod state;

use std::sync::Arc;

use commands::webview::{
    apply_layout, build_content_webview, build_ui_webview, OpenerLauncher, TauriSurface,
};
use state::AppState;
use tauri::window::WindowBuilder;
use tauri::{Manager, WindowEvent};
use veil_core::{AppMetadata, Config};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    veil_core::init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let package = app.package_info();
            let metadata = AppMetadata {
                name: package.name.clone(),
                version: package.version.to_string(),
                identifier: app.config().identifier.clone(),
            };
            let config = Config::new(app.path().app_data_dir()?).with_app(metadata);

            // Initialize browser state
            let state = AppState::new(&config)?;
            state.with_browser(|browser| {
                browser.set_external_launcher(Arc::new(OpenerLauncher::new(app.handle().clone())));
                Ok(())
            })?;

            // Store state in Tauri
            app.manage(state);

            let window = WindowBuilder::new(app, commands::MAIN_WINDOW)
                .title(&config.app.name)
                .inner_size(1280.0, 800.0)
                .min_inner_size(640.0, 400.0)
                .decorations(false)
                .center()
                .build()?;

            // Content first so the overlay stacks above it.
            let content = build_content_webview(app.handle(), &window)?;
            let ui = build_ui_webview(&window)?;
            let _ = ui.show();

            let state = app.state::<AppState>();
            state.with_browser(|browser| {
                browser.attach_surface(Box::new(TauriSurface::new(content)));
                Ok(())
            })?;

            let handle = app.handle().clone();
            window.on_window_event(move |event| match event {
                WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                    let route = handle
                        .state::<AppState>()
                        .with_browser(|browser| Ok(browser.current_route()))
                        .unwrap_or_default();
                    apply_layout(&handle, route);
                }
                WindowEvent::Destroyed => {
                    handle.state::<AppState>().shutdown();
                }
                _ => {}
            });

            tracing::info!(version = %config.app.version, "Veil Browser started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Navigation commands
            commands::navigation::submit_input,
            commands::navigation::load_home,
            commands::navigation::go_back,
            commands::navigation::go_forward,
            commands::navigation::reload,
            commands::navigation::set_address_focus,
            commands::navigation::set_address_text,
            commands::navigation::get_surface_state,
            // Settings commands
            commands::settings::get_homepage,
            commands::settings::save_homepage,
            commands::settings::reset_homepage,
            // Overlay commands
            commands::overlay::overlay_pointer,
            commands::overlay::get_overlay_visibility,
            // Route commands
            commands::routes::navigate_route,
            // Window commands
            commands::windows::minimize_window,
            commands::windows::toggle_maximize_window,
            commands::windows::is_window_maximized,
            commands::windows::close_window,
            commands::windows::start_window_drag,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Veil browser");
}
