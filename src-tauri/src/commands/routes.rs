//! Screen routing

use tauri::{AppHandle, State};

use super::webview::apply_layout;
use super::{emit_snapshot, CommandResult};
use crate::state::AppState;
use veil_core::Route;

/// Switch between the browsing view and the settings screen.
///
/// Leaving settings reloads the homepage if it changed while there.
#[tauri::command]
pub fn navigate_route(app: AppHandle, state: State<AppState>, path: String) -> CommandResult<Route> {
    let target = Route::from_path(&path);

    match state.with_browser(|browser| Ok(browser.navigate_route(target))) {
        Ok(route) => {
            apply_layout(&app, route);
            emit_snapshot(&app);
            CommandResult::ok(route)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}
