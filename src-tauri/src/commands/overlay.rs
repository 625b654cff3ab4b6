//! Overlay hover commands

use tauri::{AppHandle, State};

use super::{emit_snapshot, CommandResult};
use crate::state::AppState;
use veil_core::{HoverRegion, OverlayVisibility};

/// Report the pointer entering or leaving one of the three hover regions.
#[tauri::command]
pub fn overlay_pointer(
    app: AppHandle,
    state: State<AppState>,
    region: String,
    hovering: bool,
) -> CommandResult<OverlayVisibility> {
    let region: HoverRegion = match region.parse() {
        Ok(r) => r,
        Err(e) => return CommandResult::err(e),
    };

    match state.with_browser(|browser| {
        let transition = browser.overlay_pointer(region, hovering);
        Ok((transition, browser.overlay_visibility()))
    }) {
        Ok((transition, visibility)) => {
            if transition.is_some() {
                emit_snapshot(&app);
            }
            CommandResult::ok(visibility)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn get_overlay_visibility(state: State<AppState>) -> CommandResult<OverlayVisibility> {
    match state.with_browser(|browser| Ok(browser.overlay_visibility())) {
        Ok(visibility) => CommandResult::ok(visibility),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
