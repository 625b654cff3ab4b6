//! Window controls for the frameless window

use tauri::Window;

use super::CommandResult;

#[tauri::command]
pub fn minimize_window(window: Window) -> CommandResult<()> {
    match window.minimize() {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Maximize, or restore if already maximized. Returns the new state.
#[tauri::command]
pub fn toggle_maximize_window(window: Window) -> CommandResult<bool> {
    let current = window.is_maximized().unwrap_or(false);
    let result = if current {
        window.unmaximize()
    } else {
        window.maximize()
    };

    match result {
        Ok(()) => CommandResult::ok(!current),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn is_window_maximized(window: Window) -> CommandResult<bool> {
    match window.is_maximized() {
        Ok(maximized) => CommandResult::ok(maximized),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn close_window(window: Window) -> CommandResult<()> {
    tracing::info!(label = window.label(), "Closing window");
    match window.close() {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Begin an OS-level window drag from one of the overlay drag strips.
#[tauri::command]
pub fn start_window_drag(window: Window) -> CommandResult<()> {
    match window.start_dragging() {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
