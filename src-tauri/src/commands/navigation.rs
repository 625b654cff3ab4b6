//! Navigation and address bar commands

use tauri::{AppHandle, State};

use super::{emit_snapshot, CommandResult};
use crate::state::AppState;
use veil_core::{AddressField, BrowserSnapshot, Result};

/// Run a navigation action, push the new snapshot and return it.
fn navigate_with<F>(app: &AppHandle, state: &AppState, action: F) -> CommandResult<BrowserSnapshot>
where
    F: FnOnce(&veil_core::Browser) -> Result<bool>,
{
    match state.with_browser(|browser| {
        let issued = action(browser)?;
        tracing::debug!(issued, "Navigation command handled");
        Ok(browser.snapshot())
    }) {
        Ok(snapshot) => {
            emit_snapshot(app);
            CommandResult::ok(snapshot)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn submit_input(
    app: AppHandle,
    state: State<AppState>,
    input: String,
) -> CommandResult<BrowserSnapshot> {
    navigate_with(&app, &state, |browser| Ok(browser.submit_input(&input)))
}

#[tauri::command]
pub fn load_home(app: AppHandle, state: State<AppState>) -> CommandResult<BrowserSnapshot> {
    navigate_with(&app, &state, |browser| Ok(browser.load_home()))
}

#[tauri::command]
pub fn go_back(app: AppHandle, state: State<AppState>) -> CommandResult<BrowserSnapshot> {
    navigate_with(&app, &state, |browser| Ok(browser.go_back()))
}

#[tauri::command]
pub fn go_forward(app: AppHandle, state: State<AppState>) -> CommandResult<BrowserSnapshot> {
    navigate_with(&app, &state, |browser| Ok(browser.go_forward()))
}

#[tauri::command]
pub fn reload(app: AppHandle, state: State<AppState>) -> CommandResult<BrowserSnapshot> {
    navigate_with(&app, &state, |browser| Ok(browser.reload()))
}

#[tauri::command]
pub fn set_address_focus(state: State<AppState>, focused: bool) -> CommandResult<AddressField> {
    match state.with_browser(|browser| Ok(browser.set_address_focus(focused))) {
        Ok(address) => CommandResult::ok(address),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn set_address_text(state: State<AppState>, text: String) -> CommandResult<()> {
    match state.with_browser(|browser| {
        browser.set_address_text(text);
        Ok(())
    }) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn get_surface_state(state: State<AppState>) -> CommandResult<BrowserSnapshot> {
    match state.with_browser(|browser| Ok(browser.snapshot())) {
        Ok(snapshot) => CommandResult::ok(snapshot),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
