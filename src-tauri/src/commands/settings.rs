//! Homepage settings commands

use tauri::State;

use super::CommandResult;
use crate::state::AppState;
use veil_core::CoreError;

fn user_error(action: &str, error: CoreError) -> String {
    match &error {
        CoreError::Homepage(e) if e.is_validation() => {
            tracing::debug!(error = %e, "Rejected homepage input");
        }
        _ => tracing::error!(error = %error, "Failed to {action} homepage"),
    }
    error.user_message()
}

#[tauri::command]
pub fn get_homepage(state: State<AppState>) -> CommandResult<String> {
    match state.with_browser(|browser| browser.get_homepage()) {
        Ok(url) => CommandResult::ok(url),
        Err(e) => CommandResult::err(user_error("read", e)),
    }
}

#[tauri::command]
pub fn save_homepage(state: State<AppState>, url: String) -> CommandResult<String> {
    match state.with_browser(|browser| browser.save_homepage(&url)) {
        Ok(saved) => CommandResult::ok(saved),
        Err(e) => CommandResult::err(user_error("save", e)),
    }
}

#[tauri::command]
pub fn reset_homepage(state: State<AppState>) -> CommandResult<String> {
    match state.with_browser(|browser| browser.reset_homepage()) {
        Ok(url) => CommandResult::ok(url),
        Err(e) => CommandResult::err(user_error("reset", e)),
    }
}
