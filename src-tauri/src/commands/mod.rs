//! Tauri IPC Commands
//!
//! These commands bridge the overlay UI to the Rust core.
//! `veil_core::Browser` owns all state; the webviews only render it.

pub mod diagnostics;
pub mod navigation;
pub mod overlay;
pub mod routes;
pub mod settings;
pub mod webview;
pub mod windows;

use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager};

use crate::state::AppState;

pub const MAIN_WINDOW: &str = "main";
pub const CONTENT_WEBVIEW: &str = "content";

pub fn ui_webview_label(window_label: &str) -> String {
    format!("ui-{window_label}")
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Push the current browser snapshot to the overlay UI.
pub fn emit_snapshot(app: &AppHandle) {
    let Some(state) = app.try_state::<AppState>() else {
        return;
    };

    if let Ok(snapshot) = state.with_browser(|browser| Ok(browser.snapshot())) {
        let _ = app.emit_to(
            ui_webview_label(MAIN_WINDOW).as_str(),
            "surface-state",
            snapshot,
        );
    }
}
