//! Rendering surface interface and observed state

use serde::{Deserialize, Serialize};

use crate::Result;

/// The embedded web view that loads and displays content.
///
/// History availability is reported by the surface itself; the
/// controller never tracks it locally.
pub trait RenderingSurface: Send + Sync {
    fn load_url(&self, url: &str) -> Result<()>;

    fn go_back(&self) -> Result<()>;

    fn go_forward(&self) -> Result<()>;

    fn reload(&self) -> Result<()>;

    fn can_go_back(&self) -> bool {
        true
    }

    fn can_go_forward(&self) -> bool {
        true
    }
}

/// Load state of the rendering surface as seen by the controller.
///
/// `progress` is always `1.0` while `is_loading` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceState {
    pub current_url: Option<String>,
    pub progress: f64,
    pub is_loading: bool,
}

impl SurfaceState {
    /// Apply a progress report in percent; out-of-range values are clamped.
    pub(crate) fn apply_progress(&mut self, percent: f64) {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };

        if percent >= 100.0 {
            self.progress = 1.0;
            self.is_loading = false;
        } else {
            self.progress = percent / 100.0;
            self.is_loading = true;
        }
    }
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            current_url: None,
            progress: 1.0,
            is_loading: false,
        }
    }
}

/// Display state of the URL-entry field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressField {
    pub text: String,
    pub focused: bool,
}
