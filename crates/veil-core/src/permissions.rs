//! Page permission requests
//!
//! | Capability    | Decision |
//! | Camera        | Grant    |
//! | Microphone    | Grant    |
//! | Geolocation   | Grant    |
//! | Notifications | Grant    |
//!
//! There is no prompt: every request is granted and logged.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionResource {
    Camera,
    Microphone,
    Geolocation,
    Notifications,
    Other(String),
}

impl PermissionResource {
    pub fn as_str(&self) -> &str {
        match self {
            PermissionResource::Camera => "camera",
            PermissionResource::Microphone => "microphone",
            PermissionResource::Geolocation => "geolocation",
            PermissionResource::Notifications => "notifications",
            PermissionResource::Other(name) => name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionRequest {
    pub origin: String,
    pub resources: Vec<PermissionResource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Grant,
}

pub(crate) fn decide(request: &PermissionRequest) -> PermissionDecision {
    let resources: Vec<&str> = request.resources.iter().map(|r| r.as_str()).collect();
    tracing::info!(
        origin = %request.origin,
        resources = ?resources,
        "Granting permission request"
    );
    PermissionDecision::Grant
}
