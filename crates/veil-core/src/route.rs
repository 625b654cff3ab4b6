//! Screen routes

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Browser surface with the overlay (`/`)
    #[default]
    Home,
    /// Homepage settings screen (`/settings`)
    Settings,
}

impl Route {
    /// Unknown paths fall back to [`Route::Home`].
    pub fn from_path(path: &str) -> Self {
        match path.trim() {
            "/settings" => Route::Settings,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Settings => "/settings",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/settings"), Route::Settings);
        assert_eq!(Route::from_path("/nope"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Home, Route::Settings] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
