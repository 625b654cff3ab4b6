//! Overlay visibility states
//!
//! ```text
//! Hidden
//!   ↓ pointer enters any region
//! Visible
//!   ↓ pointer has left every region
//! Hidden
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayVisibility {
    /// Control bar is collapsed; only the hover strips are live
    #[default]
    Hidden,
    /// Control bar is shown
    Visible,
}

impl OverlayVisibility {
    /// Derive the visibility from the union of region hover flags.
    pub fn from_hovering(any_hovered: bool) -> Self {
        if any_hovered {
            OverlayVisibility::Visible
        } else {
            OverlayVisibility::Hidden
        }
    }

    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: OverlayVisibility) -> bool {
        // Two states, no timers: every edge is allowed. Same state is a no-op.
        match (self, target) {
            (OverlayVisibility::Hidden, OverlayVisibility::Visible) => true,
            (OverlayVisibility::Visible, OverlayVisibility::Hidden) => true,
            (a, b) => *a == b,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayVisibility::Hidden => "hidden",
            OverlayVisibility::Visible => "visible",
        }
    }
}

impl std::fmt::Display for OverlayVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OverlayVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hidden" => Ok(OverlayVisibility::Hidden),
            "visible" => Ok(OverlayVisibility::Visible),
            _ => Err(format!("Unknown overlay visibility: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_hidden() {
        assert_eq!(OverlayVisibility::default(), OverlayVisibility::Hidden);
    }

    #[test]
    fn test_transitions() {
        assert!(OverlayVisibility::Hidden.can_transition_to(OverlayVisibility::Visible));
        assert!(OverlayVisibility::Visible.can_transition_to(OverlayVisibility::Hidden));
        assert!(OverlayVisibility::Visible.can_transition_to(OverlayVisibility::Visible));
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "Visible".parse::<OverlayVisibility>(),
            Ok(OverlayVisibility::Visible)
        );
        assert!("shown".parse::<OverlayVisibility>().is_err());
    }
}
