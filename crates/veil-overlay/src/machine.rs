//! Hover tracking for the control overlay

use serde::{Deserialize, Serialize};

use crate::state::OverlayVisibility;

/// The three pointer-sensitive strips across the top of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverRegion {
    /// Drag strip left of the controls
    LeftDragStrip,
    /// Navigation and window buttons
    ControlCluster,
    /// Drag strip right of the controls
    RightDragStrip,
}

impl HoverRegion {
    pub const ALL: [HoverRegion; 3] = [
        HoverRegion::LeftDragStrip,
        HoverRegion::ControlCluster,
        HoverRegion::RightDragStrip,
    ];

    fn index(self) -> usize {
        match self {
            HoverRegion::LeftDragStrip => 0,
            HoverRegion::ControlCluster => 1,
            HoverRegion::RightDragStrip => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HoverRegion::LeftDragStrip => "left_drag_strip",
            HoverRegion::ControlCluster => "control_cluster",
            HoverRegion::RightDragStrip => "right_drag_strip",
        }
    }
}

impl std::str::FromStr for HoverRegion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left_drag_strip" | "left" => Ok(HoverRegion::LeftDragStrip),
            "control_cluster" | "controls" => Ok(HoverRegion::ControlCluster),
            "right_drag_strip" | "right" => Ok(HoverRegion::RightDragStrip),
            _ => Err(format!("Unknown hover region: {}", s)),
        }
    }
}

/// A visibility change caused by a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: OverlayVisibility,
    pub to: OverlayVisibility,
}

/// Visibility is a pure function of the region flags: `Visible` iff at
/// least one region is hovered.
#[derive(Debug, Clone, Default)]
pub struct OverlayStateMachine {
    hovered: [bool; 3],
    visibility: OverlayVisibility,
}

impl OverlayStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> OverlayVisibility {
        self.visibility
    }

    pub fn is_hovered(&self, region: HoverRegion) -> bool {
        self.hovered[region.index()]
    }

    pub fn pointer_enter(&mut self, region: HoverRegion) -> Option<Transition> {
        self.set_hovered(region, true)
    }

    pub fn pointer_exit(&mut self, region: HoverRegion) -> Option<Transition> {
        self.set_hovered(region, false)
    }

    /// Update one region's flag. Returns the transition if visibility changed.
    pub fn set_hovered(&mut self, region: HoverRegion, hovered: bool) -> Option<Transition> {
        self.hovered[region.index()] = hovered;

        let from = self.visibility;
        let to = OverlayVisibility::from_hovering(self.hovered.iter().any(|h| *h));
        if from == to {
            return None;
        }

        debug_assert!(from.can_transition_to(to));
        tracing::debug!(region = region.as_str(), from = %from, to = %to, "Overlay transition");

        self.visibility = to;
        Some(Transition { from, to })
    }
}
