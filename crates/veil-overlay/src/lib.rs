//! Veil Overlay
//!
//! The control bar is shown while the pointer is over any of its three
//! hover regions and hidden the moment it has left all of them.

mod machine;
mod state;

pub use machine::{HoverRegion, OverlayStateMachine, Transition};
pub use state::OverlayVisibility;
