//! Debug domain: overlay toggles.

use bevy::prelude::*;

/// Which dev-tools overlays are drawn. F1, F2 and F3 flip them.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugState {
    /// Body and skin-shrunk bounds, colored by contact state.
    pub draw_bodies: bool,
    pub draw_velocity: bool,
    /// Text readout of the player's motion state.
    pub show_readout: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            draw_bodies: true,
            draw_velocity: true,
            show_readout: false,
        }
    }
}

impl DebugState {
    pub fn any_gizmos(&self) -> bool {
        self.draw_bodies || self.draw_velocity
    }
}
