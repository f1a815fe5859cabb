//! Debug overlay for kinematic bodies (dev-tools feature).
//!
//! Features:
//! - Body bounds and skin-shrunk bounds colored by contact state (F1)
//! - Player readout with position, velocity and contact flags (F2)
//! - Velocity arrows (F3)

mod state;
mod systems;
mod ui;

pub use state::DebugState;
pub use ui::MotionReadout;

use bevy::prelude::*;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (systems::handle_debug_hotkeys, systems::update_motion_readout).chain(),
            )
            .add_systems(
                Update,
                systems::draw_bodies.run_if(|state: Res<DebugState>| state.any_gizmos()),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::ui::describe;
    use super::*;
    use crate::movement::MotionState;

    #[test]
    fn test_describe_lists_contacts() {
        let mut state = MotionState::default();
        state.contacts.current.grounded = true;
        state.contacts.current.right = true;
        state.velocity = Vec2::new(12.0, -3.0);

        let text = describe(Vec3::new(1.0, 2.0, 0.0), &state);

        assert!(text.contains("Pos: (1.0, 2.0)"));
        assert!(text.contains("Vel: (12.0, -3.0)"));
        assert!(text.contains("Grounded: true"));
        assert!(text.contains("left=false right=true"));
    }

    #[test]
    fn test_gizmos_off_when_both_toggles_off() {
        let state = DebugState {
            draw_bodies: false,
            draw_velocity: false,
            ..default()
        };

        assert!(!state.any_gizmos());
        assert!(DebugState::default().any_gizmos());
    }
}
