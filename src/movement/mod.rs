//! Movement domain: kinematic 2D character control.
//!
//! - components: body, motion state, contact flags, input, patrols
//! - resources:  tuning and derived jump physics
//! - integrate:  gravity, horizontal smoothing and variable-height jumps
//! - resolver:   shape-cast collision resolution and contact classification
//! - controller: per-actor step tying integration and resolution together
//! - cast:       avian2d-backed shape casts

mod bootstrap;
mod cast;
mod components;
mod controller;
mod error;
pub mod integrate;
pub mod resolver;
mod resources;
mod systems;


pub use cast::SpatialCaster;
pub use components::*;
pub use controller::KinematicController;
pub use error::ConfigError;
pub use resolver::{CastHit, MAX_CLIP_ITERATIONS, ShapeCast};
pub use resources::*;

use bevy::prelude::*;

use crate::content::ContentSet;

/// Spawns and drives kinematic actors. Reads the [`MovementTuning`] resource
/// that `ContentPlugin` loads.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, bootstrap::spawn_actors.after(ContentSet))
            .add_systems(
                Update,
                (
                    systems::read_input,
                    systems::drive_patrols,
                    systems::apply_movement,
                    systems::report_contact_changes,
                )
                    .chain(),
            );
    }
}
