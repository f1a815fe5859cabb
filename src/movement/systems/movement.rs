//! Movement domain: stepping kinematic controllers each frame.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{KinematicController, MotionState, MovementInput, SpatialCaster};

pub(crate) fn apply_movement(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<(
        &KinematicController,
        &MovementInput,
        &mut MotionState,
        &mut Transform,
    )>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let caster = SpatialCaster::new(&spatial_query);

    for (controller, input, mut state, mut transform) in &mut query {
        let position = transform.translation.truncate();
        let displacement = controller.step(&mut state, position, input, dt, &caster);
        transform.translation += displacement.extend(0.0);
    }
}
