//! Movement domain: logging contact transitions between frames.

use bevy::prelude::*;

use crate::movement::MotionState;

pub(crate) fn report_contact_changes(query: Query<(Entity, &MotionState), Changed<MotionState>>) {
    for (entity, state) in &query {
        let now = state.contacts.current;
        let before = state.contacts.previous;

        if now.grounded && !before.grounded {
            debug!(
                "{entity}: landed, slope={}, vx={}",
                now.ground_slope, state.velocity.x
            );
        } else if !now.grounded && before.grounded {
            debug!("{entity}: left ground, vy={}", state.velocity.y);
        }

        if now.ceiling && !before.ceiling {
            debug!("{entity}: hit ceiling");
        }

        if now.pinched() && !before.pinched() {
            debug!("{entity}: pinched between walls");
        } else if now.touching_wall() && !before.touching_wall() {
            debug!(
                "{entity}: touched wall, left={}, right={}",
                now.left, now.right
            );
        }
    }
}
