//! Debug domain: hotkeys, gizmos and the motion readout.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{MotionReadout, describe, spawn_motion_readout};
use crate::movement::{KinematicController, MotionState, Player};

const VELOCITY_ARROW_SCALE: f32 = 0.1;

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    let state = &mut *debug_state;
    let toggles: [(KeyCode, &str, &mut bool); 3] = [
        (KeyCode::F1, "body bounds", &mut state.draw_bodies),
        (KeyCode::F2, "motion readout", &mut state.show_readout),
        (KeyCode::F3, "velocity arrows", &mut state.draw_velocity),
    ];

    for (key, name, flag) in toggles {
        if keyboard.just_pressed(key) {
            *flag = !*flag;
            info!("[DEBUG] {}: {}", name, flag);
        }
    }
}

/// Green grounded, orange pinched, red wall, blue ceiling, white airborne.
fn contact_color(state: &MotionState) -> Color {
    let contacts = state.contacts.current;
    if contacts.pinched() {
        Color::srgb(1.0, 0.6, 0.1)
    } else if contacts.grounded {
        Color::srgb(0.3, 0.9, 0.3)
    } else if contacts.touching_wall() {
        Color::srgb(0.9, 0.3, 0.3)
    } else if contacts.ceiling {
        Color::srgb(0.3, 0.5, 1.0)
    } else {
        Color::WHITE
    }
}

pub(crate) fn draw_bodies(
    mut gizmos: Gizmos,
    debug_state: Res<DebugState>,
    query: Query<(&Transform, &KinematicController, &MotionState)>,
) {
    for (transform, controller, state) in &query {
        let center = transform.translation.truncate();

        if debug_state.draw_bodies {
            let color = contact_color(state);
            let size = controller.body().size;
            let skin = controller.tuning().skin_width;
            gizmos.rect_2d(Isometry2d::from_translation(center), size, color);
            gizmos.rect_2d(
                Isometry2d::from_translation(center),
                size - Vec2::splat(2.0 * skin),
                color.with_alpha(0.4),
            );
        }

        if debug_state.draw_velocity && state.velocity != Vec2::ZERO {
            gizmos.arrow_2d(
                center,
                center + state.velocity * VELOCITY_ARROW_SCALE,
                Color::srgb(0.9, 0.9, 0.3),
            );
        }
    }
}

pub(crate) fn update_motion_readout(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player: Query<(&Transform, &MotionState), With<Player>>,
    mut readout: Query<(Entity, &mut Text), With<MotionReadout>>,
) {
    match (debug_state.show_readout, readout.single_mut()) {
        (false, Ok((entity, _))) => {
            commands.entity(entity).despawn();
        }
        (true, Err(_)) => spawn_motion_readout(&mut commands),
        (true, Ok((_, mut text))) => {
            if let Some((transform, state)) = player.iter().next() {
                **text = describe(transform.translation, state);
            }
        }
        (false, Err(_)) => {}
    }
}
