//! Movement domain: input sampling for kinematic actors.

use bevy::prelude::*;

use crate::movement::{MovementInput, Patrol, Player};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut MovementInput, With<Player>>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let jump_keys = [KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp];

    for mut input in &mut query {
        input.axis = Vec2::new(x, 0.0);
        input.jump_pressed = keyboard.any_just_pressed(jump_keys);
        input.jump_held = keyboard.any_pressed(jump_keys);
    }
}

pub(crate) fn drive_patrols(mut query: Query<(&Transform, &mut Patrol, &mut MovementInput)>) {
    for (transform, mut patrol, mut input) in &mut query {
        let before = patrol.direction;
        input.axis = Vec2::new(patrol.steer(transform.translation.x), 0.0);
        if patrol.direction != before {
            trace!("Patrol turned at x={}", transform.translation.x);
        }
    }
}
