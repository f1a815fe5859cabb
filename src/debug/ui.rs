//! Debug domain: text readout of the player's motion state.

use bevy::prelude::*;

use crate::movement::MotionState;

#[derive(Component, Debug)]
pub struct MotionReadout;

pub(crate) fn spawn_motion_readout(commands: &mut Commands) {
    commands.spawn((
        MotionReadout,
        Text::default(),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.95, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            right: Val::Px(12.0),
            padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.05, 0.05, 0.1, 0.75)),
    ));
}

/// Multi-line summary of a body's position, velocity and contact flags.
pub(crate) fn describe(position: Vec3, state: &MotionState) -> String {
    let contacts = state.contacts.current;
    format!(
        "Pos: ({:.1}, {:.1})\nVel: ({:.1}, {:.1})\nGrounded: {} (slope {:.2})\nCeiling: {}\nWalls: left={} right={}\nJumping: {}",
        position.x,
        position.y,
        state.velocity.x,
        state.velocity.y,
        contacts.grounded,
        contacts.ground_slope,
        contacts.ceiling,
        contacts.left,
        contacts.right,
        state.contacts.jumping
    )
}
