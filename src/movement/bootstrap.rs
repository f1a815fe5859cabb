//! Movement domain: spawning kinematic actors from level data.

use bevy::prelude::*;

use crate::content::{LevelDef, PatrolDef};
use crate::movement::{
    Body, KinematicController, MotionState, MovementInput, MovementTuning, Patrol, Player,
};

/// Spawn the player and every patrol of the loaded level.
///
/// An invalid body or tuning is a configuration error and aborts startup.
pub(crate) fn spawn_actors(
    mut commands: Commands,
    level: Res<LevelDef>,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) -> Result {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return Ok(());
    }

    let (width, height) = level.body;
    let controller = KinematicController::new(Body::new(width, height), tuning.clone())?;
    let spawn = Vec2::from(level.spawn);

    info!(
        "Spawning player: level={}, at={}, body={}x{}, gravity={}, jump={}..{}",
        level.id,
        spawn,
        width,
        height,
        controller.jump().gravity,
        controller.jump().min_jump_speed,
        controller.jump().max_jump_speed
    );

    commands.spawn((
        Player,
        controller,
        MotionState::default(),
        MovementInput::default(),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(width, height)),
            ..default()
        },
        Transform::from_translation(spawn.extend(1.0)),
    ));

    for patrol in &level.patrols {
        spawn_patrol(&mut commands, patrol, &tuning)?;
    }

    Ok(())
}

fn spawn_patrol(commands: &mut Commands, def: &PatrolDef, tuning: &MovementTuning) -> Result {
    let (width, height) = def.size;
    let controller = KinematicController::new(Body::new(width, height), tuning.clone())?;

    debug!(
        "Spawning patrol '{}' between x={} and x={}",
        def.id, def.min_x, def.max_x
    );

    commands.spawn((
        Patrol::new(def.min_x, def.max_x),
        controller,
        MotionState::default(),
        MovementInput::default(),
        Sprite {
            color: Color::srgb(0.8, 0.5, 0.3),
            custom_size: Some(Vec2::new(width, height)),
            ..default()
        },
        Transform::from_translation(Vec2::from(def.start).extend(1.0)),
    ));

    Ok(())
}
