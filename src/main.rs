use avian2d::prelude::*;
use bevy::prelude::*;

use controller2d::{content, movement, terrain};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "controller2d".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        content::ContentPlugin,
        terrain::TerrainPlugin,
        movement::MovementPlugin,
    ))
    .add_systems(Startup, setup_camera);

    #[cfg(feature = "dev-tools")]
    app.add_plugins(controller2d::debug::DebugPlugin);

    app.run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
