//! Content domain: data-driven tuning and level definitions loaded from RON.

mod data;
mod loader;
mod validation;


pub use data::*;
pub use loader::{ContentLoadError, LEVEL_FILE, TUNING_FILE, load_all_content, parse_ron};
pub use validation::{ValidationError, validate_level};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

/// Directory holding the content files, relative to the working directory.
pub const CONTENT_DIR: &str = "assets/data";

/// Startup systems that fill [`MovementTuning`] and [`LevelDef`]. Spawning runs after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentSet;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<LevelDef>()
            .add_systems(Startup, load_content.in_set(ContentSet));
    }
}

/// Load content from disk, keeping the built-in defaults for anything that fails.
fn load_content(mut tuning: ResMut<MovementTuning>, mut level: ResMut<LevelDef>) {
    match load_all_content(Path::new(CONTENT_DIR)) {
        Ok((loaded_tuning, loaded_level)) => {
            info!(
                "Content loaded: level '{}' with {} pieces and {} patrols",
                loaded_level.id,
                loaded_level.pieces.len(),
                loaded_level.patrols.len()
            );
            *tuning = loaded_tuning;
            *level = loaded_level;
        }
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            warn!("Using built-in tuning and level '{}'", level.id);
        }
    }

    for e in validate_level(&level, &tuning) {
        warn!("Level validation: {}", e);
    }
}
