//! Terrain domain: static level geometry.
//!
//! Level pieces are spawned as avian2d static colliders for the running game
//! and can also be loaded into a [`StaticTerrain`], a physics-free shape
//! caster used for level validation and deterministic controller tests.

mod caster;
mod spawn;


pub use caster::StaticTerrain;
pub use spawn::TerrainPiece;

use bevy::prelude::*;

use crate::content::ContentSet;

pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn::spawn_level_terrain.after(ContentSet))
            .add_systems(Update, spawn::draw_terrain);
    }
}
