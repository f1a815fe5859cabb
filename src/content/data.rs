//! Data definitions for the RON level files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. Coordinates are world units with +y up.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

// ============================================================================
// Levels (level.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub schema_version: u32,
    pub id: String,
    /// Player body center at spawn.
    pub spawn: (f32, f32),
    /// Player body width and height.
    pub body: (f32, f32),
    pub pieces: Vec<TerrainPieceDef>,
    #[serde(default)]
    pub patrols: Vec<PatrolDef>,
}

/// A convex piece of static terrain. Point order does not matter.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TerrainPieceDef {
    pub id: String,
    pub layer: TerrainLayerDef,
    pub points: Vec<(f32, f32)>,
}

impl TerrainPieceDef {
    /// Axis-aligned box from its min and max corners.
    pub fn rect(id: &str, layer: TerrainLayerDef, min: (f32, f32), max: (f32, f32)) -> Self {
        Self {
            id: id.to_string(),
            layer,
            points: vec![min, (max.0, min.1), max, (min.0, max.1)],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum TerrainLayerDef {
    Ground,
    Wall,
}

impl From<TerrainLayerDef> for GameLayer {
    fn from(layer: TerrainLayerDef) -> Self {
        match layer {
            TerrainLayerDef::Ground => GameLayer::Ground,
            TerrainLayerDef::Wall => GameLayer::Wall,
        }
    }
}

/// A script-driven actor walking back and forth between `min_x` and `max_x`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PatrolDef {
    pub id: String,
    pub start: (f32, f32),
    pub size: (f32, f32),
    pub min_x: f32,
    pub max_x: f32,
}

impl Default for LevelDef {
    /// Built-in room used when no level file could be loaded.
    fn default() -> Self {
        use TerrainLayerDef::{Ground, Wall};

        Self {
            schema_version: 1,
            id: "level_fallback".to_string(),
            spawn: (-200.0, 0.0),
            body: (24.0, 48.0),
            pieces: vec![
                TerrainPieceDef::rect("floor", Ground, (-420.0, -220.0), (420.0, -180.0)),
                TerrainPieceDef::rect("wall_left", Wall, (-460.0, -220.0), (-420.0, 300.0)),
                TerrainPieceDef::rect("wall_right", Wall, (420.0, -220.0), (460.0, 300.0)),
                TerrainPieceDef {
                    id: "ramp".to_string(),
                    layer: Ground,
                    points: vec![(0.0, -180.0), (200.0, -80.0), (200.0, -180.0)],
                },
                TerrainPieceDef::rect("ledge", Ground, (200.0, -180.0), (420.0, -80.0)),
            ],
            patrols: Vec::new(),
        }
    }
}
