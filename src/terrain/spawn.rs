//! Terrain domain: spawning static colliders from level data.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::caster::convex_piece;
use crate::content::{LevelDef, TerrainLayerDef};
use crate::movement::GameLayer;

/// A spawned piece of static terrain and its outline for drawing.
#[derive(Component, Debug, Clone)]
pub struct TerrainPiece {
    pub id: String,
    pub layer: TerrainLayerDef,
    pub outline: Vec<Vec2>,
}

pub(crate) fn spawn_level_terrain(mut commands: Commands, level: Res<LevelDef>) {
    let mut spawned = 0;

    for piece in &level.pieces {
        let Some(polygon) = convex_piece(piece.points.iter().map(|&p| Vec2::from(p))) else {
            warn!("Terrain piece '{}' is degenerate, skipping", piece.id);
            continue;
        };
        let outline: Vec<Vec2> = polygon.points().iter().map(|p| Vec2::new(p.x, p.y)).collect();
        let Some(collider) = Collider::convex_hull(outline.clone()) else {
            warn!("Terrain piece '{}' has no collider hull, skipping", piece.id);
            continue;
        };

        commands.spawn((
            TerrainPiece {
                id: piece.id.clone(),
                layer: piece.layer,
                outline,
            },
            Transform::default(),
            RigidBody::Static,
            collider,
            CollisionLayers::new(GameLayer::from(piece.layer), LayerMask::ALL),
        ));
        spawned += 1;
    }

    info!("Spawned {} terrain pieces for level '{}'", spawned, level.id);
}

pub(crate) fn draw_terrain(mut gizmos: Gizmos, pieces: Query<&TerrainPiece>) {
    for piece in &pieces {
        let color = match piece.layer {
            TerrainLayerDef::Ground => Color::srgb(0.4, 0.5, 0.4),
            TerrainLayerDef::Wall => Color::srgb(0.3, 0.3, 0.4),
        };
        let closed = piece.outline.iter().chain(piece.outline.first()).copied();
        gizmos.linestrip_2d(closed, color);
    }
}
