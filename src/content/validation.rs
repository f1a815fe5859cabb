//! Validation for level data before it is spawned.

use bevy::prelude::*;

use super::data::*;
use crate::movement::MovementTuning;
use crate::terrain::StaticTerrain;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}': {}", self.source_type, self.source_id, self.problem)
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $cond:expr, $source_type:expr, $source_id:expr, $($problem:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                problem: format!($($problem)+),
            });
        }
    };
}

/// Validate a level against the tuning its actors will use.
/// Returns a list of validation errors, empty if the level is usable.
pub fn validate_level(level: &LevelDef, tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Validate terrain pieces
    for piece in &level.pieces {
        let points: Vec<Vec2> = piece.points.iter().map(|&p| Vec2::from(p)).collect();
        check!(
            errors,
            points.iter().all(|p| p.is_finite()),
            "TerrainPiece",
            &piece.id,
            "points must be finite"
        );
        check!(
            errors,
            StaticTerrain::new()
                .with_piece(points, piece.layer.into())
                .len()
                == 1,
            "TerrainPiece",
            &piece.id,
            "needs at least three non-collinear points"
        );
    }

    let terrain = StaticTerrain::from_level(level);

    // Validate the player spawn
    let body = Vec2::from(level.body);
    check!(
        errors,
        body.x > 0.0 && body.y > 0.0,
        "Level",
        &level.id,
        "body size must be positive, got {}x{}",
        body.x,
        body.y
    );
    check!(
        errors,
        !terrain.overlaps(level.spawn.into(), shrunk(body, tuning), tuning.terrain_mask),
        "Level",
        &level.id,
        "player spawns inside terrain at {:?}",
        level.spawn
    );

    // Validate patrols
    for patrol in &level.patrols {
        check!(
            errors,
            patrol.min_x < patrol.max_x,
            "Patrol",
            &patrol.id,
            "min_x {} must be below max_x {}",
            patrol.min_x,
            patrol.max_x
        );
        check!(
            errors,
            !terrain.overlaps(
                patrol.start.into(),
                shrunk(patrol.size.into(), tuning),
                tuning.terrain_mask
            ),
            "Patrol",
            &patrol.id,
            "starts inside terrain at {:?}",
            patrol.start
        );
    }

    errors
}

/// Collision size of a body once the skin is taken off.
fn shrunk(size: Vec2, tuning: &MovementTuning) -> Vec2 {
    (size - Vec2::splat(2.0 * tuning.skin_width)).max(Vec2::ZERO)
}
