//! Movement domain: tuning shared by kinematic actors.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

/// Designer-facing controller parameters. Fixed per actor once it is spawned.
///
/// Distances are in world units (pixels for the bundled level), times in seconds.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Apex height of a jump held to the top.
    pub max_jump_height: f32,
    /// Height reached when the jump input is released right away.
    pub min_jump_height: f32,
    /// Seconds from takeoff to apex for a full jump.
    pub time_to_apex: f32,
    /// Horizontal top speed.
    pub move_speed: f32,
    /// Collision tolerance kept between the body and terrain.
    pub skin_width: f32,
    pub smoothing_grounded: f32,
    pub smoothing_airborne: f32,
    /// Steepest rise/run still treated as floor or ceiling; anything steeper is a wall.
    pub max_climbable_slope: f32,
    /// Downward displacement forced while glued to a slope.
    pub slope_glue_drop: f32,
    /// Bitmask of layers the body collides with.
    pub terrain_mask: u32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_jump_height: 120.0,
            min_jump_height: 30.0,
            time_to_apex: 0.4,
            move_speed: 320.0,
            skin_width: 0.3,
            smoothing_grounded: 0.05,
            smoothing_airborne: 0.15,
            max_climbable_slope: 1.0,
            slope_glue_drop: 12.0,
            terrain_mask: GameLayer::terrain_mask(),
        }
    }
}

/// Gravity and jump speeds derived from the jump tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpPhysics {
    /// Signed vertical acceleration (negative is down).
    pub gravity: f32,
    pub max_jump_speed: f32,
    pub min_jump_speed: f32,
}

impl JumpPhysics {
    /// `gravity = 2h / t²` pointing down, `v_max = |g| t`, `v_min = sqrt(2 |g| h_min)`.
    pub fn from_tuning(tuning: &MovementTuning) -> Self {
        let apex = tuning.time_to_apex;
        let gravity = -(2.0 * tuning.max_jump_height) / (apex * apex);
        Self {
            gravity,
            max_jump_speed: gravity.abs() * apex,
            min_jump_speed: (2.0 * gravity.abs() * tuning.min_jump_height).sqrt(),
        }
    }
}
