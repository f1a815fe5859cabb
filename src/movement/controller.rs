//! Movement domain: the per-actor kinematic controller.

use bevy::prelude::*;

use crate::movement::integrate::{apply_gravity_half_step, apply_horizontal_input, apply_jump};
use crate::movement::resolver::{ShapeCast, resolve_collisions};
use crate::movement::{Body, ConfigError, JumpPhysics, MotionState, MovementInput, MovementTuning};

/// Moves one body through static terrain.
///
/// Built once at spawn from a body and its tuning; the mutable side lives in
/// [`MotionState`] so a step is a plain function of state, input and time.
#[derive(Component, Debug, Clone)]
pub struct KinematicController {
    body: Body,
    tuning: MovementTuning,
    jump: JumpPhysics,
}

impl KinematicController {
    pub fn new(body: Body, tuning: MovementTuning) -> Result<Self, ConfigError> {
        validate(&body, &tuning)?;
        let jump = JumpPhysics::from_tuning(&tuning);
        Ok(Self { body, tuning, jump })
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn jump(&self) -> &JumpPhysics {
        &self.jump
    }

    /// Advance `state` by `dt` seconds and return the displacement to apply
    /// to the body centered at `position`.
    pub fn step<C: ShapeCast + ?Sized>(
        &self,
        state: &mut MotionState,
        position: Vec2,
        input: &MovementInput,
        dt: f32,
        caster: &C,
    ) -> Vec2 {
        if !(dt > 0.0) {
            return Vec2::ZERO;
        }
        let tuning = &self.tuning;

        apply_gravity_half_step(&mut state.velocity, self.jump.gravity, dt);
        apply_horizontal_input(
            &mut state.velocity,
            &mut state.smoothing,
            input.axis.x,
            tuning.move_speed,
            tuning.smoothing_grounded,
            tuning.smoothing_airborne,
            state.contacts.grounded(),
            dt,
        );
        apply_jump(
            &mut state.velocity,
            &mut state.contacts,
            input.jump_held,
            input.jump_pressed,
            self.jump.max_jump_speed,
            self.jump.min_jump_speed,
        );

        let desired = state.velocity * dt;
        let glue_probe = self.body.size.y + tuning.skin_width;
        let displacement = resolve_collisions(
            caster,
            self.body.bounds(position),
            desired,
            glue_probe,
            state,
            tuning,
        );

        apply_gravity_half_step(&mut state.velocity, self.jump.gravity, dt);
        displacement
    }
}

fn validate(body: &Body, tuning: &MovementTuning) -> Result<(), ConfigError> {
    let Vec2 {
        x: width,
        y: height,
    } = body.size;
    if !(width > 0.0 && height > 0.0) {
        return Err(ConfigError::InvalidBody { width, height });
    }

    let limit = width.min(height) / 2.0;
    if !(tuning.skin_width >= 0.0 && tuning.skin_width < limit) {
        return Err(ConfigError::SkinTooWide {
            skin: tuning.skin_width,
            limit,
        });
    }

    if !(tuning.time_to_apex > 0.0) {
        return Err(ConfigError::InvalidApexTime(tuning.time_to_apex));
    }

    let (min, max) = (tuning.min_jump_height, tuning.max_jump_height);
    if !(max > 0.0 && min >= 0.0 && min <= max) {
        return Err(ConfigError::InvalidJumpHeights { min, max });
    }

    for (name, value) in [
        ("move_speed", tuning.move_speed),
        ("smoothing_grounded", tuning.smoothing_grounded),
        ("smoothing_airborne", tuning.smoothing_airborne),
        ("max_climbable_slope", tuning.max_climbable_slope),
        ("slope_glue_drop", tuning.slope_glue_drop),
    ] {
        if !(value >= 0.0) {
            return Err(ConfigError::Negative { name, value });
        }
    }

    Ok(())
}
