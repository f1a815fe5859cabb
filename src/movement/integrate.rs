//! Movement domain: velocity integration around the collision pass.
//!
//! Gravity is applied in two half steps that straddle collision resolution,
//! which keeps the rising and falling halves of a jump arc symmetric.

use bevy::prelude::*;

use crate::movement::ContactState;

pub fn apply_gravity_half_step(velocity: &mut Vec2, gravity: f32, dt: f32) {
    velocity.y += gravity / 2.0 * dt;
}

/// Damp horizontal velocity toward `input_x * target_speed`.
///
/// Uses the grounded time constant while standing and the airborne one otherwise.
#[allow(clippy::too_many_arguments)]
pub fn apply_horizontal_input(
    velocity: &mut Vec2,
    smoothing: &mut f32,
    input_x: f32,
    target_speed: f32,
    smoothing_grounded: f32,
    smoothing_airborne: f32,
    grounded: bool,
    dt: f32,
) {
    let target = input_x.clamp(-1.0, 1.0) * target_speed;
    let smooth_time = if grounded {
        smoothing_grounded
    } else {
        smoothing_airborne
    };
    velocity.x = smooth_damp(velocity.x, target, smoothing, smooth_time, dt);
}

/// Start a jump from the ground, and cut it short when the input is released.
pub fn apply_jump(
    velocity: &mut Vec2,
    state: &mut ContactState,
    jump_held: bool,
    jump_pressed: bool,
    max_jump_speed: f32,
    min_jump_speed: f32,
) {
    if jump_pressed && state.grounded() && !state.jumping {
        velocity.y = max_jump_speed;
        state.jumping = true;
        debug!("Jump: vy={}", velocity.y);
    }

    if !state.jumping {
        return;
    }

    if !jump_held {
        if velocity.y > min_jump_speed {
            velocity.y = min_jump_speed;
            debug!("Jump cut: vy={}", velocity.y);
        }
        state.jumping = false;
    } else if velocity.y <= 0.0 {
        state.jumping = false;
    }
}

/// Critically damped spring toward `target`.
///
/// Approximates `exp(-omega * dt)` with a cubic so the approach never
/// oscillates; an output that would cross the target is pinned to it.
pub fn smooth_damp(current: f32, target: f32, rate: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if smooth_time <= 0.0 || dt <= 0.0 {
        *rate = 0.0;
        return target;
    }

    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*rate + omega * change) * dt;
    *rate = (*rate - omega * temp) * decay;
    let output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        *rate = 0.0;
        return target;
    }
    output
}
