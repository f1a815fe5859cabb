//! Movement domain: collision resolution for kinematic bodies.
//!
//! A frame's desired displacement is swept through the terrain with a
//! skin-shrunk box. Every hit clips the displacement per axis, classifies the
//! surface as floor, ceiling or wall by its slope, and zeroes the velocity
//! component the surface absorbed. The clipped displacement is cast again
//! from the same bounds until nothing is hit or the iteration cap runs out.

use bevy::prelude::*;

use crate::movement::{MotionState, MovementTuning};

/// Upper bound on casts per frame. A body wedged in geometry stops correcting here.
pub const MAX_CLIP_ITERATIONS: usize = 10;

/// Squared displacement below which no cast is issued.
pub const MIN_CAST_DISTANCE_SQ: f32 = 1.0e-10;

/// Normals with less vertical component than this are treated as vertical.
const VERTICAL_NORMAL_EPS: f32 = 1.0e-6;

/// Nearest hit of a shape cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastHit {
    /// Center of the cast shape at the moment of impact.
    pub centroid: Vec2,
    /// Surface normal pointing away from the hit surface.
    pub normal: Vec2,
    /// Distance travelled along the cast direction before impact.
    pub distance: f32,
}

/// Sweeps an axis-aligned box through static terrain.
///
/// `displacement` gives the direction and need not be normalized. A zero
/// `size` casts a ray. Implementations must be free of side effects since the
/// resolver calls them repeatedly within one frame.
pub trait ShapeCast {
    fn cast(
        &self,
        center: Vec2,
        size: Vec2,
        displacement: Vec2,
        max_distance: f32,
        mask: u32,
    ) -> Option<CastHit>;
}

impl<T: ShapeCast + ?Sized> ShapeCast for &T {
    fn cast(
        &self,
        center: Vec2,
        size: Vec2,
        displacement: Vec2,
        max_distance: f32,
        mask: u32,
    ) -> Option<CastHit> {
        (**self).cast(center, size, displacement, max_distance, mask)
    }
}

/// Rise/run of a surface from its normal. Vertical surfaces report an infinite slope.
pub fn surface_slope(normal: Vec2) -> f32 {
    if normal.y.abs() < VERTICAL_NORMAL_EPS {
        if normal.x < 0.0 {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        }
    } else {
        normal.x / normal.y
    }
}

/// Sign of `value`, with zero mapping to zero.
fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Turn `displacement` into a collision-free one for a body with `bounds`.
///
/// Resets the frame's contact flags (keeping last frame's as memory), glues a
/// previously grounded body to the slope under it, then runs the clip loop.
/// `glue_probe` is how far below the body the slope glue looks for ground.
pub fn resolve_collisions<C: ShapeCast + ?Sized>(
    caster: &C,
    bounds: Rect,
    displacement: Vec2,
    glue_probe: f32,
    state: &mut MotionState,
    tuning: &MovementTuning,
) -> Vec2 {
    state.contacts.begin_frame();

    let bounds = bounds.inflate(-tuning.skin_width);
    let displacement = glue_to_slope(caster, bounds, displacement, glue_probe, state, tuning);
    clip_displacement(caster, bounds, displacement, state, tuning)
}

/// Keep a body that was grounded last frame from going airborne on a descending slope.
/// Skipped while the body is jumping or moving up.
fn glue_to_slope<C: ShapeCast + ?Sized>(
    caster: &C,
    bounds: Rect,
    mut displacement: Vec2,
    probe: f32,
    state: &MotionState,
    tuning: &MovementTuning,
) -> Vec2 {
    let contacts = &state.contacts;
    // A jump cut in its first frame is no longer `jumping` but still rising.
    if !contacts.was_grounded() || contacts.jumping || state.velocity.y > 0.0 {
        return displacement;
    }

    let leading = if displacement.x != 0.0 {
        sign(displacement.x)
    } else {
        sign(contacts.previous.ground_slope)
    };
    let origin_x = match leading {
        l if l > 0.0 => bounds.max.x,
        l if l < 0.0 => bounds.min.x,
        _ => bounds.center().x,
    };
    let origin = Vec2::new(origin_x, bounds.min.y);

    if caster
        .cast(origin, Vec2::ZERO, Vec2::NEG_Y * probe, probe, tuning.terrain_mask)
        .is_some()
    {
        displacement.y = -tuning.slope_glue_drop;
    }
    displacement
}

fn clip_displacement<C: ShapeCast + ?Sized>(
    caster: &C,
    bounds: Rect,
    mut displacement: Vec2,
    state: &mut MotionState,
    tuning: &MovementTuning,
) -> Vec2 {
    let center = bounds.center();
    let size = bounds.size();
    let skin = tuning.skin_width;

    for iteration in 0..MAX_CLIP_ITERATIONS {
        if displacement.length_squared() <= MIN_CAST_DISTANCE_SQ {
            return displacement;
        }

        let Some(hit) = caster.cast(
            center,
            size,
            displacement,
            displacement.length(),
            tuning.terrain_mask,
        ) else {
            return displacement;
        };

        let distance_to_hit = hit.centroid - center;
        let mut distance_after_hit = displacement - distance_to_hit;
        let slope = surface_slope(hit.normal);
        let velocity = &mut state.velocity;
        let contacts = &mut state.contacts.current;

        if slope.abs() <= tuning.max_climbable_slope {
            let floor = hit.normal.y > 0.0;

            // A floor and a ceiling in the same frame: stop horizontally first,
            // otherwise the slope correction can push through the other surface.
            let opposing = if floor {
                contacts.ceiling
            } else {
                contacts.grounded
            };
            if opposing {
                displacement.x = distance_to_hit.x + skin * sign(hit.normal.x);
                distance_after_hit = displacement - distance_to_hit;
            }

            displacement.y =
                distance_to_hit.y + distance_after_hit.x * -slope + skin * sign(hit.normal.y);

            if floor {
                velocity.y = 0.0;
                contacts.grounded = true;
                contacts.ground_slope = slope;
            } else {
                contacts.ceiling = true;
                contacts.ground_slope = slope;
                if velocity.y > 0.0 {
                    velocity.y = 0.0;
                }
            }

            trace!(
                "Clip #{iteration}: {} slope={slope} -> {displacement}",
                if floor { "floor" } else { "ceiling" }
            );
        } else {
            // Walls override the slope climb applied by an earlier floor hit.
            if contacts.grounded {
                displacement.y -= distance_after_hit.x * -contacts.ground_slope;
                distance_after_hit = displacement - distance_to_hit;
            }

            if hit.normal.x > 0.0 {
                contacts.left = true;
            } else {
                contacts.right = true;
            }

            if contacts.pinched() {
                displacement.y = distance_to_hit.y - skin * sign(distance_to_hit.y);
                if velocity.y < 0.0 {
                    velocity.y = 0.0;
                    contacts.grounded = true;
                }
            }

            let climb = if slope.is_finite() {
                distance_after_hit.y / -slope
            } else {
                0.0
            };
            displacement.x = distance_to_hit.x + climb + skin * sign(hit.normal.x);
            velocity.x = 0.0;

            trace!("Clip #{iteration}: wall slope={slope} -> {displacement}");
        }
    }

    debug!(
        "Clip loop hit the {} iteration cap, keeping {}",
        MAX_CLIP_ITERATIONS, displacement
    );
    displacement
}
