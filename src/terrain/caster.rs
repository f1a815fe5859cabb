//! Terrain domain: in-memory shape casts over static convex pieces.

use avian2d::parry::math::{Isometry, Point, Real, Vector};
use avian2d::parry::query::{self, PointQuery, Ray, RayCast, ShapeCastOptions, ShapeCastStatus};
use avian2d::parry::shape::{ConvexPolygon, Cuboid, Shape};
use avian2d::prelude::PhysicsLayer;
use bevy::prelude::*;

use crate::content::LevelDef;
use crate::movement::{CastHit, GameLayer, ShapeCast};

/// Penetration shallower than this counts as touching.
const TOUCH_EPS: f32 = 1.0e-4;

#[derive(Debug, Clone)]
struct Piece {
    shape: ConvexPolygon,
    bounds: Rect,
    layers: u32,
}

/// Static convex terrain that answers shape casts without a physics world.
///
/// Pieces are parry convex polygons placed at the origin. Boxes are swept
/// as cuboids; pieces a box already overlaps at the cast origin are ignored.
/// Rays starting inside a piece hit it at distance zero.
#[derive(Debug, Clone, Default)]
pub struct StaticTerrain {
    pieces: Vec<Piece>,
}

/// Convex hull of `points`, or `None` when it has no area.
pub(crate) fn convex_piece(points: impl IntoIterator<Item = Vec2>) -> Option<ConvexPolygon> {
    let points: Vec<Point<Real>> = points
        .into_iter()
        .map(|p| p.is_finite().then(|| Point::new(p.x, p.y)))
        .collect::<Option<_>>()?;
    if points.len() < 3 {
        return None;
    }
    ConvexPolygon::from_convex_hull(&points).filter(|polygon| polygon.points().len() >= 3)
}

fn to_vec2(v: Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

impl StaticTerrain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_level(level: &LevelDef) -> Self {
        level.pieces.iter().fold(Self::new(), |terrain, piece| {
            terrain.with_piece(
                piece.points.iter().map(|&p| Vec2::from(p)),
                GameLayer::from(piece.layer),
            )
        })
    }

    /// Add a convex piece; the hull of `points` is used. Degenerate pieces are skipped.
    pub fn with_piece(mut self, points: impl IntoIterator<Item = Vec2>, layer: GameLayer) -> Self {
        let Some(shape) = convex_piece(points) else {
            return self;
        };

        let aabb = shape.compute_local_aabb();
        self.pieces.push(Piece {
            bounds: Rect::from_corners(to_vec2(aabb.mins.coords), to_vec2(aabb.maxs.coords)),
            shape,
            layers: layer.to_bits(),
        });
        self
    }

    /// Axis-aligned box piece from its min and max corners.
    pub fn with_rect(self, min: Vec2, max: Vec2, layer: GameLayer) -> Self {
        self.with_piece(
            [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)],
            layer,
        )
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Whether a box of `size` centered at `center` overlaps any piece on `mask`.
    /// Touching does not count.
    pub fn overlaps(&self, center: Vec2, size: Vec2, mask: u32) -> bool {
        let half = size.max(Vec2::ZERO) * 0.5;
        self.pieces
            .iter()
            .filter(|piece| piece.layers & mask != 0)
            .any(|piece| {
                if half.cmple(Vec2::ZERO).any() {
                    // Negative inside the outline.
                    let point = Point::new(center.x, center.y);
                    piece.shape.distance_to_local_point(&point, false) < -TOUCH_EPS
                } else {
                    penetration(&piece.shape, center, half) > TOUCH_EPS
                }
            })
    }
}

/// Depth a box at `center` is sunk into `shape`, zero when apart or touching.
fn penetration(shape: &ConvexPolygon, center: Vec2, half: Vec2) -> f32 {
    let cuboid = Cuboid::new(Vector::new(half.x, half.y));
    query::contact(
        &Isometry::translation(center.x, center.y),
        &cuboid,
        &Isometry::identity(),
        shape,
        0.0,
    )
    .ok()
    .flatten()
    .map_or(0.0, |contact| (-contact.dist).max(0.0))
}

fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.min.x <= b.max.x && b.min.x <= a.max.x && a.min.y <= b.max.y && b.min.y <= a.max.y
}

impl ShapeCast for StaticTerrain {
    fn cast(
        &self,
        center: Vec2,
        size: Vec2,
        displacement: Vec2,
        max_distance: f32,
        mask: u32,
    ) -> Option<CastHit> {
        let direction = displacement.try_normalize()?;
        if !(max_distance > 0.0) {
            return None;
        }

        let is_ray = size.x <= 0.0 || size.y <= 0.0;
        let half = if is_ray { Vec2::ZERO } else { size * 0.5 };
        let swept = Rect::from_center_half_size(center, half)
            .union(Rect::from_center_half_size(center + direction * max_distance, half));

        let origin = Isometry::translation(center.x, center.y);
        let velocity = Vector::new(direction.x, direction.y);
        let cuboid = Cuboid::new(Vector::new(half.x, half.y));
        let ray = Ray::new(Point::new(center.x, center.y), velocity);

        let mut best: Option<CastHit> = None;
        for piece in &self.pieces {
            if piece.layers & mask == 0 || !rects_overlap(piece.bounds, swept) {
                continue;
            }

            let (distance, normal) = if is_ray {
                if piece.shape.contains_local_point(&ray.origin) {
                    (0.0, -direction)
                } else {
                    let Some(hit) =
                        piece.shape.cast_local_ray_and_get_normal(&ray, max_distance, true)
                    else {
                        continue;
                    };
                    (hit.time_of_impact, to_vec2(hit.normal))
                }
            } else {
                let mut options = ShapeCastOptions::with_max_time_of_impact(max_distance);
                options.stop_at_penetration = false;
                let Ok(Some(hit)) = query::cast_shapes(
                    &origin,
                    &velocity,
                    &cuboid as &dyn Shape,
                    &Isometry::identity(),
                    &Vector::zeros(),
                    &piece.shape as &dyn Shape,
                    options,
                ) else {
                    continue;
                };
                if matches!(hit.status, ShapeCastStatus::PenetratingOrWithinTargetDist)
                    && penetration(&piece.shape, center, half) > TOUCH_EPS
                {
                    continue;
                }
                // normal2 lies on the terrain piece and points out toward the box.
                (hit.time_of_impact, to_vec2(hit.normal2.into_inner()))
            };

            if best.is_none_or(|b| distance < b.distance) {
                best = Some(CastHit {
                    centroid: center + direction * distance,
                    normal,
                    distance,
                });
            }
        }
        best
    }
}
