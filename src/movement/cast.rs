//! Movement domain: shape casts against the avian2d physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::resolver::{CastHit, ShapeCast};

/// [`ShapeCast`] backed by avian's spatial query pipeline.
pub struct SpatialCaster<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
}

impl<'a, 'w, 's> SpatialCaster<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>) -> Self {
        Self { spatial_query }
    }
}

impl ShapeCast for SpatialCaster<'_, '_, '_> {
    fn cast(
        &self,
        center: Vec2,
        size: Vec2,
        displacement: Vec2,
        max_distance: f32,
        mask: u32,
    ) -> Option<CastHit> {
        let (direction, _) = Dir2::new_and_length(displacement).ok()?;
        let filter = SpatialQueryFilter::from_mask(LayerMask(mask));

        if size.x <= 0.0 || size.y <= 0.0 {
            let hit = self
                .spatial_query
                .cast_ray(center, direction, max_distance, true, &filter)?;
            return Some(CastHit {
                centroid: center + *direction * hit.distance,
                normal: hit.normal,
                distance: hit.distance,
            });
        }

        let shape = Collider::rectangle(size.x, size.y);
        let config = ShapeCastConfig {
            ignore_origin_penetration: true,
            ..ShapeCastConfig::from_max_distance(max_distance)
        };
        let hit = self
            .spatial_query
            .cast_shape(&shape, center, 0.0, direction, &config, &filter)?;

        Some(CastHit {
            centroid: center + *direction * hit.distance,
            normal: hit.normal1,
            distance: hit.distance,
        })
    }
}
