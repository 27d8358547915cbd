//! Player domain: ground detection via a short downward ray.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::GameLayer;
use crate::player::components::{MovementState, PlayerTorso};
use crate::player::spawn::PLAYER_TORSO_SIZE;

/// Extra reach past the proportional ray length, in world units.
const GROUND_RAY_SLACK: f32 = 10.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<PlayerTorso>>,
) {
    // Only real footing qualifies: monsters, sensors, boundaries and the
    // player's own parts live on other layers and can never ground us.
    let footing_filter =
        SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall, GameLayer::Hazard]);

    for (transform, collider, mut state) in &mut query {
        let torso_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y * 2.0,
            None => PLAYER_TORSO_SIZE.y,
        };

        let ray_origin = transform.translation.truncate();
        let ray_distance = torso_height * 0.35 + GROUND_RAY_SLACK;

        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            ray_distance,
            true,
            &footing_filter,
        );

        let was_on_ground = state.on_ground;
        state.on_ground = hit.is_some();

        if state.on_ground != was_on_ground {
            debug!("grounded: {}", state.on_ground);
        }
    }
}
