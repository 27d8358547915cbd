//! Projectile domain: firing and reclamation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::{BodyLabel, Level, RunEntity, collision_layers};
use crate::player::{MovementState, PLAYER_TORSO_SIZE, PlayerInput, PlayerTorso};
use crate::projectile::components::{
    PROJECTILE_BOUNDS_MARGIN, PROJECTILE_RADIUS, PROJECTILE_SPEED, Projectile,
};

/// Spawn offset from the torso center along the facing axis.
const MUZZLE_OFFSET: f32 = PLAYER_TORSO_SIZE.x * 0.5 + PROJECTILE_RADIUS + 4.0;

const Z_PROJECTILE: f32 = 6.0;

/// Fire on the press edge: one gravity-free shot at fixed speed along the
/// facing axis. A held key never auto-repeats.
pub(crate) fn fire_projectile(
    mut commands: Commands,
    input: Res<PlayerInput>,
    query: Query<(&Transform, &MovementState), With<PlayerTorso>>,
) {
    if !input.fire_pressed {
        return;
    }

    let Ok((transform, state)) = query.single() else {
        return;
    };

    let dir = state.facing.sign();
    let origin = transform.translation.truncate() + Vec2::new(dir * MUZZLE_OFFSET, 0.0);

    commands.spawn((
        Projectile,
        BodyLabel::Projectile,
        RunEntity,
        Sprite {
            color: Color::srgb(0.95, 0.85, 0.3),
            custom_size: Some(Vec2::splat(PROJECTILE_RADIUS * 2.0)),
            ..default()
        },
        Transform::from_xyz(origin.x, origin.y, Z_PROJECTILE),
        RigidBody::Dynamic,
        Collider::circle(PROJECTILE_RADIUS),
        GravityScale(0.0),
        LinearVelocity(Vec2::new(dir * PROJECTILE_SPEED, 0.0)),
        CollisionEventsEnabled,
        collision_layers(BodyLabel::Projectile),
    ));

    debug!("Projectile fired facing {:?}", state.facing);
}

/// Reclaim shots that left the playfield.
pub(crate) fn despawn_out_of_bounds(
    mut commands: Commands,
    level: Res<Level>,
    query: Query<(Entity, &Transform), With<Projectile>>,
) {
    for (entity, transform) in &query {
        let pos = transform.translation.truncate();
        if pos.x < -PROJECTILE_BOUNDS_MARGIN
            || pos.x > level.length + PROJECTILE_BOUNDS_MARGIN
            || pos.y.abs() > PROJECTILE_BOUNDS_MARGIN * 10.0
        {
            commands.entity(entity).despawn();
        }
    }
}
