//! Player domain: spawning the torso + head composite.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::{BodyLabel, Level, RunEntity, collision_layers};
use crate::player::components::{MovementState, Player, PlayerHead, PlayerTorso};

/// Torso collider extents.
pub const PLAYER_TORSO_SIZE: Vec2 = Vec2::new(28.0, 44.0);
/// Head collider radius.
pub const PLAYER_HEAD_RADIUS: f32 = 10.0;
/// Head rest offset above the torso center.
const NECK_OFFSET: f32 = PLAYER_TORSO_SIZE.y * 0.5 + PLAYER_HEAD_RADIUS;

/// Depth of the player quads.
const Z_PLAYER: f32 = 5.0;

/// Spawn the player composite at the level's spawn point: a rotation-locked
/// torso, a head, and a stiff zero-rest-length neck joint holding the head at
/// its rest offset. The shared collision layer setup keeps the two parts from
/// ever colliding with each other.
pub(crate) fn spawn_player(mut commands: Commands, level: Res<Level>) {
    let spawn = Vec2::new(level.player_spawn.0, level.player_spawn.1);

    let torso = commands
        .spawn((
            Player,
            PlayerTorso,
            BodyLabel::PlayerTorso,
            MovementState::default(),
            RunEntity,
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_TORSO_SIZE),
                ..default()
            },
            Transform::from_xyz(spawn.x, spawn.y, Z_PLAYER),
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_TORSO_SIZE.x, PLAYER_TORSO_SIZE.y),
            // Upright-only posture; the torso never tips.
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            collision_layers(BodyLabel::PlayerTorso),
        ))
        .id();

    let head = commands
        .spawn((
            Player,
            PlayerHead,
            BodyLabel::PlayerHead,
            RunEntity,
            Sprite {
                color: Color::srgb(0.95, 0.9, 0.8),
                custom_size: Some(Vec2::splat(PLAYER_HEAD_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_xyz(spawn.x, spawn.y + NECK_OFFSET, Z_PLAYER),
            RigidBody::Dynamic,
            Collider::circle(PLAYER_HEAD_RADIUS),
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            collision_layers(BodyLabel::PlayerHead),
        ))
        .id();

    commands.spawn((
        RunEntity,
        DistanceJoint::new(torso, head)
            .with_local_anchor1(Vec2::new(0.0, NECK_OFFSET))
            .with_rest_length(0.0)
            .with_compliance(0.0001),
        // avian 0.5 moved joint velocity damping from a `DistanceJoint` builder
        // method to the separate `JointDamping` component; linear velocity
        // damping of 10.0 preserved verbatim, angular left unset (0.0).
        JointDamping {
            linear: 10.0,
            angular: 0.0,
        },
    ));

    info!("Player spawned at ({}, {})", spawn.x, spawn.y);
}
