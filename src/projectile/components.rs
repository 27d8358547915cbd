//! Projectile domain: components and tuning constants.

use bevy::prelude::*;

/// Marker for in-flight player shots.
#[derive(Component, Debug)]
pub struct Projectile;

/// Muzzle speed, world units per second.
pub const PROJECTILE_SPEED: f32 = 540.0;
/// Collider radius of a shot.
pub const PROJECTILE_RADIUS: f32 = 6.0;
/// How far past the level edges a shot may travel before it is reclaimed.
pub const PROJECTILE_BOUNDS_MARGIN: f32 = 200.0;
