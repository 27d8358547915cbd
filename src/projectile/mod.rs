//! Projectile domain: player shots and their lifecycle.

mod components;
mod systems;

pub use components::{PROJECTILE_RADIUS, PROJECTILE_SPEED, Projectile};

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::PlayerControlSet;
use crate::projectile::systems::{despawn_out_of_bounds, fire_projectile};

pub struct ProjectilePlugin;

impl Plugin for ProjectilePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (fire_projectile, despawn_out_of_bounds)
                .after(PlayerControlSet)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
