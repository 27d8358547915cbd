//! Monsters domain: scripted NPC motion and the kinematic ferry platform.

mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Monster, MonsterAi, MonsterKind, PlatformDrive};

use bevy::prelude::*;

use crate::core::GameState;
use crate::monsters::systems::{drive_flying, drive_moving_platforms, drive_patrol};

pub struct MonstersPlugin;

impl Plugin for MonstersPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (drive_patrol, drive_flying, drive_moving_platforms)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
