//! Level domain: layout data, the world builder, and run lifecycle.

mod components;
mod data;
mod loader;
mod plan;
mod spawn;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, RunEntity, collision_layers};
pub use data::{BlockSpec, BodyLabel, GroundSpan, Level, MonsterSpec, MovingPlatformSpec};
pub use loader::{LevelLoadError, load_level};
pub use plan::{BodySpec, Motion, build_plan, hover_phases, tile_span};

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::loader::setup_level;
use crate::level::spawn::{cleanup_run, spawn_level};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_level)
            .add_systems(OnEnter(GameState::Playing), spawn_level)
            .add_systems(OnExit(GameState::GameOver), cleanup_run)
            .add_systems(OnExit(GameState::Won), cleanup_run);
    }
}
