//! Core domain: run state, simulation clock, and restart flow.

mod events;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{DeathCause, LevelClearedEvent, MonsterSlainEvent, PlayerKilledEvent};
pub use resources::{ScoreBoard, SimClock};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    advance_sim_clock, handle_restart_input, handle_run_end, pause_physics, reset_sim_clock,
    resume_physics,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SimClock>()
            .init_resource::<ScoreBoard>()
            .add_message::<PlayerKilledEvent>()
            .add_message::<LevelClearedEvent>()
            .add_message::<MonsterSlainEvent>()
            .add_systems(
                Update,
                advance_sim_clock.run_if(in_state(GameState::Playing)),
            )
            .add_systems(Update, (handle_run_end, handle_restart_input))
            .add_systems(OnEnter(GameState::Playing), (reset_sim_clock, resume_physics))
            .add_systems(OnEnter(GameState::GameOver), pause_physics)
            .add_systems(OnEnter(GameState::Won), pause_physics);
    }
}
