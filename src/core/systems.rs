//! Core domain: run flow systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::{LevelClearedEvent, PlayerKilledEvent};
use crate::core::resources::SimClock;
use crate::core::state::GameState;

pub(crate) fn advance_sim_clock(time: Res<Time>, mut clock: ResMut<SimClock>) {
    clock.advance(time.delta_secs());
}

pub(crate) fn reset_sim_clock(mut clock: ResMut<SimClock>) {
    *clock = SimClock::default();
}

/// Apply at most one terminal transition per run.
///
/// Both message streams are drained every frame; once the run has left
/// `Playing`, anything still arriving is discarded. When a death and a goal
/// touch land on the same tick, the death wins.
pub(crate) fn handle_run_end(
    mut killed: MessageReader<PlayerKilledEvent>,
    mut cleared: MessageReader<LevelClearedEvent>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if *state.get() != GameState::Playing {
        killed.clear();
        cleared.clear();
        return;
    }

    if let Some(event) = killed.read().next() {
        info!("Run over: {:?}", event.cause);
        next_state.set(GameState::GameOver);
    } else if cleared.read().next().is_some() {
        info!("Level cleared");
        next_state.set(GameState::Won);
    }

    killed.clear();
    cleared.clear();
}

/// Restart from a terminal state. Re-entering `Playing` rebuilds the world
/// from scratch; there is no incremental reset.
pub(crate) fn handle_restart_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if *state.get() == GameState::Playing {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyR) || keyboard.just_pressed(KeyCode::Enter) {
        info!("Restarting run");
        next_state.set(GameState::Playing);
    }
}

/// Freeze the physics clock when a run ends so the final scene holds still
/// behind the overlay.
pub(crate) fn pause_physics(mut time: ResMut<Time<Physics>>) {
    time.pause();
}

pub(crate) fn resume_physics(mut time: ResMut<Time<Physics>>) {
    time.unpause();
}
