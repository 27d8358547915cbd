//! Core domain: run state definitions.

use bevy::prelude::*;
use serde::Serialize;

/// Top-level run state.
///
/// Transitions out of `Playing` are requested only by systems that run while
/// `Playing`, so a run reaches a terminal state at most once; terminal states
/// are left only through the restart flow.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default, Serialize)]
pub enum GameState {
    #[default]
    Playing,
    GameOver,
    Won,
}
