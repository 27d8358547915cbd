//! UI domain: the thin presentation layer over simulation output.

mod hud;
mod overlay;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud::{spawn_hud, update_hud};
use crate::ui::overlay::{cleanup_overlay, spawn_game_over_overlay, spawn_victory_overlay};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, update_hud)
            .add_systems(OnEnter(GameState::GameOver), spawn_game_over_overlay)
            .add_systems(OnExit(GameState::GameOver), cleanup_overlay)
            .add_systems(OnEnter(GameState::Won), spawn_victory_overlay)
            .add_systems(OnExit(GameState::Won), cleanup_overlay);
    }
}
