//! Contact domain: collision pair classification and resolution.

mod classify;
mod systems;

#[cfg(test)]
mod tests;

pub use classify::{ContactClass, TerminalKind, classify};

use bevy::prelude::*;

use crate::core::GameState;
use crate::contact::systems::{drain_stale_contacts, resolve_contacts};

pub struct ContactPlugin;

impl Plugin for ContactPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), drain_stale_contacts)
            .add_systems(
                Update,
                resolve_contacts.run_if(in_state(GameState::Playing)),
            );
    }
}
