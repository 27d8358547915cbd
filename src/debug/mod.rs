//! Debug tooling for fast iteration: a diagnostics overlay, live jump
//! tuning, and frame snapshot dumps. Compiled only with the `dev-tools`
//! feature.

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{
    adjust_jump_strength, dump_snapshot, tally_slain_monsters, toggle_overlay, update_overlay,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_overlay,
                update_overlay,
                adjust_jump_strength,
                dump_snapshot,
                tally_slain_monsters,
            ),
        );
    }
}
