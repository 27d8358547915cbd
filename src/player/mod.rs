//! Player domain: the two-body composite, resolved input, and locomotion.

mod components;
mod resources;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Facing, MovementState, Player, PlayerHead, PlayerTorso};
pub use resources::{JUMP_STRENGTH_MAX, JUMP_STRENGTH_MIN, MovementTuning, PlayerInput};
pub use spawn::{PLAYER_HEAD_RADIUS, PLAYER_TORSO_SIZE};

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::spawn::spawn_player;
use crate::player::systems::{
    apply_horizontal_movement, apply_jump, detect_ground, read_input, update_facing,
};

/// Set containing input resolution and the controller. Systems that consume
/// the resolved input (firing, for one) order themselves after this.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerControlSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<PlayerInput>()
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(
                Update,
                (
                    read_input,
                    detect_ground,
                    apply_horizontal_movement,
                    apply_jump,
                    update_facing,
                )
                    .chain()
                    .in_set(PlayerControlSet)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
