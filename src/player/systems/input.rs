//! Player domain: input sampling into the per-tick resolved state.

use bevy::prelude::*;

use crate::player::PlayerInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    // Horizontal axis; opposite keys cancel out.
    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }
    input.axis = axis;

    // Edge-triggered actions: a held key cannot re-trigger.
    input.jump_pressed = keyboard.just_pressed(KeyCode::Space)
        || keyboard.just_pressed(KeyCode::KeyW)
        || keyboard.just_pressed(KeyCode::ArrowUp);
    input.fire_pressed =
        keyboard.just_pressed(KeyCode::KeyJ) || keyboard.just_pressed(KeyCode::KeyX);
}
