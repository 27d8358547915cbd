//! Player domain: locomotion systems for horizontal motion, jumping and facing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::components::{Facing, MovementState, PlayerTorso};
use crate::player::resources::{MovementTuning, PlayerInput};

/// One integration step of the horizontal rule: accelerate toward intent,
/// brake residual speed, stop dead inside the dead-band while grounded, then
/// clamp to the active cap.
pub(crate) fn step_horizontal(
    vx: f32,
    axis: f32,
    on_ground: bool,
    tuning: &MovementTuning,
    dt: f32,
) -> f32 {
    let cap = if on_ground {
        tuning.ground_speed_cap
    } else {
        tuning.air_speed_cap
    };

    let next = if axis != 0.0 {
        let accel = if on_ground {
            tuning.ground_accel
        } else {
            tuning.air_accel
        };
        vx + axis * accel * dt
    } else if vx.abs() > tuning.speed_dead_band {
        let decel = tuning.brake_decel * dt;
        if vx > 0.0 {
            (vx - decel).max(0.0)
        } else {
            (vx + decel).min(0.0)
        }
    } else if on_ground {
        0.0
    } else {
        vx
    };

    next.clamp(-cap, cap)
}

pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<PlayerInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<PlayerTorso>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        velocity.x = step_horizontal(velocity.x, input.axis, state.on_ground, &tuning, dt);
    }
}

/// Jump on the press edge while grounded: vertical velocity is overwritten to
/// the configured strength, horizontal velocity untouched. Airborne edges are
/// refused; there is no double jump.
pub(crate) fn apply_jump(
    input: Res<PlayerInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<PlayerTorso>>,
) {
    if !input.jump_pressed {
        return;
    }

    for (state, mut velocity) in &mut query {
        if !state.on_ground {
            debug!("Jump refused: airborne");
            continue;
        }
        velocity.y = tuning.jump_strength;
        debug!("Jump at strength {}", tuning.jump_strength);
    }
}

/// Facing follows the last nonzero intent; while coasting it flips to the
/// velocity direction once drift passes the threshold, so momentum never
/// leaves the sprite looking the wrong way.
pub(crate) fn update_facing(
    input: Res<PlayerInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&LinearVelocity, &mut MovementState), With<PlayerTorso>>,
) {
    for (velocity, mut state) in &mut query {
        if input.axis > 0.0 {
            state.facing = Facing::Right;
        } else if input.axis < 0.0 {
            state.facing = Facing::Left;
        } else if velocity.x.abs() > tuning.facing_flip_speed {
            state.facing = if velocity.x > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            };
        }
    }
}
