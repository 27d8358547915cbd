//! Monsters domain: per-tick drive systems for patrol, flight and the ferry.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::SimClock;
use crate::monsters::components::{Monster, MonsterAi, PlatformDrive};
use crate::player::PlayerTorso;

/// Frequency of the horizontal sweep every hover target shares.
const HOVER_SWEEP_FREQUENCY: f32 = 0.4;
/// Amplitude of that shared horizontal sweep.
const HOVER_SWEEP_AMPLITUDE: f32 = 60.0;
/// Proportional gain pulling a hovering monster toward its target point.
const HOVER_GAIN: f32 = 2.0;
/// Inside this distance pursuit stands down, preventing jitter at contact range.
const PURSUIT_EPSILON: f32 = 1.0;

/// The bounded back-and-forth rule shared by patrol monsters and the ferry:
/// flip outward-bound motion at the window edges, keep it otherwise. Applied
/// every tick, so an overshoot corrects itself on the next evaluation.
pub(crate) fn flip_direction(x: f32, origin_x: f32, range: f32, direction: f32) -> f32 {
    let half = range * 0.5;
    if x < origin_x - half {
        1.0
    } else if x > origin_x + half {
        -1.0
    } else {
        direction
    }
}

/// Direct pursuit: straight at the player at full speed, no easing.
pub(crate) fn pursuit_velocity(pos: Vec2, player_pos: Vec2, speed: f32) -> Vec2 {
    (player_pos - pos).normalize_or_zero() * speed
}

/// Where a hovering monster wants to be at simulation time `t`: the shared
/// horizontal sweep plus the monster's own vertical bob.
pub(crate) fn hover_target(origin: Vec2, t: f32, amplitude: f32, frequency: f32) -> Vec2 {
    Vec2::new(
        origin.x + (t * HOVER_SWEEP_FREQUENCY).sin() * HOVER_SWEEP_AMPLITUDE,
        origin.y + (t * frequency).sin() * amplitude,
    )
}

pub(crate) fn drive_patrol(
    mut query: Query<(&Transform, &mut LinearVelocity, &mut MonsterAi), With<Monster>>,
) {
    for (transform, mut velocity, mut ai) in &mut query {
        let MonsterAi::Patrol { origin, range, speed, direction } = &mut *ai else {
            continue;
        };

        *direction = flip_direction(transform.translation.x, origin.x, *range, *direction);
        velocity.x = *direction * *speed;
    }
}

pub(crate) fn drive_flying(
    clock: Res<SimClock>,
    player_query: Query<&Transform, With<PlayerTorso>>,
    mut query: Query<
        (&Transform, &mut LinearVelocity, &MonsterAi),
        (With<Monster>, Without<PlayerTorso>),
    >,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, mut velocity, ai) in &mut query {
        let MonsterAi::Flying {
            origin,
            speed,
            chase_radius,
            hover_amplitude,
            hover_frequency,
            hover_phase,
        } = *ai
        else {
            continue;
        };

        let pos = transform.translation.truncate();
        let distance = pos.distance(player_pos);

        if distance > PURSUIT_EPSILON && distance < chase_radius {
            velocity.0 = pursuit_velocity(pos, player_pos, speed);
        } else {
            let target = hover_target(
                origin,
                clock.elapsed + hover_phase,
                hover_amplitude,
                hover_frequency,
            );
            // Proportional pull toward the target, capped at the monster's
            // speed; converges without overshoot at steady state.
            velocity.0 = ((target - pos) * HOVER_GAIN).clamp_length_max(speed);
        }
    }
}

pub(crate) fn drive_moving_platforms(
    mut query: Query<(&Transform, &mut LinearVelocity, &mut PlatformDrive)>,
) {
    for (transform, mut velocity, mut drive) in &mut query {
        drive.direction = flip_direction(
            transform.translation.x,
            drive.origin.x,
            drive.range,
            drive.direction,
        );
        velocity.x = drive.direction * drive.speed;
        velocity.y = 0.0;
    }
}
