//! Camera domain: follow math and the fall-out watch.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::camera::{CameraTuning, FollowCamera};
use crate::core::{DeathCause, PlayerKilledEvent};
use crate::level::Level;
use crate::player::PlayerTorso;

/// Dropping below this line while the run is live is fatal.
pub const FALL_LINE_Y: f32 = -260.0;

/// How much ground shows beneath the walk line; the view bottom is anchored
/// to the world floor, there is no vertical tracking.
const FLOOR_VIEW_PAD: f32 = 60.0;

/// Where the camera center wants to be for a given player position: the
/// player, clamped so the view never leaves the level. A level narrower than
/// the view pins to its middle.
pub(crate) fn target_x(player_x: f32, viewport_width: f32, level_length: f32) -> f32 {
    if level_length <= viewport_width {
        return level_length * 0.5;
    }
    let half = viewport_width * 0.5;
    player_x.clamp(half, level_length - half)
}

/// First-order low-pass toward the target; the lag is the camera ease.
pub(crate) fn smooth_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

pub(crate) fn setup_camera(mut commands: Commands, tuning: Res<CameraTuning>) {
    commands.spawn((
        FollowCamera,
        Camera2d,
        Transform::from_xyz(
            tuning.viewport.x * 0.5,
            tuning.viewport.y * 0.5 - FLOOR_VIEW_PAD,
            0.0,
        ),
    ));
}

pub(crate) fn follow_player(
    tuning: Res<CameraTuning>,
    level: Res<Level>,
    player_query: Query<&Transform, (With<PlayerTorso>, Without<FollowCamera>)>,
    mut camera_query: Query<&mut Transform, With<FollowCamera>>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let target = target_x(player_transform.translation.x, tuning.viewport.x, level.length);
    camera_transform.translation.x =
        smooth_toward(camera_transform.translation.x, target, tuning.smoothing);
}

/// The "fell off the level" failure: torso below the fall line ends the run.
pub(crate) fn watch_fall_line(
    mut killed: MessageWriter<PlayerKilledEvent>,
    query: Query<&Transform, With<PlayerTorso>>,
) {
    let Ok(transform) = query.single() else {
        return;
    };

    if transform.translation.y < FALL_LINE_Y {
        killed.write(PlayerKilledEvent { cause: DeathCause::Fell });
    }
}
