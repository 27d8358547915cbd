//! Camera domain: horizontal follow with smoothing, and the fall-out watch.

mod systems;


pub use systems::FALL_LINE_Y;

use bevy::prelude::*;

use crate::core::GameState;
use crate::camera::systems::{follow_player, setup_camera, watch_fall_line};

/// Marker for the one scrolling view camera.
#[derive(Component, Debug)]
pub struct FollowCamera;

#[derive(Resource, Debug, Clone)]
pub struct CameraTuning {
    /// World-space size of the view.
    pub viewport: Vec2,
    /// Per-tick low-pass factor easing the camera toward its target.
    pub smoothing: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(1280.0, 720.0),
            smoothing: 0.08,
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (follow_player, watch_fall_line).run_if(in_state(GameState::Playing)),
            );
    }
}
