//! Player domain: tuning and resolved input resources.

use bevy::prelude::*;

/// Lower bound accepted for [`MovementTuning::jump_strength`].
pub const JUMP_STRENGTH_MIN: f32 = 450.0;
/// Upper bound accepted for [`MovementTuning::jump_strength`].
pub const JUMP_STRENGTH_MAX: f32 = 810.0;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Horizontal acceleration while grounded.
    pub ground_accel: f32,
    /// Horizontal acceleration while airborne; a touch above the ground rate
    /// for extra air control.
    pub air_accel: f32,
    /// Deceleration applied when there is residual speed but no intent.
    pub brake_decel: f32,
    /// Hard cap on horizontal speed while grounded.
    pub ground_speed_cap: f32,
    /// Hard cap on horizontal speed while airborne.
    pub air_speed_cap: f32,
    /// Below this speed with no intent, a grounded player stops outright
    /// instead of sliding forever.
    pub speed_dead_band: f32,
    /// Upward velocity written on a jump edge. Live-tunable; the controller
    /// reads whatever value is present at the next edge.
    pub jump_strength: f32,
    /// With no intent, facing follows velocity once it drifts past this.
    pub facing_flip_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            ground_accel: 2400.0,
            air_accel: 2800.0,
            brake_decel: 3200.0,
            ground_speed_cap: 300.0,
            air_speed_cap: 360.0,
            speed_dead_band: 12.0,
            jump_strength: 630.0,
            facing_flip_speed: 40.0,
        }
    }
}

/// Logical input state for the current tick, resolved once before the
/// controller runs. Jump and fire are press edges: true for the single tick
/// the key goes down, never while held.
#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    /// -1, 0 or +1; both directions held cancel to 0.
    pub axis: f32,
    pub jump_pressed: bool,
    pub fire_pressed: bool,
}
