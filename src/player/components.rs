//! Player domain: components for the two-body composite.

use bevy::prelude::*;
use serde::Serialize;

/// Marker present on both bodies of the player composite.
#[derive(Component, Debug)]
pub struct Player;

/// Marker for the torso, the composite's position and velocity authority.
/// Camera, controller and ground probe all read this body.
#[derive(Component, Debug)]
pub struct PlayerTorso;

/// Marker for the head riding above the torso on the neck joint.
#[derive(Component, Debug)]
pub struct PlayerHead;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
}
