//! Player domain: system modules for input and locomotion.

pub(crate) mod grounding;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use grounding::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{apply_horizontal_movement, apply_jump, update_facing};
