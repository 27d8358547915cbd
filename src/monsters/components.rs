//! Monsters domain: components for scripted motion.

use bevy::prelude::*;
use serde::Serialize;

/// Marker for hostile bodies.
#[derive(Component, Debug)]
pub struct Monster;

/// Scripted motion state, one variant per behavior. Dispatch is a pattern
/// match; a body without this component simply has no drive.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum MonsterAi {
    /// Constant-speed sweep across a window centered on `origin`.
    Patrol {
        origin: Vec2,
        range: f32,
        speed: f32,
        direction: f32,
    },
    /// Hovers around `origin`, pursuing the player inside `chase_radius`.
    Flying {
        origin: Vec2,
        speed: f32,
        chase_radius: f32,
        hover_amplitude: f32,
        hover_frequency: f32,
        /// Seeded per-monster offset so a flock doesn't bob in lockstep.
        hover_phase: f32,
    },
}

impl MonsterAi {
    pub fn kind(&self) -> MonsterKind {
        match self {
            MonsterAi::Patrol { .. } => MonsterKind::Patrol,
            MonsterAi::Flying { .. } => MonsterKind::Flying,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonsterKind {
    Patrol,
    Flying,
}

/// Sweep state for the kinematic ferry platform. Driven purely by prescribed
/// velocity; forces never touch it.
#[derive(Component, Debug, Clone)]
pub struct PlatformDrive {
    pub origin: Vec2,
    pub range: f32,
    pub speed: f32,
    pub direction: f32,
}
