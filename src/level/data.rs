//! Level domain: declarative layout data consumed by the world builder.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Classification carried by every physics body in the simulation.
///
/// The contact resolver decides what a collision pair means from these labels
/// alone, so each body gets exactly one.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyLabel {
    Ground,
    Platform,
    MovingPlatform,
    Wall,
    Spike,
    Gate,
    Goal,
    Monster,
    Projectile,
    Boundary,
    PlayerTorso,
    PlayerHead,
}

/// Widest single ground segment. Long spans are cut into tiles of at most
/// this width so no collider grows with level length.
pub const GROUND_TILE_WIDTH: f32 = 400.0;
/// Vertical extent of a ground tile; the walkable surface sits at y = 0.
pub const GROUND_THICKNESS: f32 = 80.0;

/// Footprint of a patrolling monster body.
pub const PATROL_BODY_SIZE: Vec2 = Vec2::new(36.0, 44.0);
/// Footprint of a flying monster body.
pub const FLYING_BODY_SIZE: Vec2 = Vec2::new(36.0, 28.0);

/// An axis-aligned rectangle placed in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub pos: (f32, f32),
    pub size: (f32, f32),
}

impl BlockSpec {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.0, self.pos.1)
    }

    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.size.0, self.size.1)
    }
}

/// A contiguous stretch of walkable floor, in world x coordinates.
/// Everything between two spans is a pit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundSpan {
    pub start: f32,
    pub end: f32,
}

/// Monster placement plus its behavior parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MonsterSpec {
    /// Walks back and forth across a window centered on its spawn point.
    Patrol { pos: (f32, f32), range: f32, speed: f32 },
    /// Hovers around its spawn point and pursues the player on sight.
    Flying {
        pos: (f32, f32),
        speed: f32,
        chase_radius: f32,
        hover_amplitude: f32,
        hover_frequency: f32,
    },
}

/// The one velocity-driven ferry platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingPlatformSpec {
    pub origin: (f32, f32),
    pub size: (f32, f32),
    pub range: f32,
    pub speed: f32,
}

/// Immutable level layout. Loaded once at startup and never mutated; the
/// world builder reads it on every (re)build.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    /// Horizontal extent of the level in world units.
    pub length: f32,
    /// Seed for the deterministic per-monster hover phases.
    pub seed: u64,
    pub player_spawn: (f32, f32),
    pub ground_spans: Vec<GroundSpan>,
    pub platforms: Vec<BlockSpec>,
    pub walls: Vec<BlockSpec>,
    pub spikes: Vec<BlockSpec>,
    pub gate: BlockSpec,
    pub goal: BlockSpec,
    pub moving_platform: MovingPlatformSpec,
    pub monsters: Vec<MonsterSpec>,
}

impl Level {
    /// The built-in level, used whenever no level file is available.
    pub fn overworld() -> Self {
        Self {
            name: "Overworld".to_string(),
            length: 4200.0,
            seed: 7,
            player_spawn: (120.0, 60.0),
            ground_spans: vec![
                GroundSpan { start: 0.0, end: 1650.0 },
                GroundSpan { start: 1850.0, end: 2900.0 },
                GroundSpan { start: 3050.0, end: 4200.0 },
            ],
            platforms: vec![
                BlockSpec { pos: (520.0, 130.0), size: (180.0, 24.0) },
                BlockSpec { pos: (820.0, 240.0), size: (160.0, 24.0) },
                BlockSpec { pos: (1240.0, 180.0), size: (200.0, 24.0) },
                BlockSpec { pos: (2250.0, 200.0), size: (180.0, 24.0) },
                BlockSpec { pos: (2650.0, 300.0), size: (160.0, 24.0) },
                BlockSpec { pos: (2975.0, 150.0), size: (130.0, 24.0) },
                BlockSpec { pos: (3400.0, 220.0), size: (180.0, 24.0) },
                BlockSpec { pos: (3700.0, 320.0), size: (160.0, 24.0) },
            ],
            walls: vec![BlockSpec { pos: (2050.0, 60.0), size: (40.0, 120.0) }],
            spikes: vec![
                BlockSpec { pos: (1120.0, 12.0), size: (120.0, 24.0) },
                BlockSpec { pos: (2450.0, 12.0), size: (120.0, 24.0) },
                BlockSpec { pos: (3250.0, 12.0), size: (90.0, 24.0) },
            ],
            gate: BlockSpec { pos: (4120.0, 110.0), size: (30.0, 220.0) },
            goal: BlockSpec { pos: (4040.0, 100.0), size: (60.0, 200.0) },
            moving_platform: MovingPlatformSpec {
                origin: (1750.0, 90.0),
                size: (150.0, 20.0),
                range: 260.0,
                speed: 80.0,
            },
            monsters: vec![
                MonsterSpec::Patrol { pos: (900.0, 40.0), range: 260.0, speed: 90.0 },
                MonsterSpec::Patrol { pos: (2350.0, 40.0), range: 300.0, speed: 110.0 },
                MonsterSpec::Patrol { pos: (3500.0, 40.0), range: 280.0, speed: 100.0 },
                MonsterSpec::Flying {
                    pos: (2750.0, 260.0),
                    speed: 150.0,
                    chase_radius: 340.0,
                    hover_amplitude: 40.0,
                    hover_frequency: 1.6,
                },
                MonsterSpec::Flying {
                    pos: (3850.0, 300.0),
                    speed: 170.0,
                    chase_radius: 340.0,
                    hover_amplitude: 55.0,
                    hover_frequency: 1.2,
                },
            ],
        }
    }
}
