//! Level domain: pure construction plan for the initial body set.
//!
//! `build_plan` turns a [`Level`] into the complete list of bodies the spawn
//! system will materialize. Keeping this step pure makes world construction
//! reproducible: the same level value always yields the same plan.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::level::data::{
    BodyLabel, FLYING_BODY_SIZE, GROUND_THICKNESS, GROUND_TILE_WIDTH, GroundSpan, Level,
    MonsterSpec, PATROL_BODY_SIZE,
};

/// Thickness of the invisible containment walls at both level ends.
const BOUNDARY_THICKNESS: f32 = 40.0;
/// Vertical reach of the containment walls.
const BOUNDARY_HEIGHT: f32 = 2000.0;

/// How a body moves once spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Static scenery, never moves.
    Fixed,
    /// Kinematic, velocity-prescribed by a drive system.
    Driven,
    /// Dynamic, fully simulated.
    Free,
}

/// One body in the initial set: where it sits, what it is, how it moves.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub label: BodyLabel,
    pub pos: Vec2,
    pub size: Vec2,
    pub motion: Motion,
    pub sensor: bool,
}

impl BodySpec {
    fn fixed(label: BodyLabel, pos: Vec2, size: Vec2) -> Self {
        Self { label, pos, size, motion: Motion::Fixed, sensor: false }
    }
}

/// Cut a ground span into `(center_x, width)` tiles of at most
/// [`GROUND_TILE_WIDTH`]; the final tile shrinks to fit the span.
pub fn tile_span(span: GroundSpan) -> Vec<(f32, f32)> {
    let mut tiles = Vec::new();
    let mut cursor = span.start;
    while cursor < span.end {
        let width = (span.end - cursor).min(GROUND_TILE_WIDTH);
        tiles.push((cursor + width * 0.5, width));
        cursor += width;
    }
    tiles
}

/// Produce the full initial body set for a level. Pure: no world access, no
/// gameplay logic, deterministic for a given level value.
pub fn build_plan(level: &Level) -> Vec<BodySpec> {
    let mut plan = Vec::new();

    // Containment walls just beyond both level ends.
    for x in [-BOUNDARY_THICKNESS * 0.5, level.length + BOUNDARY_THICKNESS * 0.5] {
        plan.push(BodySpec::fixed(
            BodyLabel::Boundary,
            Vec2::new(x, BOUNDARY_HEIGHT * 0.25),
            Vec2::new(BOUNDARY_THICKNESS, BOUNDARY_HEIGHT),
        ));
    }

    // Tiled floor segments, walkable surface at y = 0.
    for span in &level.ground_spans {
        for (center_x, width) in tile_span(*span) {
            plan.push(BodySpec::fixed(
                BodyLabel::Ground,
                Vec2::new(center_x, -GROUND_THICKNESS * 0.5),
                Vec2::new(width, GROUND_THICKNESS),
            ));
        }
    }

    for platform in &level.platforms {
        plan.push(BodySpec::fixed(BodyLabel::Platform, platform.center(), platform.extent()));
    }

    for wall in &level.walls {
        plan.push(BodySpec::fixed(BodyLabel::Wall, wall.center(), wall.extent()));
    }

    for spike in &level.spikes {
        plan.push(BodySpec::fixed(BodyLabel::Spike, spike.center(), spike.extent()));
    }

    plan.push(BodySpec::fixed(BodyLabel::Gate, level.gate.center(), level.gate.extent()));

    plan.push(BodySpec {
        label: BodyLabel::Goal,
        pos: level.goal.center(),
        size: level.goal.extent(),
        motion: Motion::Fixed,
        sensor: true,
    });

    plan.push(BodySpec {
        label: BodyLabel::MovingPlatform,
        pos: Vec2::new(level.moving_platform.origin.0, level.moving_platform.origin.1),
        size: Vec2::new(level.moving_platform.size.0, level.moving_platform.size.1),
        motion: Motion::Driven,
        sensor: false,
    });

    for monster in &level.monsters {
        let (pos, size) = match monster {
            MonsterSpec::Patrol { pos, .. } => (*pos, PATROL_BODY_SIZE),
            MonsterSpec::Flying { pos, .. } => (*pos, FLYING_BODY_SIZE),
        };
        plan.push(BodySpec {
            label: BodyLabel::Monster,
            pos: Vec2::new(pos.0, pos.1),
            size,
            motion: Motion::Free,
            sensor: false,
        });
    }

    plan
}

/// Seeded hover phase offsets, one per monster (patrol entries get one too,
/// keeping indices aligned; they just never read it). Deterministic for a
/// given level seed.
pub fn hover_phases(level: &Level) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(level.seed);
    level
        .monsters
        .iter()
        .map(|_| rng.random_range(0.0..std::f32::consts::TAU))
        .collect()
}
