//! Snapshot domain: the per-frame view of the simulation handed to render
//! consumers. Everything a presentation layer needs is in one serializable
//! resource, rebuilt after each step; nothing downstream touches the ECS.

use bevy::prelude::*;
use serde::Serialize;

use crate::camera::{CameraTuning, FollowCamera};
use crate::core::{GameState, ScoreBoard, SimClock};
use crate::level::Level;
use crate::monsters::{Monster, MonsterAi, MonsterKind};
use crate::player::{Facing, MovementState, PlayerTorso};
use crate::projectile::Projectile;

use avian2d::prelude::*;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerPose {
    pub position: (f32, f32),
    pub velocity: (f32, f32),
    pub grounded: bool,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonsterPose {
    pub position: (f32, f32),
    pub kind: MonsterKind,
}

/// One frame of simulation output.
#[derive(Resource, Debug, Clone, Default, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub state: GameState,
    pub level: String,
    pub player: Option<PlayerPose>,
    pub monsters: Vec<MonsterPose>,
    pub projectiles: Vec<(f32, f32)>,
    /// World x of the view's left edge.
    pub camera_offset: f32,
    pub score: u32,
    pub lives: u32,
}

pub(crate) fn publish_frame_snapshot(
    clock: Res<SimClock>,
    state: Res<State<GameState>>,
    score: Res<ScoreBoard>,
    tuning: Res<CameraTuning>,
    level: Option<Res<Level>>,
    mut snapshot: ResMut<FrameSnapshot>,
    player_query: Query<(&Transform, &LinearVelocity, &MovementState), With<PlayerTorso>>,
    monster_query: Query<(&Transform, &MonsterAi), With<Monster>>,
    projectile_query: Query<&Transform, With<Projectile>>,
    camera_query: Query<&Transform, With<FollowCamera>>,
) {
    snapshot.tick = clock.tick;
    snapshot.state = *state.get();
    snapshot.level = level.map(|l| l.name.clone()).unwrap_or_default();
    snapshot.score = score.score;
    snapshot.lives = score.lives;

    snapshot.player = player_query.single().ok().map(|(transform, velocity, movement)| {
        PlayerPose {
            position: (transform.translation.x, transform.translation.y),
            velocity: (velocity.x, velocity.y),
            grounded: movement.on_ground,
            facing: movement.facing,
        }
    });

    snapshot.monsters.clear();
    for (transform, ai) in &monster_query {
        snapshot.monsters.push(MonsterPose {
            position: (transform.translation.x, transform.translation.y),
            kind: ai.kind(),
        });
    }

    snapshot.projectiles.clear();
    for transform in &projectile_query {
        snapshot
            .projectiles
            .push((transform.translation.x, transform.translation.y));
    }

    snapshot.camera_offset = camera_query
        .single()
        .map(|transform| transform.translation.x - tuning.viewport.x * 0.5)
        .unwrap_or(0.0);
}

pub struct SnapshotPlugin;

impl Plugin for SnapshotPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameSnapshot>()
            .add_systems(PostUpdate, publish_frame_snapshot);
    }
}
