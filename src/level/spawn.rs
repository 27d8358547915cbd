//! Level domain: materializing the construction plan into physics bodies.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::components::{RunEntity, collision_layers};
use crate::level::data::{BodyLabel, Level, MonsterSpec};
use crate::level::plan::{BodySpec, build_plan, hover_phases};
use crate::monsters::{Monster, MonsterAi, PlatformDrive};

/// Depth of scenery quads.
const Z_TERRAIN: f32 = 0.0;
/// Depth of monsters and other actors.
const Z_ACTOR: f32 = 5.0;

/// Build the whole initial body set for the active level.
///
/// Pure construction: every gameplay decision lives in the plan or in the
/// systems that run afterwards, never here.
pub(crate) fn spawn_level(mut commands: Commands, level: Res<Level>) {
    let plan = build_plan(&level);
    info!(
        "Building level '{}': {} bodies, {} monsters",
        level.name,
        plan.len(),
        level.monsters.len()
    );

    let mut monster_index = 0;
    let phases = hover_phases(&level);

    for spec in &plan {
        match spec.label {
            BodyLabel::Monster => {
                let monster = &level.monsters[monster_index];
                spawn_monster(&mut commands, spec, monster, phases[monster_index]);
                monster_index += 1;
            }
            BodyLabel::MovingPlatform => spawn_moving_platform(&mut commands, spec, &level),
            _ => spawn_scenery(&mut commands, spec),
        }
    }
}

fn spawn_scenery(commands: &mut Commands, spec: &BodySpec) {
    let mut body = commands.spawn((
        spec.label,
        RunEntity,
        Transform::from_xyz(spec.pos.x, spec.pos.y, Z_TERRAIN),
        RigidBody::Static,
        Collider::rectangle(spec.size.x, spec.size.y),
        collision_layers(spec.label),
    ));

    if let Some(color) = label_color(spec.label) {
        body.insert(Sprite {
            color,
            custom_size: Some(spec.size),
            ..default()
        });
    }

    if spec.sensor {
        body.insert((Sensor, CollisionEventsEnabled));
    }
}

fn spawn_moving_platform(commands: &mut Commands, spec: &BodySpec, level: &Level) {
    let drive = &level.moving_platform;
    commands.spawn((
        spec.label,
        RunEntity,
        PlatformDrive {
            origin: Vec2::new(drive.origin.0, drive.origin.1),
            range: drive.range,
            speed: drive.speed,
            direction: 1.0,
        },
        Sprite {
            color: Color::srgb(0.45, 0.5, 0.65),
            custom_size: Some(spec.size),
            ..default()
        },
        Transform::from_xyz(spec.pos.x, spec.pos.y, Z_TERRAIN),
        RigidBody::Kinematic,
        Collider::rectangle(spec.size.x, spec.size.y),
        LinearVelocity::default(),
        collision_layers(spec.label),
    ));
}

fn spawn_monster(commands: &mut Commands, spec: &BodySpec, monster: &MonsterSpec, phase: f32) {
    let ai = match *monster {
        MonsterSpec::Patrol { pos, range, speed } => MonsterAi::Patrol {
            origin: Vec2::new(pos.0, pos.1),
            range,
            speed,
            direction: 1.0,
        },
        MonsterSpec::Flying {
            pos,
            speed,
            chase_radius,
            hover_amplitude,
            hover_frequency,
        } => MonsterAi::Flying {
            origin: Vec2::new(pos.0, pos.1),
            speed,
            chase_radius,
            hover_amplitude,
            hover_frequency,
            hover_phase: phase,
        },
    };

    let color = match ai {
        MonsterAi::Patrol { .. } => Color::srgb(0.8, 0.3, 0.3),
        MonsterAi::Flying { .. } => Color::srgb(0.7, 0.3, 0.8),
    };

    let mut body = commands.spawn((
        Monster,
        spec.label,
        ai,
        RunEntity,
        Sprite {
            color,
            custom_size: Some(spec.size),
            ..default()
        },
        Transform::from_xyz(spec.pos.x, spec.pos.y, Z_ACTOR),
        RigidBody::Dynamic,
        Collider::rectangle(spec.size.x, spec.size.y),
        LockedAxes::ROTATION_LOCKED,
        LinearVelocity::default(),
        Friction::new(0.0),
        CollisionEventsEnabled,
        collision_layers(spec.label),
    ));

    // Flying monsters are exempt from gravity; the drive system owns their
    // vertical motion entirely.
    if matches!(monster, MonsterSpec::Flying { .. }) {
        body.insert(GravityScale(0.0));
    }
}

/// Despawn every entity belonging to the finished run. Runs on leaving a
/// terminal state, right before the next build.
pub(crate) fn cleanup_run(mut commands: Commands, query: Query<Entity, With<RunEntity>>) {
    let mut count = 0;
    for entity in &query {
        commands.entity(entity).despawn();
        count += 1;
    }
    debug!("Tore down {} run entities", count);
}

fn label_color(label: BodyLabel) -> Option<Color> {
    match label {
        BodyLabel::Ground => Some(Color::srgb(0.35, 0.4, 0.35)),
        BodyLabel::Platform => Some(Color::srgb(0.4, 0.45, 0.4)),
        BodyLabel::Wall => Some(Color::srgb(0.25, 0.25, 0.35)),
        BodyLabel::Spike => Some(Color::srgb(0.75, 0.2, 0.2)),
        BodyLabel::Gate => Some(Color::srgb(0.55, 0.45, 0.2)),
        BodyLabel::Goal => Some(Color::srgba(0.4, 0.9, 0.5, 0.35)),
        // Containment walls stay invisible.
        BodyLabel::Boundary => None,
        _ => None,
    }
}
