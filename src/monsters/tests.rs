//! Monsters domain: tests for the drive rules.

use bevy::prelude::Vec2;

use super::components::{MonsterAi, MonsterKind};
use super::systems::{flip_direction, hover_target, pursuit_velocity};

// -----------------------------------------------------------------------------
// Patrol flip rule
// -----------------------------------------------------------------------------

#[test]
fn test_flip_direction_holds_inside_window() {
    assert_eq!(flip_direction(100.0, 100.0, 200.0, 1.0), 1.0);
    assert_eq!(flip_direction(100.0, 100.0, 200.0, -1.0), -1.0);
    assert_eq!(flip_direction(199.0, 100.0, 200.0, 1.0), 1.0);
}

#[test]
fn test_flip_direction_turns_around_at_edges() {
    // Below the window: head right regardless of current direction.
    assert_eq!(flip_direction(-10.0, 100.0, 200.0, -1.0), 1.0);
    // Above the window: head left.
    assert_eq!(flip_direction(210.0, 100.0, 200.0, 1.0), -1.0);
}

#[test]
fn test_flip_direction_boundary_is_exclusive() {
    // Exactly on an edge keeps the current direction; the flip happens on
    // crossing, not on touching.
    assert_eq!(flip_direction(0.0, 100.0, 200.0, -1.0), -1.0);
    assert_eq!(flip_direction(200.0, 100.0, 200.0, 1.0), 1.0);
}

#[test]
fn test_patrol_stays_bounded_under_repeated_steps() {
    // Walk the rule forward at a fixed step; the position may poke past an
    // edge by at most one step before correcting, and never runs away.
    let (origin, range, speed, dt) = (100.0_f32, 200.0_f32, 90.0_f32, 1.0 / 60.0);
    let mut x = origin;
    let mut direction = 1.0;

    for _ in 0..10_000 {
        direction = flip_direction(x, origin, range, direction);
        x += direction * speed * dt;
        assert!(x >= origin - range * 0.5 - speed * dt);
        assert!(x <= origin + range * 0.5 + speed * dt);
    }
}

// -----------------------------------------------------------------------------
// Flying drive
// -----------------------------------------------------------------------------

#[test]
fn test_pursuit_points_at_player_at_full_speed() {
    let velocity = pursuit_velocity(Vec2::new(0.0, 0.0), Vec2::new(60.0, 80.0), 150.0);
    // Distance 100: direction (0.6, 0.8) scaled by speed.
    assert!((velocity.x - 90.0).abs() < 1e-3);
    assert!((velocity.y - 120.0).abs() < 1e-3);
    assert!((velocity.length() - 150.0).abs() < 1e-3);
}

#[test]
fn test_pursuit_degenerate_overlap_is_zero() {
    let velocity = pursuit_velocity(Vec2::splat(5.0), Vec2::splat(5.0), 150.0);
    assert_eq!(velocity, Vec2::ZERO);
}

#[test]
fn test_hover_target_oscillates_around_origin() {
    let origin = Vec2::new(300.0, 200.0);
    let amplitude = 40.0;

    for step in 0..240 {
        let t = step as f32 / 60.0;
        let target = hover_target(origin, t, amplitude, 1.6);
        assert!((target.y - origin.y).abs() <= amplitude + 1e-3);
        // Horizontal sweep is bounded by its fixed amplitude.
        assert!((target.x - origin.x).abs() <= 60.0 + 1e-3);
    }
}

#[test]
fn test_hover_target_is_deterministic_in_time() {
    let origin = Vec2::new(300.0, 200.0);
    let a = hover_target(origin, 1.25, 40.0, 1.6);
    let b = hover_target(origin, 1.25, 40.0, 1.6);
    assert_eq!(a, b);
}

#[test]
fn test_phase_offset_desynchronizes_hover() {
    let origin = Vec2::ZERO;
    let a = hover_target(origin, 1.0, 40.0, 1.6);
    let b = hover_target(origin, 1.0 + 1.5, 40.0, 1.6);
    assert_ne!(a, b);
}

// -----------------------------------------------------------------------------
// Components
// -----------------------------------------------------------------------------

#[test]
fn test_monster_ai_kind() {
    let patrol = MonsterAi::Patrol {
        origin: Vec2::ZERO,
        range: 200.0,
        speed: 90.0,
        direction: 1.0,
    };
    let flying = MonsterAi::Flying {
        origin: Vec2::ZERO,
        speed: 150.0,
        chase_radius: 340.0,
        hover_amplitude: 40.0,
        hover_frequency: 1.6,
        hover_phase: 0.0,
    };

    assert_eq!(patrol.kind(), MonsterKind::Patrol);
    assert_eq!(flying.kind(), MonsterKind::Flying);
}
