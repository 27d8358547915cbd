//! Level domain: tests for ground tiling and plan construction.

use super::data::{GROUND_TILE_WIDTH, GroundSpan, Level};
use super::plan::{Motion, build_plan, hover_phases, tile_span};
use super::{BodyLabel, BodySpec};

// -----------------------------------------------------------------------------
// Ground tiling
// -----------------------------------------------------------------------------

#[test]
fn test_tile_span_covers_span_exactly() {
    let span = GroundSpan { start: 0.0, end: 1650.0 };
    let tiles = tile_span(span);

    let total: f32 = tiles.iter().map(|(_, width)| width).sum();
    assert!((total - 1650.0).abs() < 1e-3);

    // Tiles are contiguous from start to end.
    let mut cursor = span.start;
    for (center, width) in &tiles {
        assert!((center - (cursor + width * 0.5)).abs() < 1e-3);
        cursor += width;
    }
    assert!((cursor - span.end).abs() < 1e-3);
}

#[test]
fn test_tile_span_respects_max_width() {
    let tiles = tile_span(GroundSpan { start: 200.0, end: 2150.0 });
    assert!(tiles.iter().all(|(_, width)| *width <= GROUND_TILE_WIDTH));
    // The remainder tile is the short one.
    assert!(tiles.last().unwrap().1 < GROUND_TILE_WIDTH);
}

#[test]
fn test_tile_span_exact_multiple_has_no_sliver() {
    let tiles = tile_span(GroundSpan { start: 0.0, end: GROUND_TILE_WIDTH * 3.0 });
    assert_eq!(tiles.len(), 3);
    assert!(tiles.iter().all(|(_, width)| *width == GROUND_TILE_WIDTH));
}

#[test]
fn test_tile_span_empty_for_degenerate_span() {
    assert!(tile_span(GroundSpan { start: 100.0, end: 100.0 }).is_empty());
    assert!(tile_span(GroundSpan { start: 100.0, end: 50.0 }).is_empty());
}

// -----------------------------------------------------------------------------
// Plan construction
// -----------------------------------------------------------------------------

#[test]
fn test_build_plan_is_deterministic() {
    let level = Level::overworld();
    assert_eq!(build_plan(&level), build_plan(&level));
}

#[test]
fn test_build_plan_body_census() {
    let level = Level::overworld();
    let plan = build_plan(&level);

    let count = |label: BodyLabel| plan.iter().filter(|spec| spec.label == label).count();

    assert_eq!(count(BodyLabel::Boundary), 2);
    assert_eq!(count(BodyLabel::Platform), level.platforms.len());
    assert_eq!(count(BodyLabel::Wall), level.walls.len());
    assert_eq!(count(BodyLabel::Spike), level.spikes.len());
    assert_eq!(count(BodyLabel::Gate), 1);
    assert_eq!(count(BodyLabel::Goal), 1);
    assert_eq!(count(BodyLabel::MovingPlatform), 1);
    assert_eq!(count(BodyLabel::Monster), level.monsters.len());
    assert!(count(BodyLabel::Ground) > 0);
}

#[test]
fn test_build_plan_motion_and_sensor_flags() {
    let plan = build_plan(&Level::overworld());

    for spec in &plan {
        match spec.label {
            BodyLabel::MovingPlatform => assert_eq!(spec.motion, Motion::Driven),
            BodyLabel::Monster => assert_eq!(spec.motion, Motion::Free),
            _ => assert_eq!(spec.motion, Motion::Fixed),
        }
        // The goal is the only overlap-only volume in the initial set.
        assert_eq!(spec.sensor, spec.label == BodyLabel::Goal);
    }
}

#[test]
fn test_ground_tiles_sit_below_walk_line() {
    let plan = build_plan(&Level::overworld());
    for spec in plan.iter().filter(|spec| spec.label == BodyLabel::Ground) {
        // Surface of every tile is the y = 0 walk line.
        assert!((spec.pos.y + spec.size.y * 0.5).abs() < 1e-3);
    }
}

// -----------------------------------------------------------------------------
// Hover phases
// -----------------------------------------------------------------------------

#[test]
fn test_hover_phases_deterministic_per_seed() {
    let level = Level::overworld();
    assert_eq!(hover_phases(&level), hover_phases(&level));

    let mut reseeded = level.clone();
    reseeded.seed = level.seed + 1;
    assert_ne!(hover_phases(&level), hover_phases(&reseeded));
}

#[test]
fn test_hover_phases_aligned_with_monsters() {
    let level = Level::overworld();
    let phases = hover_phases(&level);
    assert_eq!(phases.len(), level.monsters.len());
    assert!(phases.iter().all(|p| (0.0..std::f32::consts::TAU).contains(p)));
}

#[test]
fn test_plan_monster_entries_follow_level_order() {
    use super::data::MonsterSpec;

    let level = Level::overworld();
    let plan = build_plan(&level);
    let monsters: Vec<&BodySpec> = plan
        .iter()
        .filter(|spec| spec.label == BodyLabel::Monster)
        .collect();

    // Spawn pairs plan entries with level specs by index; the orders must match.
    for (spec, monster) in monsters.iter().zip(&level.monsters) {
        let pos = match monster {
            MonsterSpec::Patrol { pos, .. } => *pos,
            MonsterSpec::Flying { pos, .. } => *pos,
        };
        assert_eq!((spec.pos.x, spec.pos.y), pos);
    }
}
