//! Player domain: tests for locomotion math and tuning invariants.

use super::components::Facing;
use super::resources::{JUMP_STRENGTH_MAX, JUMP_STRENGTH_MIN, MovementTuning};
use super::systems::movement::step_horizontal;

const DT: f32 = 1.0 / 60.0;

// -----------------------------------------------------------------------------
// Horizontal rule
// -----------------------------------------------------------------------------

#[test]
fn test_accelerates_toward_intent() {
    let tuning = MovementTuning::default();
    let vx = step_horizontal(0.0, 1.0, true, &tuning, DT);
    assert!(vx > 0.0);
    assert!((vx - tuning.ground_accel * DT).abs() < 1e-3);
}

#[test]
fn test_air_acceleration_exceeds_ground_acceleration() {
    let tuning = MovementTuning::default();
    let grounded = step_horizontal(0.0, 1.0, true, &tuning, DT);
    let airborne = step_horizontal(0.0, 1.0, false, &tuning, DT);
    assert!(airborne > grounded);
}

#[test]
fn test_speed_never_exceeds_ground_cap() {
    let tuning = MovementTuning::default();
    let mut vx = 0.0;
    for _ in 0..600 {
        vx = step_horizontal(vx, 1.0, true, &tuning, DT);
        assert!(vx <= tuning.ground_speed_cap);
    }
    assert_eq!(vx, tuning.ground_speed_cap);
}

#[test]
fn test_speed_never_exceeds_air_cap() {
    let tuning = MovementTuning::default();
    let mut vx = 0.0;
    for _ in 0..600 {
        vx = step_horizontal(vx, -1.0, false, &tuning, DT);
        assert!(vx >= -tuning.air_speed_cap);
    }
    assert_eq!(vx, -tuning.air_speed_cap);
}

#[test]
fn test_landing_clamps_air_speed_to_ground_cap() {
    let tuning = MovementTuning::default();
    // Carry full air speed into a grounded tick.
    let vx = step_horizontal(tuning.air_speed_cap, 1.0, true, &tuning, DT);
    assert_eq!(vx, tuning.ground_speed_cap);
}

#[test]
fn test_braking_opposes_residual_speed() {
    let tuning = MovementTuning::default();
    let vx = step_horizontal(200.0, 0.0, true, &tuning, DT);
    assert!(vx < 200.0);
    assert!(vx > 0.0);

    let vx = step_horizontal(-200.0, 0.0, true, &tuning, DT);
    assert!(vx > -200.0);
    assert!(vx < 0.0);
}

#[test]
fn test_braking_never_overshoots_zero() {
    let tuning = MovementTuning::default();
    let mut vx = tuning.ground_speed_cap;
    for _ in 0..600 {
        let next = step_horizontal(vx, 0.0, true, &tuning, DT);
        assert!(next.abs() <= vx.abs());
        assert!(next >= 0.0);
        vx = next;
    }
    assert_eq!(vx, 0.0);
}

#[test]
fn test_dead_band_stops_grounded_player_outright() {
    let tuning = MovementTuning::default();
    let vx = step_horizontal(tuning.speed_dead_band * 0.5, 0.0, true, &tuning, DT);
    assert_eq!(vx, 0.0);
}

#[test]
fn test_dead_band_preserves_airborne_drift() {
    let tuning = MovementTuning::default();
    let drift = tuning.speed_dead_band * 0.5;
    let vx = step_horizontal(drift, 0.0, false, &tuning, DT);
    assert_eq!(vx, drift);
}

// -----------------------------------------------------------------------------
// Tuning invariants
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_consistent() {
    let tuning = MovementTuning::default();
    assert!(tuning.air_accel > tuning.ground_accel);
    assert!(tuning.air_speed_cap > tuning.ground_speed_cap);
    assert!(tuning.jump_strength >= JUMP_STRENGTH_MIN);
    assert!(tuning.jump_strength <= JUMP_STRENGTH_MAX);
    assert!(tuning.speed_dead_band > 0.0);
}

#[test]
fn test_facing_sign() {
    assert_eq!(Facing::Right.sign(), 1.0);
    assert_eq!(Facing::Left.sign(), -1.0);
}
