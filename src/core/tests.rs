//! Core domain: tests for the simulation clock and score defaults.

use super::{ScoreBoard, SimClock};

#[test]
fn test_sim_clock_starts_at_zero() {
    let clock = SimClock::default();
    assert_eq!(clock.elapsed, 0.0);
    assert_eq!(clock.tick, 0);
}

#[test]
fn test_sim_clock_accumulates() {
    let mut clock = SimClock::default();

    clock.advance(1.0 / 60.0);
    clock.advance(1.0 / 60.0);
    clock.advance(1.0 / 60.0);

    assert_eq!(clock.tick, 3);
    assert!((clock.elapsed - 3.0 / 60.0).abs() < 1e-6);
}

#[test]
fn test_sim_clock_is_monotonic() {
    let mut clock = SimClock::default();
    let mut last = clock.elapsed;

    for _ in 0..100 {
        clock.advance(1.0 / 60.0);
        assert!(clock.elapsed > last);
        last = clock.elapsed;
    }
}

#[test]
fn test_scoreboard_defaults() {
    let board = ScoreBoard::default();
    assert_eq!(board.score, 0);
    assert_eq!(board.lives, 3);
}
