//! Core domain: shared resources for simulation time and scoring.

use bevy::prelude::*;

/// Monotonic simulation time base.
///
/// Oscillators (hover sweeps and the like) read this clock rather than wall
/// time, so replaying the same inputs on a fixed step reproduces the same
/// motion. It advances only while the run is live.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SimClock {
    /// Seconds of simulated time since the run started.
    pub elapsed: f32,
    /// Number of completed simulation ticks.
    pub tick: u64,
}

impl SimClock {
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        self.tick += 1;
    }
}

/// Score and lives shown by the HUD.
///
/// Reserved extension points: no simulation system writes them yet.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ScoreBoard {
    pub score: u32,
    pub lives: u32,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self { score: 0, lives: 3 }
    }
}
