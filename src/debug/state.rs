//! Debug domain: overlay state.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the diagnostics overlay is visible
    pub overlay_visible: bool,
    /// Monsters downed this session, tallied from slain events
    pub monsters_slain: u32,
}
