//! Debug domain: diagnostics overlay and live tuning keys.
//!
//! Keys: F3 toggles the overlay, F4 dumps the current frame snapshot as JSON
//! to the log, [ and ] nudge jump strength inside its accepted band.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{GameState, MonsterSlainEvent};
use crate::debug::state::DebugState;
use crate::player::{JUMP_STRENGTH_MAX, JUMP_STRENGTH_MIN, MovementTuning};
use crate::snapshot::FrameSnapshot;

/// Step applied per jump-strength nudge.
const JUMP_STRENGTH_STEP: f32 = 30.0;

/// Marker for the debug overlay text
#[derive(Component)]
pub struct DebugOverlayText;

pub(crate) fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    mut debug_state: ResMut<DebugState>,
    overlay_query: Query<Entity, With<DebugOverlayText>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;

    if debug_state.overlay_visible {
        commands.spawn((
            DebugOverlayText,
            Text::new(""),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(Color::srgb(0.7, 0.9, 0.7)),
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Px(16.0),
                ..default()
            },
        ));
    } else {
        for entity in &overlay_query {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn update_overlay(
    debug_state: Res<DebugState>,
    state: Res<State<GameState>>,
    tuning: Res<MovementTuning>,
    snapshot: Res<FrameSnapshot>,
    mut query: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = query.single_mut() else {
        return;
    };

    let pose = snapshot
        .player
        .map(|p| {
            format!(
                "pos ({:.0}, {:.0})  vel ({:.0}, {:.0})  grounded {}  {:?}",
                p.position.0, p.position.1, p.velocity.0, p.velocity.1, p.grounded, p.facing
            )
        })
        .unwrap_or_else(|| "no player".to_string());

    **text = format!(
        "tick {}  state {:?}\n{}\nmonsters {}  shots {}  slain {}\njump {}",
        snapshot.tick,
        state.get(),
        pose,
        snapshot.monsters.len(),
        snapshot.projectiles.len(),
        debug_state.monsters_slain,
        tuning.jump_strength,
    );
}

/// The external control surface for jump strength: adjustments land on the
/// tuning resource and apply from the next jump edge on. Values are clamped
/// here, not in the controller.
pub(crate) fn adjust_jump_strength(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tuning: ResMut<MovementTuning>,
) {
    let mut delta = 0.0;
    if keyboard.just_pressed(KeyCode::BracketLeft) {
        delta -= JUMP_STRENGTH_STEP;
    }
    if keyboard.just_pressed(KeyCode::BracketRight) {
        delta += JUMP_STRENGTH_STEP;
    }

    if delta != 0.0 {
        tuning.jump_strength =
            (tuning.jump_strength + delta).clamp(JUMP_STRENGTH_MIN, JUMP_STRENGTH_MAX);
        info!("Jump strength set to {}", tuning.jump_strength);
    }
}

pub(crate) fn dump_snapshot(keyboard: Res<ButtonInput<KeyCode>>, snapshot: Res<FrameSnapshot>) {
    if !keyboard.just_pressed(KeyCode::F4) {
        return;
    }

    match serde_json::to_string(&*snapshot) {
        Ok(json) => info!("Frame snapshot: {}", json),
        Err(err) => warn!("Snapshot serialization failed: {}", err),
    }
}

pub(crate) fn tally_slain_monsters(
    mut events: MessageReader<MonsterSlainEvent>,
    mut debug_state: ResMut<DebugState>,
) {
    for event in events.read() {
        debug_state.monsters_slain += 1;
        debug!("Monster {:?} down, total {}", event.monster, debug_state.monsters_slain);
    }
}
