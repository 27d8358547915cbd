//! Contact domain: draining collision events into world mutations.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::contact::classify::{ContactClass, TerminalKind, classify};
use crate::core::{DeathCause, LevelClearedEvent, MonsterSlainEvent, PlayerKilledEvent};
use crate::level::BodyLabel;

/// Process this tick's collision-start pairs exactly once each.
///
/// Projectile-monster pairs remove both bodies; the identity filter keeps a
/// shot that reports against two monsters in one tick (or vice versa) from
/// being resolved twice, since despawns only apply after the system runs.
/// Player-terminal pairs only publish events; the run-end handler applies the
/// single guarded state transition.
pub(crate) fn resolve_contacts(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut killed: MessageWriter<PlayerKilledEvent>,
    mut cleared: MessageWriter<LevelClearedEvent>,
    mut slain: MessageWriter<MonsterSlainEvent>,
    labels: Query<&BodyLabel>,
) {
    let mut removed: Vec<Entity> = Vec::new();

    for event in collision_events.read() {
        let (Ok(&label1), Ok(&label2)) = (
            labels.get(event.collider1),
            labels.get(event.collider2),
        ) else {
            // A body despawned earlier this frame; the stale pair is inert.
            continue;
        };

        match classify(label1, label2) {
            ContactClass::ProjectileMonster => {
                let (projectile, monster) = if label1 == BodyLabel::Projectile {
                    (event.collider1, event.collider2)
                } else {
                    (event.collider2, event.collider1)
                };

                if removed.contains(&projectile) || removed.contains(&monster) {
                    continue;
                }
                removed.push(projectile);
                removed.push(monster);

                commands.entity(projectile).despawn();
                commands.entity(monster).despawn();
                slain.write(MonsterSlainEvent { monster });
                debug!("Shot {:?} downed monster {:?}", projectile, monster);
            }
            ContactClass::PlayerTerminal(TerminalKind::Struck) => {
                killed.write(PlayerKilledEvent { cause: DeathCause::Struck });
            }
            ContactClass::PlayerTerminal(TerminalKind::Reached) => {
                cleared.write(LevelClearedEvent);
            }
            ContactClass::Ignored => {}
        }
    }
}

/// Throw away collision events that accumulated across a state transition so
/// a fresh run never reacts to the previous world's contacts.
pub(crate) fn drain_stale_contacts(mut collision_events: MessageReader<CollisionStart>) {
    let count = collision_events.read().count();
    if count > 0 {
        debug!("Drained {} stale collision events on run start", count);
    }
}
