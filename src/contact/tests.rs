//! Contact domain: tests for pair classification.

use super::classify::{ContactClass, TerminalKind, classify};
use crate::level::BodyLabel;

const ALL_LABELS: [BodyLabel; 12] = [
    BodyLabel::Ground,
    BodyLabel::Platform,
    BodyLabel::MovingPlatform,
    BodyLabel::Wall,
    BodyLabel::Spike,
    BodyLabel::Gate,
    BodyLabel::Goal,
    BodyLabel::Monster,
    BodyLabel::Projectile,
    BodyLabel::Boundary,
    BodyLabel::PlayerTorso,
    BodyLabel::PlayerHead,
];

#[test]
fn test_projectile_monster_pairs() {
    assert_eq!(
        classify(BodyLabel::Projectile, BodyLabel::Monster),
        ContactClass::ProjectileMonster
    );
    assert_eq!(
        classify(BodyLabel::Monster, BodyLabel::Projectile),
        ContactClass::ProjectileMonster
    );
}

#[test]
fn test_lethal_contacts_for_both_player_parts() {
    for part in [BodyLabel::PlayerTorso, BodyLabel::PlayerHead] {
        for hazard in [BodyLabel::Spike, BodyLabel::Monster] {
            assert_eq!(
                classify(part, hazard),
                ContactClass::PlayerTerminal(TerminalKind::Struck)
            );
            assert_eq!(
                classify(hazard, part),
                ContactClass::PlayerTerminal(TerminalKind::Struck)
            );
        }
    }
}

#[test]
fn test_goal_contact_wins_the_run() {
    for part in [BodyLabel::PlayerTorso, BodyLabel::PlayerHead] {
        assert_eq!(
            classify(part, BodyLabel::Goal),
            ContactClass::PlayerTerminal(TerminalKind::Reached)
        );
        assert_eq!(
            classify(BodyLabel::Goal, part),
            ContactClass::PlayerTerminal(TerminalKind::Reached)
        );
    }
}

#[test]
fn test_mundane_contacts_are_ignored() {
    assert_eq!(
        classify(BodyLabel::PlayerTorso, BodyLabel::Ground),
        ContactClass::Ignored
    );
    assert_eq!(
        classify(BodyLabel::PlayerHead, BodyLabel::Platform),
        ContactClass::Ignored
    );
    assert_eq!(
        classify(BodyLabel::PlayerTorso, BodyLabel::Gate),
        ContactClass::Ignored
    );
    assert_eq!(
        classify(BodyLabel::PlayerTorso, BodyLabel::Boundary),
        ContactClass::Ignored
    );
    assert_eq!(
        classify(BodyLabel::Monster, BodyLabel::Ground),
        ContactClass::Ignored
    );
    assert_eq!(
        classify(BodyLabel::Monster, BodyLabel::Monster),
        ContactClass::Ignored
    );
}

#[test]
fn test_classification_is_symmetric() {
    for a in ALL_LABELS {
        for b in ALL_LABELS {
            assert_eq!(classify(a, b), classify(b, a), "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn test_projectiles_never_threaten_the_player() {
    // The player cannot shoot themselves, whatever the event order.
    for part in [BodyLabel::PlayerTorso, BodyLabel::PlayerHead] {
        assert_eq!(classify(part, BodyLabel::Projectile), ContactClass::Ignored);
    }
}
