//! Contact domain: pure classification of collision pairs.

use crate::level::BodyLabel;

/// How a run ends when the player touches the wrong (or right) thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKind {
    /// Lethal contact: spike or monster.
    Struck,
    /// Goal contact: the run is won.
    Reached,
}

/// What a collision-start pair means to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactClass {
    /// A shot met a monster; both bodies are removed.
    ProjectileMonster,
    /// A player part met something that ends the run.
    PlayerTerminal(TerminalKind),
    /// Everything else: footfalls, wall bumps, monster-vs-scenery.
    Ignored,
}

/// Classify an unordered label pair. Total over all label combinations and
/// symmetric in its arguments, so event ordering never matters.
pub fn classify(a: BodyLabel, b: BodyLabel) -> ContactClass {
    use BodyLabel::*;

    match (a, b) {
        (Projectile, Monster) | (Monster, Projectile) => ContactClass::ProjectileMonster,
        (PlayerTorso | PlayerHead, Spike | Monster) | (Spike | Monster, PlayerTorso | PlayerHead) => {
            ContactClass::PlayerTerminal(TerminalKind::Struck)
        }
        (PlayerTorso | PlayerHead, Goal) | (Goal, PlayerTorso | PlayerHead) => {
            ContactClass::PlayerTerminal(TerminalKind::Reached)
        }
        _ => ContactClass::Ignored,
    }
}
