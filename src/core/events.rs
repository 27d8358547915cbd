//! Core domain: run flow events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Why the player lost the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Touched a spike or a monster.
    Struck,
    /// Dropped below the level floor.
    Fell,
}

/// Event fired when the player is killed
#[derive(Debug)]
pub struct PlayerKilledEvent {
    pub cause: DeathCause,
}

impl Message for PlayerKilledEvent {}

/// Event fired when the player reaches the goal
#[derive(Debug)]
pub struct LevelClearedEvent;

impl Message for LevelClearedEvent {}

/// Event fired when a projectile downs a monster
#[derive(Debug)]
pub struct MonsterSlainEvent {
    pub monster: Entity,
}

impl Message for MonsterSlainEvent {}
