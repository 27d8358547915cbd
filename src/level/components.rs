//! Level domain: physics layers and lifecycle markers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::data::BodyLabel;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (ground tiles, platforms, the moving platform)
    Ground,
    /// Interior walls and the gate frame
    Wall,
    /// Lethal static hazards
    Hazard,
    /// Player torso and head
    Player,
    /// Monsters
    Enemy,
    /// Player projectiles
    Projectile,
    /// Overlap-only trigger volumes (the goal)
    Sensor,
    /// Level-edge containment walls - never count as footing
    Boundary,
}

/// Marker for every entity that belongs to the current run.
/// The whole set is despawned when a run is torn down, so a restart is a
/// fresh world build rather than an incremental reset.
#[derive(Component, Debug)]
pub struct RunEntity;

/// Membership and filter for each body classification. Kept total over
/// [`BodyLabel`] so every spawner draws from one mapping.
pub fn collision_layers(label: BodyLabel) -> CollisionLayers {
    match label {
        BodyLabel::Ground | BodyLabel::Platform | BodyLabel::MovingPlatform => {
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy])
        }
        BodyLabel::Wall | BodyLabel::Gate => {
            CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Enemy])
        }
        BodyLabel::Spike => CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
        BodyLabel::Goal => CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        BodyLabel::Boundary => {
            CollisionLayers::new(GameLayer::Boundary, [GameLayer::Player, GameLayer::Enemy])
        }
        BodyLabel::Monster => CollisionLayers::new(
            GameLayer::Enemy,
            [
                GameLayer::Ground,
                GameLayer::Wall,
                GameLayer::Boundary,
                GameLayer::Player,
                GameLayer::Projectile,
            ],
        ),
        // Projectiles fly through scenery and only ever meet monsters.
        BodyLabel::Projectile => CollisionLayers::new(GameLayer::Projectile, [GameLayer::Enemy]),
        // Torso and head share the Player membership and omit it from their
        // filters, so the two halves of the composite never collide.
        BodyLabel::PlayerTorso | BodyLabel::PlayerHead => CollisionLayers::new(
            GameLayer::Player,
            [
                GameLayer::Ground,
                GameLayer::Wall,
                GameLayer::Hazard,
                GameLayer::Enemy,
                GameLayer::Sensor,
                GameLayer::Boundary,
            ],
        ),
    }
}
