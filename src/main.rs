mod camera;
mod contact;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod monsters;
mod player;
mod projectile;
mod snapshot;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Cliffside".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * 1200.0))
    .add_plugins((
        core::CorePlugin,
        level::LevelPlugin,
        player::PlayerPlugin,
        monsters::MonstersPlugin,
        projectile::ProjectilePlugin,
        contact::ContactPlugin,
        camera::CameraPlugin,
        snapshot::SnapshotPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
