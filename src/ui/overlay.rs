//! UI domain: end-of-run overlays and the restart hint.

use bevy::prelude::*;

/// Marker for the active end-of-run overlay
#[derive(Component)]
pub struct StateOverlay;

pub(crate) fn spawn_game_over_overlay(mut commands: Commands) {
    spawn_overlay(
        &mut commands,
        "GAME OVER",
        Color::srgb(0.8, 0.15, 0.15),
        "The cliffs claim another climber.",
    );
}

pub(crate) fn spawn_victory_overlay(mut commands: Commands) {
    spawn_overlay(
        &mut commands,
        "YOU ESCAPED",
        Color::srgb(0.4, 0.85, 0.5),
        "The gate closes behind you.",
    );
}

pub(crate) fn cleanup_overlay(mut commands: Commands, query: Query<Entity, With<StateOverlay>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

fn spawn_overlay(commands: &mut Commands, title: &str, title_color: Color, subtext: &str) {
    commands
        .spawn((
            StateOverlay,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(subtext),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
                Node {
                    margin: UiRect::bottom(Val::Px(48.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press [R] or [Enter] to restart"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.45, 0.45, 0.5)),
            ));
        });
}
