//! UI domain: score and lives HUD elements.

use bevy::prelude::*;

use crate::core::ScoreBoard;

const HUD_PADDING: f32 = 16.0;

/// Marker for the HUD root container
#[derive(Component)]
pub struct HudRoot;

/// Marker for the score text
#[derive(Component)]
pub struct ScoreText;

/// Marker for the lives text
#[derive(Component)]
pub struct LivesText;

pub(crate) fn spawn_hud(mut commands: Commands, board: Res<ScoreBoard>) {
    commands
        .spawn((
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                ScoreText,
                Text::new(format!("SCORE {}", board.score)),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.5)),
            ));

            parent.spawn((
                LivesText,
                Text::new(format!("LIVES {}", board.lives)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

pub(crate) fn update_hud(
    board: Res<ScoreBoard>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<LivesText>)>,
    mut lives_query: Query<&mut Text, (With<LivesText>, Without<ScoreText>)>,
) {
    if !board.is_changed() {
        return;
    }

    for mut text in &mut score_query {
        **text = format!("SCORE {}", board.score);
    }
    for mut text in &mut lives_query {
        **text = format!("LIVES {}", board.lives);
    }
}
