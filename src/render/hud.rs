//! On-screen mission readout.

use bevy::prelude::*;

use crate::simulation::{MissionReadout, TargetInfo};

/// Marker for the readout text node.
#[derive(Component)]
pub struct MissionHud;

/// Text shown in the top-left corner.
pub fn readout_text(readout: &MissionReadout, target_name: &str) -> String {
    let status = if readout.deflected {
        format!("{} (deflected)", readout.status)
    } else {
        readout.status.to_string()
    };
    let speed = if readout.speed_multiplier == 0.0 {
        "paused".to_string()
    } else {
        format!("{:.2}x", readout.speed_multiplier)
    };

    let mut text = format!(
        "Target: {target_name}\nStatus: {status}\nDistance to Earth: {:.2}\nSpeed: {speed}",
        readout.earth_distance
    );
    if readout.blend_factor > 0.0 {
        text.push_str(&format!("\nOrbit shift: {:.0}%", readout.blend_factor * 100.0));
    }
    text
}

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.9, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        MissionHud,
    ));
}

pub fn update_hud(
    readout: Res<MissionReadout>,
    target: Res<TargetInfo>,
    mut query: Query<&mut Text, With<MissionHud>>,
) {
    let content = readout_text(&readout, &target.0.name);
    for mut text in query.iter_mut() {
        if text.0 != content {
            text.0.clone_from(&content);
        }
    }
}
