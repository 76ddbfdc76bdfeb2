use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, CLEAR_COLOUR_RGB, DIRECTIONAL_ILLUMINANCE, DIRECTIONAL_LIGHT_POSITION,
};

pub fn clear_colour() -> ClearColor {
    let [r, g, b] = CLEAR_COLOUR_RGB;
    ClearColor(Color::srgb_u8(r, g, b))
}

/// Soft white ambient fill plus a shadow-casting key light aimed at the desk.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Key light"),
    ));
}
