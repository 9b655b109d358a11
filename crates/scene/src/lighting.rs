//! Studio lighting rig: ambient fill, shadowed key light, two accent lights

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::view_mode::hex;

/// Marker component for the shadow-casting key light
#[derive(Component)]
pub struct KeyLight;

/// Marker component for the coloured accent point lights
#[derive(Component)]
pub struct AccentLight;

/// Position, colour and intensity of an accent light
struct Accent {
    position: Vec3,
    color: u32,
    /// Lumens
    intensity: f32,
}

const ACCENTS: [Accent; 2] = [
    Accent {
        position: Vec3::new(-10.0, 0.0, -20.0),
        color: 0x4fc3f7,
        intensity: 800_000.0,
    },
    Accent {
        position: Vec3::new(10.0, -10.0, 10.0),
        color: 0x29b6f6,
        intensity: 600_000.0,
    },
];

/// Plugin for the studio lighting rig
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_lighting);
    }
}

fn setup_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            color: Color::WHITE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        KeyLight,
        Name::new("Key Light"),
    ));

    for accent in &ACCENTS {
        let [r, g, b] = hex(accent.color);
        commands.spawn((
            PointLight {
                intensity: accent.intensity,
                color: Color::srgb(r, g, b),
                range: 40.0,
                ..default()
            },
            Transform::from_translation(accent.position),
            AccentLight,
        ));
    }

    // Global ambient light is a resource, not an entity
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });

    info!("Studio lighting initialized");
}
