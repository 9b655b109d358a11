//! Showcase - native 3D product viewer

use bevy::prelude::*;
use bevy::window::WindowResolution;
use showcase_config::{DisplayConfig, ViewerConfig};

#[cfg(feature = "wireframe")]
use bevy::render::{
    render_resource::WgpuFeatures,
    settings::{RenderCreation, WgpuSettings},
    RenderPlugin as BevyRenderPlugin,
};

mod input;
mod status;

use showcase_scene::ScenePlugin;

fn main() {
    // Parse configuration from environment
    let viewer_config = ViewerConfig::from_env();

    // Display configuration - single source of truth for window size
    let display_config = DisplayConfig::default();

    let window_config = Window {
        title: viewer_config.title.clone(),
        resolution: WindowResolution::new(display_config.width, display_config.height),
        present_mode: bevy::window::PresentMode::AutoVsync,
        ..default()
    };

    let mut app = App::new();

    app.insert_resource(viewer_config)
        .insert_resource(display_config);

    // Configure plugins with optional wireframe support
    #[cfg(feature = "wireframe")]
    {
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window_config),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    ..default()
                })
                .set(BevyRenderPlugin {
                    render_creation: RenderCreation::Automatic(WgpuSettings {
                        features: WgpuFeatures::POLYGON_MODE_LINE,
                        ..default()
                    }),
                    ..default()
                }),
        );
    }

    #[cfg(not(feature = "wireframe"))]
    {
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window_config),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    ..default()
                }),
        );
    }

    info!("Starting showcase viewer");

    app.add_plugins(ScenePlugin)
        .add_plugins(input::InputPlugin)
        .add_plugins(status::StatusPlugin)
        .run();
}
