//! Wireframe rendering for the wireframe view mode
//!
//! Line rendering requires the `wireframe` feature and only works on native
//! builds (not WASM/WebGL2 due to GPU feature requirements). Without it the
//! wireframe view mode still applies its translucent palette.

use bevy::prelude::*;

use crate::view_mode::MaterialParams;

/// Plugin for per-mesh wireframe rendering
pub struct WireframeModePlugin;

impl Plugin for WireframeModePlugin {
    #[cfg(feature = "wireframe")]
    fn build(&self, app: &mut App) {
        use bevy::pbr::wireframe::{WireframeConfig, WireframePlugin};

        app.add_plugins(WireframePlugin::default())
            .insert_resource(WireframeConfig {
                global: false,
                ..default()
            });
    }

    #[cfg(not(feature = "wireframe"))]
    fn build(&self, _app: &mut App) {
        info!("Wireframe lines unavailable in this build; using palette only");
    }
}

/// Add or remove the wireframe marker on a render node
#[cfg(feature = "wireframe")]
pub(crate) fn set_wireframe(world: &mut World, entity: Entity, params: &MaterialParams) {
    use bevy::pbr::wireframe::{Wireframe, WireframeColor};

    let mut node = world.entity_mut(entity);
    if params.wireframe {
        let [r, g, b] = params.color;
        node.insert((
            Wireframe,
            WireframeColor {
                color: Color::srgb(r, g, b),
            },
        ));
    } else {
        node.remove::<(Wireframe, WireframeColor)>();
    }
}

#[cfg(not(feature = "wireframe"))]
pub(crate) fn set_wireframe(_world: &mut World, _entity: Entity, _params: &MaterialParams) {}
