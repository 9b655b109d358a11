//! Showcase WASM Build
//!
//! Compiles the viewer to WebAssembly. The 3D scene renders into a canvas
//! element while the HTML control panel overlays it and talks to the viewer
//! through CustomEvents on the window.

use bevy::prelude::*;
use showcase_config::ViewerConfig;
use showcase_ipc::ViewerToUi;
use showcase_scene::{OutboundUiMessages, ScenePlugin, SessionCommand};
use wasm_bindgen::prelude::*;

mod bridge;

/// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn main() {
    install_panic_hook();

    // Initialize the bridge for IPC with the control panel
    if let Err(e) = bridge::init_bridge() {
        web_sys::console::error_1(&e);
        bridge::send_to_ui(&ViewerToUi::ViewerFailed {
            message: "Unable to connect the viewer to the page".to_string(),
        });
        return;
    }

    let config = ViewerConfig::default();
    let canvas = config.canvas_selector.clone();

    App::new()
        .insert_resource(config)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        canvas: Some(canvas),
                        fit_canvas_to_parent: true,
                        prevent_default_event_handling: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    ..default()
                }),
        )
        .add_plugins(ScenePlugin)
        .add_plugins(BridgePlugin)
        .run();
}

/// Reload the page, used by the error overlay's retry button
#[wasm_bindgen]
pub fn reload() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    window.location().reload()
}

/// Panics are logged to the console and reported to the page so it can show
/// the error overlay instead of a frozen canvas.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::hook(info);

        let message = match info.payload().downcast_ref::<&str>() {
            Some(s) => s.to_string(),
            None => info
                .payload()
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_else(|| "Failed to initialize 3D viewer".to_string()),
        };
        bridge::send_to_ui(&ViewerToUi::ViewerFailed { message });
    }));
}

/// Plugin for handling IPC between the viewer and the control panel
pub struct BridgePlugin;

impl Plugin for BridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, handle_ui_messages)
            .add_systems(Last, forward_outbound_messages);
    }
}

/// Polls the page's messages and turns them into session commands
fn handle_ui_messages(mut commands_out: MessageWriter<SessionCommand>) {
    while let Some(msg) = bridge::poll_ui_message() {
        debug!("Received UI message: {:?}", msg);
        commands_out.write(SessionCommand::from_ui(&msg));
    }
}

fn forward_outbound_messages(mut outbound: ResMut<OutboundUiMessages>) {
    for msg in outbound.drain() {
        bridge::send_to_ui(&msg);
    }
}
