//! Keyboard input - the native build has no HTML control panel, so the
//! panel's controls are bound to keys instead

use bevy::input::InputSystems;
use bevy::prelude::*;

mod hotkeys;

pub use hotkeys::shortcut_for;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, hotkeys::handle_viewer_hotkeys.after(InputSystems));

        info!("Hotkeys: 1-4 view mode, Space auto-rotate, R reset, F fullscreen, P screenshot");
    }
}
