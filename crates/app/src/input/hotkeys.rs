//! Hotkey handling for the viewer controls
//!
//! - 1/2/3/4: Solid / Wireframe / Textured / Normal view mode
//! - Space: Toggle auto-rotate
//! - R: Reset view
//! - F or F11: Toggle fullscreen
//! - P or F12: Screenshot

use bevy::prelude::*;
use showcase_ipc::ViewMode;
use showcase_scene::SessionCommand;

/// Control bound to a key press, if any. Shortcuts with Ctrl held are left
/// to the platform.
pub fn shortcut_for(key: KeyCode, ctrl: bool) -> Option<SessionCommand> {
    if ctrl {
        return None;
    }

    let command = match key {
        KeyCode::Digit1 => SessionCommand::SetViewMode(ViewMode::Solid),
        KeyCode::Digit2 => SessionCommand::SetViewMode(ViewMode::Wireframe),
        KeyCode::Digit3 => SessionCommand::SetViewMode(ViewMode::Textured),
        KeyCode::Digit4 => SessionCommand::SetViewMode(ViewMode::Normal),
        KeyCode::Space => SessionCommand::ToggleAutoRotate,
        KeyCode::KeyR => SessionCommand::ResetView,
        KeyCode::KeyF | KeyCode::F11 => SessionCommand::ToggleFullscreen,
        KeyCode::KeyP | KeyCode::F12 => SessionCommand::Screenshot,
        _ => return None,
    };
    Some(command)
}

/// Turn key presses into session commands
pub fn handle_viewer_hotkeys(
    key_input: Res<ButtonInput<KeyCode>>,
    mut commands_out: MessageWriter<SessionCommand>,
) {
    let ctrl = key_input.pressed(KeyCode::ControlLeft) || key_input.pressed(KeyCode::ControlRight);

    for key in key_input.get_just_pressed() {
        if let Some(command) = shortcut_for(*key, ctrl) {
            debug!("Hotkey {:?} -> {:?}", key, command);
            commands_out.write(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_select_view_modes() {
        assert_eq!(
            shortcut_for(KeyCode::Digit2, false),
            Some(SessionCommand::SetViewMode(ViewMode::Wireframe))
        );
        assert_eq!(
            shortcut_for(KeyCode::Digit4, false),
            Some(SessionCommand::SetViewMode(ViewMode::Normal))
        );
    }

    #[test]
    fn test_ctrl_is_ignored() {
        assert_eq!(shortcut_for(KeyCode::KeyR, true), None);
        assert_eq!(shortcut_for(KeyCode::KeyR, false), Some(SessionCommand::ResetView));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(shortcut_for(KeyCode::KeyQ, false), None);
    }
}
