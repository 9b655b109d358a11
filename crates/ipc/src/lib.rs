//! IPC message protocol for the product showcase viewer
//!
//! Defines all message types exchanged between the Bevy viewer and the HTML UI
//! shell that draws the control panel, FPS badge, loading overlay and hotspot
//! annotation panels.

mod commands;
mod error;
mod messages;
mod types;

pub use commands::*;
pub use error::IpcError;
pub use messages::{UiToViewer, ViewerToUi};
pub use types::*;

/// DOM event name carrying `UiToViewer` messages
pub const UI_TO_VIEWER_EVENT: &str = "showcase:ui-to-viewer";

/// DOM event name carrying `ViewerToUi` messages
pub const VIEWER_TO_UI_EVENT: &str = "showcase:viewer-to-ui";

/// Serialize a viewer message to the JSON wire format
pub fn encode(msg: &ViewerToUi) -> Result<String, IpcError> {
    Ok(serde_json::to_string(msg)?)
}

/// Parse a UI message from the JSON wire format
pub fn decode(json: &str) -> Result<UiToViewer, IpcError> {
    if json.trim().is_empty() {
        return Err(IpcError::InvalidFormat("empty message".to_string()));
    }
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_view_mode_command() {
        let msg = decode(r#"{"type":"SetViewMode","data":"wireframe"}"#).unwrap();
        assert!(matches!(msg, UiToViewer::SetViewMode(ViewMode::Wireframe)));
    }

    #[test]
    fn test_decode_unit_command() {
        let msg = decode(r#"{"type":"ToggleFullscreen"}"#).unwrap();
        assert!(matches!(msg, UiToViewer::ToggleFullscreen));
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert!(matches!(decode("  "), Err(IpcError::InvalidFormat(_))));
        assert!(matches!(decode("{not json"), Err(IpcError::Serialize(_))));
    }

    #[test]
    fn test_encode_fps_update_shape() {
        let json = encode(&ViewerToUi::FpsUpdated {
            fps: 58,
            tier: FpsTier::Good,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "FpsUpdated");
        assert_eq!(value["data"]["fps"], 58);
        assert_eq!(value["data"]["tier"], "good");
    }
}
