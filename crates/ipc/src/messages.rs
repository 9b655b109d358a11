//! Main IPC message enums for communication between the viewer and UI.

use serde::{Deserialize, Serialize};

use crate::commands::CameraCommand;
use crate::types::{
    FpsTier, HotspotInfo, NotificationLevel, SessionSnapshot, ViewMode,
};

/// Messages from the viewer to the UI shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ViewerToUi {
    /// Initial state sync when the UI announces itself
    Initialize {
        session: SessionSnapshot,
        hotspots: Vec<HotspotInfo>,
    },

    /// Session state changed (view mode, auto-rotate, fullscreen, loading)
    SessionChanged(SessionSnapshot),

    /// A one-second FPS window closed
    FpsUpdated { fps: u32, tier: FpsTier },

    /// Loading overlay progress (0-100, never decreasing)
    LoadingProgress {
        progress: f32,
        stage: String,
        active: bool,
    },

    /// Hotspot annotation panel state
    HotspotAnnotation {
        id: String,
        visible: bool,
        /// Panel anchor in viewport pixels, if the anchor is on screen
        screen_position: Option<[f32; 2]>,
    },

    /// Transient toast for the user
    Notification {
        level: NotificationLevel,
        message: String,
    },

    /// The viewer cannot continue; the UI should show its fallback with a
    /// reload action
    ViewerFailed { message: String },
}

/// Messages from the UI shell to the viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToViewer {
    /// UI has mounted and wants the initial state
    Ready,

    /// View mode button pressed
    SetViewMode(ViewMode),

    /// Auto-rotate switch changed
    SetAutoRotate(bool),

    /// Fullscreen button pressed
    ToggleFullscreen,

    /// Reset button pressed
    ResetView,

    /// Screenshot button pressed
    Screenshot,

    /// Camera control from UI widgets
    CameraCommand(CameraCommand),
}
