//! Viewer session state and control handling
//!
//! Holds the authoritative UI-facing state (view mode, auto-rotate,
//! fullscreen, loading, last FPS) and turns control-panel commands into
//! scene changes. View mode changes are picked up by material sync; screen
//! capture and fullscreen go to the host as `HostRequest`s.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use showcase_config::ViewerConfig;
use showcase_ipc::{
    CameraCommand, NotificationLevel, SessionSnapshot, UiToViewer, ViewMode, ViewerToUi,
};

use crate::camera::{MainCamera, OrbitCamera};
use crate::host::HostRequest;
use crate::hotspot::hotspot_infos;
use crate::OutboundUiMessages;

/// FPS shown before the first window closes
const INITIAL_FPS: u32 = 60;

/// Session state owned by the viewer
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewerSession {
    pub view_mode: ViewMode,
    pub auto_rotate: bool,
    pub fullscreen: bool,
    pub loading: bool,
    pub fps: u32,
}

impl ViewerSession {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            view_mode: config.initial_view_mode,
            auto_rotate: config.auto_rotate,
            fullscreen: false,
            loading: true,
            fps: INITIAL_FPS,
        }
    }

    /// Returns true if the mode changed
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        replace(&mut self.view_mode, mode)
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) -> bool {
        replace(&mut self.auto_rotate, enabled)
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        replace(&mut self.fullscreen, fullscreen)
    }

    pub fn set_loading(&mut self, loading: bool) -> bool {
        replace(&mut self.loading, loading)
    }

    pub fn record_fps(&mut self, fps: u32) {
        self.fps = fps;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            view_mode: self.view_mode,
            auto_rotate: self.auto_rotate,
            fullscreen: self.fullscreen,
            loading: self.loading,
            fps: self.fps,
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

impl FromWorld for ViewerSession {
    fn from_world(world: &mut World) -> Self {
        world
            .get_resource::<ViewerConfig>()
            .map(ViewerSession::new)
            .unwrap_or_else(|| ViewerSession::new(&ViewerConfig::default()))
    }
}

/// Control-panel input
#[derive(Message, Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Send the full initial state to the UI
    SyncUi,
    SetViewMode(ViewMode),
    SetAutoRotate(bool),
    ToggleAutoRotate,
    ToggleFullscreen,
    ResetView,
    Screenshot,
    Camera(CameraCommand),
}

impl SessionCommand {
    pub fn from_ui(msg: &UiToViewer) -> Self {
        match msg {
            UiToViewer::Ready => SessionCommand::SyncUi,
            UiToViewer::SetViewMode(mode) => SessionCommand::SetViewMode(*mode),
            UiToViewer::SetAutoRotate(enabled) => SessionCommand::SetAutoRotate(*enabled),
            UiToViewer::ToggleFullscreen => SessionCommand::ToggleFullscreen,
            UiToViewer::ResetView => SessionCommand::ResetView,
            UiToViewer::Screenshot => SessionCommand::Screenshot,
            UiToViewer::CameraCommand(cmd) => SessionCommand::Camera(*cmd),
        }
    }
}

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerSession>()
            .add_message::<SessionCommand>()
            .add_systems(
                Update,
                (handle_session_commands, publish_session_changes).chain(),
            );
    }
}

fn handle_session_commands(
    mut commands_in: MessageReader<SessionCommand>,
    mut session: ResMut<ViewerSession>,
    mut camera_query: Query<(&mut OrbitCamera, &Transform), With<MainCamera>>,
    mut host: MessageWriter<HostRequest>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    for command in commands_in.read() {
        match command {
            SessionCommand::SyncUi => {
                outbound.send(ViewerToUi::Initialize {
                    session: session.snapshot(),
                    hotspots: hotspot_infos(),
                });
            }
            SessionCommand::SetViewMode(mode) => {
                if session.set_view_mode(*mode) {
                    info!("View mode set to {}", mode);
                }
            }
            SessionCommand::SetAutoRotate(enabled) => {
                session.set_auto_rotate(*enabled);
            }
            SessionCommand::ToggleAutoRotate => {
                let enabled = !session.auto_rotate;
                session.set_auto_rotate(enabled);
                info!("Auto-rotate {}", if enabled { "on" } else { "off" });
            }
            SessionCommand::ToggleFullscreen => {
                host.write(HostRequest::Fullscreen(!session.fullscreen));
            }
            SessionCommand::ResetView => {
                for (mut orbit, _) in camera_query.iter_mut() {
                    orbit.reset();
                }
                outbound.notify(NotificationLevel::Success, "View reset to default");
            }
            SessionCommand::Screenshot => {
                host.write(HostRequest::Screenshot);
            }
            SessionCommand::Camera(cmd) => {
                for (mut orbit, transform) in camera_query.iter_mut() {
                    orbit.apply_command(*cmd, transform.rotation);
                }
            }
        }
    }
}

/// Push a snapshot whenever a control-panel field changes. FPS has its own
/// message and is not compared here.
fn publish_session_changes(
    session: Res<ViewerSession>,
    mut last: Local<Option<SessionSnapshot>>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    if !session.is_changed() {
        return;
    }

    let snapshot = session.snapshot();
    let key = SessionSnapshot { fps: 0, ..snapshot.clone() };
    if last.as_ref() == Some(&key) {
        return;
    }
    *last = Some(key);
    outbound.send(ViewerToUi::SessionChanged(snapshot));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_config() {
        let config = ViewerConfig {
            initial_view_mode: ViewMode::Normal,
            auto_rotate: false,
            ..default()
        };
        let session = ViewerSession::new(&config);
        assert_eq!(session.view_mode, ViewMode::Normal);
        assert!(!session.auto_rotate);
        assert!(session.loading);
        assert_eq!(session.fps, INITIAL_FPS);
    }

    #[test]
    fn test_mutators_report_changes() {
        let mut session = ViewerSession::new(&ViewerConfig::default());
        assert!(!session.set_view_mode(ViewMode::Solid));
        assert!(session.set_view_mode(ViewMode::Wireframe));
        assert!(!session.set_view_mode(ViewMode::Wireframe));

        assert!(session.set_fullscreen(true));
        assert!(!session.set_fullscreen(true));
        assert!(session.set_loading(false));
        assert!(session.set_auto_rotate(false));
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut session = ViewerSession::new(&ViewerConfig::default());
        session.set_view_mode(ViewMode::Textured);
        session.record_fps(42);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.view_mode, ViewMode::Textured);
        assert_eq!(snapshot.fps, 42);
        assert!(snapshot.auto_rotate);
        assert!(!snapshot.fullscreen);
    }

    #[test]
    fn test_from_ui() {
        assert_eq!(SessionCommand::from_ui(&UiToViewer::Ready), SessionCommand::SyncUi);
        assert_eq!(
            SessionCommand::from_ui(&UiToViewer::SetViewMode(ViewMode::Wireframe)),
            SessionCommand::SetViewMode(ViewMode::Wireframe)
        );
        assert_eq!(
            SessionCommand::from_ui(&UiToViewer::CameraCommand(CameraCommand::Reset)),
            SessionCommand::Camera(CameraCommand::Reset)
        );
    }
}
