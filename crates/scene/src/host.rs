//! Host platform requests: screen capture and fullscreen
//!
//! Both are fire-and-forget. The outcome is reported to the user as a
//! transient notification; failures are never retried.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot, ScreenshotCaptured};
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};
use showcase_config::ViewerConfig;
use showcase_ipc::NotificationLevel;

use crate::session::ViewerSession;
use crate::OutboundUiMessages;

/// Request for the host platform
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    /// Capture the primary window and download/save it as PNG
    Screenshot,
    /// Enter (true) or leave (false) fullscreen
    Fullscreen(bool),
}

pub struct HostPlugin;

impl Plugin for HostPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<HostRequest>()
            .add_systems(Update, (track_fullscreen, handle_host_requests).chain());
    }
}

/// Window mode for a fullscreen flag
pub fn window_mode(fullscreen: bool) -> WindowMode {
    if fullscreen {
        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
    } else {
        WindowMode::Windowed
    }
}

pub fn is_fullscreen(mode: WindowMode) -> bool {
    !matches!(mode, WindowMode::Windowed)
}

/// Mirror the primary window's mode into the session, including changes made
/// outside the viewer (Esc, window manager)
fn track_fullscreen(
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut session: ResMut<ViewerSession>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let fullscreen = is_fullscreen(window.mode);
    if session.fullscreen != fullscreen {
        session.set_fullscreen(fullscreen);
        debug!("Window fullscreen: {}", fullscreen);
    }
}

fn handle_host_requests(
    mut commands: Commands,
    mut requests: MessageReader<HostRequest>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    config: Res<ViewerConfig>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    for request in requests.read() {
        match request {
            HostRequest::Screenshot => {
                if windows.is_empty() {
                    warn!("Screenshot requested without a primary window");
                    outbound.notify(NotificationLevel::Error, "Screenshot failed: nothing to capture");
                    continue;
                }
                let filename = config.screenshot_filename();
                info!("Capturing screenshot to {}", filename);
                commands
                    .spawn(Screenshot::primary_window())
                    .observe(save_to_disk(filename))
                    .observe(report_screenshot);
            }
            HostRequest::Fullscreen(fullscreen) => {
                let Ok(mut window) = windows.single_mut() else {
                    warn!("Fullscreen requested without a primary window");
                    outbound.notify(NotificationLevel::Error, "Fullscreen is not available");
                    continue;
                };
                window.mode = window_mode(*fullscreen);
                info!("Fullscreen {}", if *fullscreen { "entered" } else { "exited" });
            }
        }
    }
}

fn report_screenshot(_captured: On<ScreenshotCaptured>, mut outbound: ResMut<OutboundUiMessages>) {
    outbound.notify(NotificationLevel::Success, "Screenshot captured successfully!");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_window_mode() {
        assert_eq!(window_mode(false), WindowMode::Windowed);
        assert_eq!(
            window_mode(true),
            WindowMode::BorderlessFullscreen(MonitorSelection::Current)
        );
    }

    #[test]
    fn test_session_follows_window_mode() {
        let mut world = World::new();
        world.init_resource::<ViewerSession>();
        let window = world
            .spawn((
                Window {
                    mode: window_mode(true),
                    ..default()
                },
                PrimaryWindow,
            ))
            .id();

        world.run_system_once(track_fullscreen).unwrap();
        assert!(world.resource::<ViewerSession>().fullscreen);

        // Left fullscreen outside the viewer's control
        world.get_mut::<Window>(window).unwrap().mode = WindowMode::Windowed;
        world.run_system_once(track_fullscreen).unwrap();
        assert!(!world.resource::<ViewerSession>().fullscreen);
    }

    #[test]
    fn test_is_fullscreen() {
        assert!(!is_fullscreen(WindowMode::Windowed));
        assert!(is_fullscreen(window_mode(true)));
    }
}
