//! Status reporting for the native build
//!
//! Drains the outbound UI queue. Notifications and progress go to the log;
//! FPS and view mode are shown in the window title in place of the web
//! badge.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use showcase_config::ViewerConfig;
use showcase_ipc::{NotificationLevel, ViewerToUi};
use showcase_scene::{OutboundUiMessages, ViewerSession};

pub struct StatusPlugin;

impl Plugin for StatusPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Last, (drain_outbound_messages, update_window_title));
    }
}

fn drain_outbound_messages(mut outbound: ResMut<OutboundUiMessages>) {
    for msg in outbound.drain() {
        match msg {
            ViewerToUi::Notification {
                level: NotificationLevel::Success,
                message,
            } => info!("{}", message),
            ViewerToUi::Notification {
                level: NotificationLevel::Error,
                message,
            } => warn!("{}", message),
            ViewerToUi::ViewerFailed { message } => error!("Viewer failed: {}", message),
            ViewerToUi::LoadingProgress {
                progress, stage, ..
            } => info!("Loading {:.0}% ({})", progress, stage),
            other => tracing::trace!(?other, "UI message"),
        }
    }
}

/// Window title for the current session
pub fn window_title(config: &ViewerConfig, session: &ViewerSession) -> String {
    let mut title = format!(
        "{} | {} | {} FPS",
        config.title, session.view_mode, session.fps
    );
    if session.auto_rotate {
        title.push_str(" | auto-rotate");
    }
    title
}

fn update_window_title(
    config: Res<ViewerConfig>,
    session: Res<ViewerSession>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !session.is_changed() {
        return;
    }
    if let Ok(mut window) = windows.single_mut() {
        window.title = window_title(&config, &session);
    }
}
