//! Shared scene for the showcase viewer
//!
//! This crate provides the 3D product viewer used by both the native Bevy app
//! and the browser (WASM) build: the demo model, view mode materials, model
//! animation, hotspots, FPS sampling, loading progress and the session state
//! the UI shell controls.

use bevy::prelude::*;
use showcase_config::ViewerConfig;
use showcase_ipc::{NotificationLevel, ViewerToUi};

mod animation;
mod camera;
mod demo_model;
mod fps;
mod frame_clock;
mod host;
mod hotspot;
mod lighting;
mod loading;
mod material_sync;
mod session;
mod view_mode;
mod wireframe;

pub use animation::{AnimatedPart, AnimationPlugin, FloatGroup, FloatPose, ModelPose};
pub use camera::{CameraControllerPlugin, MainCamera, OrbitCamera};
pub use demo_model::DemoModelPlugin;
pub use fps::{FpsMonitor, FpsPlugin, FpsSampler};
pub use frame_clock::{FrameClock, FrameClockPlugin};
pub use host::{HostPlugin, HostRequest};
pub use hotspot::{
    hotspot_infos, pulse_scale, Hotspot, HotspotMarker, HotspotPlugin, HotspotRecord,
    HotspotState, PointerAction, HOTSPOTS,
};
pub use lighting::{AccentLight, KeyLight, LightingPlugin};
pub use loading::{LoadingPlugin, LoadingProgress, Milestone};
pub use material_sync::{
    apply_params, synchronize, AppliedMaterial, MaterialSyncPlugin, MaterialSyncState, ModelRoot,
    SyncReport,
};
pub use session::{SessionCommand, SessionPlugin, ViewerSession};
pub use view_mode::{hex, resolve, resolve_part, MaterialParams, ModelPart};
pub use wireframe::WireframeModePlugin;

/// Resource for queuing messages to send to the UI
/// The host layer (app crate) should drain this and deliver them
#[derive(Resource, Default)]
pub struct OutboundUiMessages {
    pub messages: Vec<ViewerToUi>,
}

impl OutboundUiMessages {
    /// Queue a message to be sent to the UI
    pub fn send(&mut self, msg: ViewerToUi) {
        self.messages.push(msg);
    }

    /// Queue a transient notification
    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.send(ViewerToUi::Notification {
            level,
            message: message.into(),
        });
    }

    /// Take all queued messages, leaving the queue empty
    pub fn drain(&mut self) -> Vec<ViewerToUi> {
        std::mem::take(&mut self.messages)
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        // Config first: session and FPS sampler read it when initialized
        app.init_resource::<ViewerConfig>()
            .init_resource::<OutboundUiMessages>();

        app.add_plugins(FrameClockPlugin);
        app.add_plugins(SessionPlugin);
        app.add_plugins(HostPlugin);
        app.add_plugins(CameraControllerPlugin);
        app.add_plugins(LightingPlugin);
        app.add_plugins(DemoModelPlugin);
        app.add_plugins(MaterialSyncPlugin);
        app.add_plugins(WireframeModePlugin);
        app.add_plugins(AnimationPlugin);
        app.add_plugins(FpsPlugin);
        app.add_plugins(HotspotPlugin);
        app.add_plugins(LoadingPlugin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_drain_empties_queue() {
        let mut outbound = OutboundUiMessages::default();
        outbound.notify(NotificationLevel::Success, "View reset to default");
        outbound.send(ViewerToUi::ViewerFailed {
            message: "no adapter".to_string(),
        });

        let drained = outbound.drain();
        assert_eq!(drained.len(), 2);
        assert!(matches!(
            &drained[0],
            ViewerToUi::Notification { level: NotificationLevel::Success, message }
                if message == "View reset to default"
        ));
        assert!(outbound.drain().is_empty());
    }
}
