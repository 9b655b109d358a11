//! Loading progress for the startup overlay
//!
//! Progress is the highest milestone reached so far and therefore never
//! decreases. The overlay is shown until it reaches 100.

use bevy::prelude::*;
use showcase_ipc::ViewerToUi;

use crate::frame_clock::FrameClock;
use crate::lighting::KeyLight;
use crate::material_sync::{MaterialSyncState, ModelRoot};
use crate::session::ViewerSession;
use crate::OutboundUiMessages;

/// Startup milestones in the order they are expected
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Milestone {
    RenderContext,
    Models,
    Lighting,
    Finalized,
}

impl Milestone {
    pub const ALL: [Milestone; 4] = [
        Milestone::RenderContext,
        Milestone::Models,
        Milestone::Lighting,
        Milestone::Finalized,
    ];

    /// Progress value once this milestone is reached
    pub fn progress(self) -> f32 {
        match self {
            Milestone::RenderContext => 20.0,
            Milestone::Models => 50.0,
            Milestone::Lighting => 80.0,
            Milestone::Finalized => 100.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Milestone::RenderContext => "Initializing WebGL context",
            Milestone::Models => "Loading 3D models",
            Milestone::Lighting => "Setting up lighting",
            Milestone::Finalized => "Finalizing scene",
        }
    }
}

/// Monotonic loading progress
#[derive(Resource, Debug, Default, Clone)]
pub struct LoadingProgress {
    reached: Vec<Milestone>,
    reported: Option<f32>,
}

impl LoadingProgress {
    /// Returns true if the milestone was not reached before
    pub fn mark(&mut self, milestone: Milestone) -> bool {
        if self.reached.contains(&milestone) {
            return false;
        }
        self.reached.push(milestone);
        true
    }

    /// Percentage in [0, 100]
    pub fn progress(&self) -> f32 {
        self.reached
            .iter()
            .map(|m| m.progress())
            .fold(0.0, f32::max)
    }

    pub fn is_active(&self) -> bool {
        self.progress() < 100.0
    }

    /// Label of the first milestone still pending
    pub fn stage(&self) -> &'static str {
        Milestone::ALL
            .into_iter()
            .find(|m| !self.reached.contains(m))
            .map(Milestone::label)
            .unwrap_or("Ready")
    }
}

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoadingProgress>()
            .add_systems(Update, poll_loading);
    }
}

fn poll_loading(
    clock: Res<FrameClock>,
    model_root: Option<Res<ModelRoot>>,
    material_sync: Res<MaterialSyncState>,
    key_lights: Query<(), With<KeyLight>>,
    mut loading: ResMut<LoadingProgress>,
    mut session: ResMut<ViewerSession>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    if loading.reported == Some(100.0) {
        return;
    }

    if clock.frame() > 0 {
        loading.mark(Milestone::RenderContext);
    }
    if model_root.is_some() {
        loading.mark(Milestone::Models);
    }
    if !key_lights.is_empty() {
        loading.mark(Milestone::Lighting);
    }
    if loading.reached.len() == 3 && material_sync.applied.is_some() {
        loading.mark(Milestone::Finalized);
    }

    let progress = loading.progress();
    if loading.reported == Some(progress) {
        return;
    }
    loading.reported = Some(progress);

    let active = loading.is_active();
    session.set_loading(active);
    outbound.send(ViewerToUi::LoadingProgress {
        progress,
        stage: loading.stage().to_string(),
        active,
    });
    if !active {
        info!("Scene loaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_progress_starts_at_zero() {
        let loading = LoadingProgress::default();
        assert_eq!(loading.progress(), 0.0);
        assert!(loading.is_active());
        assert_eq!(loading.stage(), "Initializing WebGL context");
    }

    #[test]
    fn test_progress_never_decreases() {
        let mut loading = LoadingProgress::default();
        assert!(loading.mark(Milestone::Lighting));
        assert_eq!(loading.progress(), 80.0);

        // An earlier milestone arriving late doesn't pull progress back
        assert!(loading.mark(Milestone::RenderContext));
        assert_eq!(loading.progress(), 80.0);
        assert!(!loading.mark(Milestone::Lighting));
        assert_eq!(loading.stage(), "Loading 3D models");
    }

    #[test]
    fn test_finalized_completes() {
        let mut loading = LoadingProgress::default();
        for milestone in Milestone::ALL {
            loading.mark(milestone);
        }
        assert_eq!(loading.progress(), 100.0);
        assert!(!loading.is_active());
        assert_eq!(loading.stage(), "Ready");
    }

    fn loading_world() -> World {
        let mut world = World::new();
        world.init_resource::<FrameClock>();
        world.init_resource::<MaterialSyncState>();
        world.init_resource::<LoadingProgress>();
        world.init_resource::<ViewerSession>();
        world.init_resource::<OutboundUiMessages>();
        world
    }

    /// Run one poll and return the progress values it reported
    fn poll(world: &mut World) -> Vec<f32> {
        world.run_system_once(poll_loading).unwrap();
        world
            .resource_mut::<OutboundUiMessages>()
            .drain()
            .into_iter()
            .filter_map(|msg| match msg {
                ViewerToUi::LoadingProgress { progress, .. } => Some(progress),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_poll_reports_each_milestone_once() {
        let mut world = loading_world();
        assert_eq!(poll(&mut world), vec![0.0]);
        assert_eq!(poll(&mut world), Vec::<f32>::new());

        world.resource_mut::<FrameClock>().sample(16.0, 0.016, 0.016);
        assert_eq!(poll(&mut world), vec![20.0]);
        assert_eq!(poll(&mut world), Vec::<f32>::new());

        let root = world.spawn_empty().id();
        world.insert_resource(ModelRoot(root));
        assert_eq!(poll(&mut world), vec![50.0]);

        world.spawn(KeyLight);
        assert_eq!(poll(&mut world), vec![80.0]);
        assert!(world.resource::<ViewerSession>().loading);

        world.resource_mut::<MaterialSyncState>().applied = Some(showcase_ipc::ViewMode::Solid);
        assert_eq!(poll(&mut world), vec![100.0]);
        assert!(!world.resource::<ViewerSession>().loading);

        assert_eq!(poll(&mut world), Vec::<f32>::new());
    }

    #[test]
    fn test_session_stays_loading_until_finalized() {
        let mut world = loading_world();
        world.resource_mut::<FrameClock>().sample(16.0, 0.016, 0.016);
        let root = world.spawn_empty().id();
        world.insert_resource(ModelRoot(root));
        world.spawn(KeyLight);

        assert_eq!(poll(&mut world), vec![80.0]);
        assert!(world.resource::<ViewerSession>().loading);
    }
}
